//! Test infrastructure for the NJF scanner
//!
//! Provides fixture loading, stochastic re-spacing and outline rendering.

#![allow(dead_code)]

mod generators;
mod harness;
mod loader;

pub use generators::Gen;
pub use harness::{outline, run_test, run_with_variations};
pub use loader::{load_fixtures_by_name, TestCase};
