//! Print the outline of an NJF document.
//!
//! Usage: cargo run --example print_tree -- [path]
//!
//! Defaults to the sample document used by the tests. Set `RUST_LOG=debug`
//! to see loader diagnostics.

use std::process::ExitCode;

use njf_core::{Body, File, FlagValue};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn print_body(body: Body<'_>, depth: usize) {
    for object in body.objects() {
        print!("{}Object \"{}\" Flags: ", "    ".repeat(depth), String::from_utf8_lossy(object.name()));

        for flag in object.flags() {
            match flag {
                FlagValue::Identifier(ident) => print!("{} ", String::from_utf8_lossy(ident)),
                FlagValue::Number(n) => print!("{n} "),
                FlagValue::NotFound => {}
            }
        }
        println!();

        if object.has_body() {
            print_body(object.body(), depth + 1);
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let path = std::env::args().nth(1).unwrap_or_else(|| {
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.njf").to_string()
    });

    let file = match File::load(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    print_body(file.body(), 0);

    if let Err(err) = file.body().validate() {
        eprintln!("{path}:{}: {}", file.locate(err.offset), err.kind.message());
        return ExitCode::FAILURE;
    }

    file.release();
    ExitCode::SUCCESS
}
