//! YAML fixtures for the canonical tests.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// One fixture entry: an input document and what scanning it should yield.
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub desc: String,
    pub njf: String,
    /// Expected outline, one line per object (see `harness::outline`)
    #[serde(default)]
    pub outline: Vec<String>,
    /// Expected `SyntaxErrorKind` name when the input is malformed
    #[serde(default)]
    pub error: Option<String>,
}

fn fixture_path(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", &format!("{name}.yaml")]
        .iter()
        .collect()
}

pub fn load_fixtures(path: &Path) -> Vec<TestCase> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => panic!("cannot read {}: {err}", path.display()),
    };
    match serde_yaml::from_str(&text) {
        Ok(cases) => cases,
        Err(err) => panic!("bad fixture {}: {err}", path.display()),
    }
}

/// Load `tests/fixtures/<name>.yaml`.
pub fn load_fixtures_by_name(name: &str) -> Vec<TestCase> {
    load_fixtures(&fixture_path(name))
}
