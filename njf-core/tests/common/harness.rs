//! Test harness for running fixtures with stochastic variations

use crate::common::{Gen, TestCase};
use njf_core::{Body, FlagValue};

/// Result of running a test
#[derive(Debug)]
pub struct TestResult {
    pub passed: bool,
    pub input: Vec<u8>,
    pub expected: Vec<String>,
    pub actual: Vec<String>,
    pub seed: u64,
    pub errors: Vec<String>,
}

/// Render a body as one line per object, depth-first.
///
/// Each line is the raw name followed by its flags, indented two spaces
/// per nesting level. Objects with a nested body get a ` {}` suffix and
/// their children on the following lines. The second value is the
/// `SyntaxErrorKind` (as its Debug name) of the first cursor that stopped
/// on malformed input, in document order.
pub fn outline(body: Body<'_>) -> (Vec<String>, Option<String>) {
    let mut lines = Vec::new();
    let mut error = None;
    render(body, 0, &mut lines, &mut error);
    (lines, error)
}

fn render(body: Body<'_>, depth: usize, lines: &mut Vec<String>, error: &mut Option<String>) {
    let mut objects = body.objects();
    for object in objects.by_ref() {
        let mut line = "  ".repeat(depth);
        line.push_str(&String::from_utf8_lossy(object.name()));
        for flag in object.flags() {
            line.push(' ');
            match flag {
                FlagValue::Identifier(ident) => line.push_str(&String::from_utf8_lossy(ident)),
                FlagValue::Number(n) => line.push_str(&n.to_string()),
                FlagValue::NotFound => unreachable!("iterator never yields NotFound"),
            }
        }
        if object.has_body() {
            line.push_str(" {}");
        }
        lines.push(line);

        if object.has_body() {
            render(object.body(), depth + 1, lines, error);
        }
    }
    if let Some(err) = objects.error() {
        error.get_or_insert_with(|| format!("{:?}", err.kind));
    }
}

fn compare(case: &TestCase, input: Vec<u8>, seed: u64) -> TestResult {
    let (actual, error) = outline(Body::new(&input));
    let expected = case.outline.clone();
    let mut errors = Vec::new();

    if actual.len() != expected.len() {
        errors.push(format!(
            "Line count mismatch: expected {}, got {}",
            expected.len(),
            actual.len()
        ));
    }

    for (i, (act, exp)) in actual.iter().zip(expected.iter()).enumerate() {
        if act != exp {
            errors.push(format!("Line {}: expected '{}', got '{}'", i, exp, act));
        }
    }

    if error != case.error {
        errors.push(format!("Error mismatch: expected {:?}, got {:?}", case.error, error));
    }

    // Objects-first and counting must agree with what was rendered
    let body = Body::new(&input);
    let top_level = body.objects().count();
    if body.object_count() != top_level {
        errors.push(format!(
            "object_count {} != enumerated {}",
            body.object_count(),
            top_level
        ));
    }

    TestResult {
        passed: errors.is_empty(),
        input,
        expected,
        actual,
        seed,
        errors,
    }
}

/// Run a single test case (canonical, no variations)
pub fn run_test(case: &TestCase) -> TestResult {
    compare(case, case.njf.as_bytes().to_vec(), 0)
}

/// Run test with every whitespace run replaced by a random one.
///
/// Whitespace is insignificant between tokens, so the outline and the
/// error kind must not change.
pub fn run_with_variations(case: &TestCase, gen: &mut Gen) -> TestResult {
    let input = gen.respace(case.njf.as_bytes());
    compare(case, input, gen.seed)
}

impl TestResult {
    /// Print detailed failure info
    pub fn print_failure(&self, case_id: &str) {
        eprintln!("\n=== FAILED: {} ===", case_id);
        eprintln!("Seed: {} (set NJF_TEST_SEED={} to reproduce)", self.seed, self.seed);
        eprintln!("\nInput:");
        eprintln!("{}", String::from_utf8_lossy(&self.input));
        eprintln!("\nExpected outline:");
        for (i, e) in self.expected.iter().enumerate() {
            eprintln!("  {}: {}", i, e);
        }
        eprintln!("\nActual outline:");
        for (i, e) in self.actual.iter().enumerate() {
            eprintln!("  {}: {}", i, e);
        }
        eprintln!("\nErrors:");
        for e in &self.errors {
            eprintln!("  - {}", e);
        }
    }
}
