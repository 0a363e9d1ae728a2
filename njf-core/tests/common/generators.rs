//! Random re-spacing of NJF documents.
//!
//! Every run is driven by one seed; failures print it so the exact run can
//! be replayed with `NJF_TEST_SEED`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SPACES: &[u8] = b" \t\r\n\x0B";

/// Seeded source of variation counts and whitespace runs.
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

impl Gen {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// `NJF_TEST_SEED` if set, a fresh random seed otherwise.
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var("NJF_TEST_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(rand::random);
        Self::new(seed)
    }

    /// Number of draws below `alpha` before the first one above it.
    pub fn geometric(&mut self, alpha: f64) -> usize {
        let mut n = 0;
        while self.rng.gen::<f64>() < alpha {
            n += 1;
        }
        n
    }

    /// Knuth's Poisson sampler.
    pub fn poisson(&mut self, lambda: f64) -> usize {
        let l = (-lambda).exp();
        let mut k = 0;
        let mut p = 1.0;
        loop {
            k += 1;
            p *= self.rng.gen::<f64>();
            if p <= l {
                break;
            }
        }
        k - 1
    }

    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// A run of `min + geometric` separator bytes
    pub fn whitespace(&mut self, min: usize) -> Vec<u8> {
        let len = min + self.geometric(0.5);
        (0..len)
            .map(|_| SPACES[self.rng.gen_range(0..SPACES.len())])
            .collect()
    }

    /// Replace every whitespace run outside quoted strings with a fresh
    /// random run, and pad both ends.
    ///
    /// Runs are only replaced, never inserted, so the token stream is
    /// unchanged: `12px` stays one number and one identifier.
    pub fn respace(&mut self, input: &[u8]) -> Vec<u8> {
        let mut out = self.whitespace(0);
        let mut in_string = false;
        let mut i = 0;

        while i < input.len() {
            let b = input[i];
            if in_string {
                if b == b'\\' && input.get(i + 1) == Some(&b'"') {
                    out.extend_from_slice(b"\\\"");
                    i += 2;
                    continue;
                }
                in_string = b != b'"';
                out.push(b);
                i += 1;
            } else if SPACES.contains(&b) {
                while i < input.len() && SPACES.contains(&input[i]) {
                    i += 1;
                }
                out.extend(self.whitespace(1));
            } else {
                in_string = b == b'"';
                out.push(b);
                i += 1;
            }
        }

        out.extend(self.whitespace(0));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducibility() {
        let mut g1 = Gen::new(42);
        let mut g2 = Gen::new(42);

        for _ in 0..10 {
            assert_eq!(g1.whitespace(1), g2.whitespace(1));
            assert_eq!(g1.geometric(0.9), g2.geometric(0.9));
        }
    }

    #[test]
    fn test_respace_keeps_strings() {
        let mut gen = Gen::new(7);
        let out = gen.respace(b"\"a b\" 1 { \"c\\\" d\" }");
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"a b\""));
        assert!(text.contains("\"c\\\" d\""));
    }
}
