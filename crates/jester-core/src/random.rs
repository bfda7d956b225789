//! Injectable randomness.
//!
//! Every random decision in the jester programs goes through
//! [`RandomSource`], so tests can replay fixed values while the CLI uses a
//! seeded or entropy-backed `StdRng`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Alphabet for session identifiers (lowercase base 36).
const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A source of the random values the jester programs consume.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;

    /// A `len`-character lowercase base-36 token.
    fn token(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(TOKEN_ALPHABET[self.pick(TOKEN_ALPHABET.len())]))
            .collect()
    }
}

impl<R: Rng> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Build the RNG for a run: reproducible when seeded, entropy otherwise.
pub fn source_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
