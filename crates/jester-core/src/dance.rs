//! The endless thought printer.
//!
//! Cycles through a fixed set of thoughts forever. After every printed line
//! a uniform draw is taken; once a draw exceeds the stop threshold the
//! jester leaves and the dance ends with [`JesterError::JesterLeft`].

use std::io::Write;

use crate::error::JesterError;
use crate::random::RandomSource;

/// The thoughts printed in order, wrapping around.
pub const THOUGHTS: [&str; 4] = [
    "Why does 0 == '0', but 0 !== '0'?",
    "I declared a var and it declared me back.",
    "Sometimes I console.log just to feel seen.",
    "This loop has no purpose, and that's the point.",
];

/// The thought printed on the `n`th line (1-based). Line 0 is treated as
/// line 1.
pub fn thought_for_line(n: u64) -> &'static str {
    let idx = (n.saturating_sub(1) % THOUGHTS.len() as u64) as usize;
    THOUGHTS[idx]
}

/// Infinite iterator over [`THOUGHTS`] in print order.
#[derive(Debug, Clone, Default)]
pub struct ThoughtCycle {
    printed: u64,
}

impl ThoughtCycle {
    /// Start a new cycle at the first thought.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many thoughts the cycle has produced.
    pub fn printed(&self) -> u64 {
        self.printed
    }
}

impl Iterator for ThoughtCycle {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        self.printed += 1;
        Some(thought_for_line(self.printed))
    }
}

/// Print thoughts until a draw exceeds `stop_threshold`.
///
/// Never returns normally: the result is either
/// [`JesterError::JesterLeft`] or the I/O error that interrupted printing.
pub fn dance<W, R>(out: &mut W, rng: &mut R, stop_threshold: f64) -> JesterError
where
    W: Write + ?Sized,
    R: RandomSource + ?Sized,
{
    let mut lines = 0u64;
    loop {
        lines += 1;
        if let Err(e) = writeln!(out, "{}", thought_for_line(lines)) {
            return e.into();
        }
        if rng.unit() > stop_threshold {
            tracing::info!(lines, "the jester has left the terminal");
            return JesterError::JesterLeft { lines };
        }
    }
}
