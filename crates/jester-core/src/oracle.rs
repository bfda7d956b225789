//! The one-question oracle.
//!
//! Reads a single line of input, ignores what it says, and answers with a
//! uniformly chosen canned response.

use std::io::{BufRead, Write};

use crate::error::JesterResult;
use crate::random::RandomSource;

/// Prompt written before the question is read.
pub const PROMPT: &str = "Ask the jester your question: ";

/// Decorative label printed in front of the reply.
pub const REPLY_LABEL: &str = "🎭 Jester says: ";

/// The oracle's possible replies.
pub const RESPONSES: [&str; 5] = [
    "Hmm... sounds like a race condition in your soul.",
    "Try rebooting your sense of identity.",
    "That’s not a bug, it’s a metaphor.",
    "404: Motivation not found.",
    "Ah yes, classic user error... also known as life.",
];

/// Pick a reply uniformly from [`RESPONSES`].
pub fn choose_reply<R: RandomSource + ?Sized>(rng: &mut R) -> &'static str {
    RESPONSES[rng.pick(RESPONSES.len())]
}

/// Prompt, read one question line, and print the chosen reply.
///
/// The question is accepted as raw bytes (an empty line, EOF or invalid
/// UTF-8 is fine) and has no influence on the reply. Returns the reply that was printed.
pub fn ask<I, W, R>(input: &mut I, out: &mut W, rng: &mut R) -> JesterResult<&'static str>
where
    I: BufRead + ?Sized,
    W: Write + ?Sized,
    R: RandomSource + ?Sized,
{
    write!(out, "{PROMPT}")?;
    out.flush()?;

    let mut question = Vec::new();
    let read = input.read_until(b'\n', &mut question)?;
    tracing::debug!(bytes = read, "question received");

    let reply = choose_reply(rng);
    writeln!(out, "\n{REPLY_LABEL}{reply}")?;
    out.flush()?;
    Ok(reply)
}
