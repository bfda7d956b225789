//! Core behaviour for the jester novelty programs.
//!
//! Three independent programs live here: an endless thought printer that
//! stops at random, a one-question oracle, and the voidchain logger that
//! records a short visitor session as a JSON chain of timestamped blocks.

pub mod config;
pub mod dance;
pub mod error;
pub mod oracle;
pub mod random;
pub mod voidchain;

pub use config::JesterConfig;
pub use error::{JesterError, JesterResult};
pub use random::{RandomSource, source_from_seed};
