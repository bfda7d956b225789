//! The voidchain session logger.
//!
//! A visitor is greeted according to their platform, asked to step into the
//! void, and asked for a wish. Each step appends a timestamped block to an
//! in-memory chain that is written once, as pretty JSON, when the session
//! ends.

pub mod chain;
pub mod platform;
pub mod record;
pub mod reply;
pub mod session;

pub use chain::Chain;
pub use platform::Platform;
pub use record::ChainRecord;
pub use reply::VoidReply;
pub use session::{VoidSession, VoidState, run_session};
