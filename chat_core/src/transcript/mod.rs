//! Transcript module - the ordered record of a conversation.
//!
//! The transcript consists of:
//! - **Messages**: bot and user entries with stable, increasing identifiers
//! - **Placeholders**: pending bot entries later finalized in place
//! - **Store**: append and finalize primitives over the ordered sequence

mod message;
mod store;

pub use message::*;
pub use store::*;
