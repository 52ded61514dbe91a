//! # Chat Core
//!
//! The conversation engine of the Earth kiosk. This crate reads the
//! `earth_corpus` content, keeps the transcript of a session, resolves button
//! actions and search queries into bot replies, and schedules those replies
//! behind a short "typing" delay.
//!
//! ## Core Components
//!
//! - **transcript**: Ordered message store with stable identifiers
//! - **navigation**: Turns button actions into bot replies
//! - **search**: Case-insensitive substring search over the corpus
//! - **session**: Owns one conversation and its scheduled replies
//! - **events**: User input consumed by a session
//!
//! ## Design Philosophy
//!
//! - **Permissive**: Unknown actions and empty queries are ignored, never errors
//! - **Event-Driven**: The session reacts to user events and clock ticks, it never owns a loop
//! - **Stable identity**: A placeholder keeps its id and position when its reply arrives

pub mod config;
pub mod error;
pub mod events;
pub mod navigation;
pub mod search;
pub mod session;
pub mod transcript;

pub use config::*;
pub use error::*;
pub use events::*;
pub use navigation::*;
pub use search::*;
pub use session::*;
pub use transcript::*;
