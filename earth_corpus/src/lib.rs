//! # Earth Corpus
//!
//! The "encyclopedia" crate - every section, fact and sub-fact the kiosk can show.
//! This crate is the single source of truth for content and does not contain any
//! conversation logic.

pub mod corpus;
pub mod error;
pub mod markup;
pub mod sections;

pub use corpus::*;
pub use error::*;
pub use markup::*;
pub use sections::*;
