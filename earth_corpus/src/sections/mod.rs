//! Content definitions for the encyclopedia.

mod button;
mod section;

pub use button::*;
pub use section::*;
