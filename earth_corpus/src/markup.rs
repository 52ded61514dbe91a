//! Emphasis markup helpers.
//!
//! Corpus text marks key figures with `**double asterisks**`. Renderers either
//! highlight those segments or drop the markers entirely.

use serde::{Deserialize, Serialize};

const MARKER: &str = "**";

/// A run of text that is either plain or emphasized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub emphasized: bool,
}

/// Remove every emphasis marker from the text.
pub fn strip_emphasis(text: &str) -> String {
    text.replace(MARKER, "")
}

/// Split text into plain and emphasized runs.
///
/// Odd-numbered segments between markers are emphasized. An unmatched trailing
/// marker emphasizes the rest of the text. Empty runs are dropped.
pub fn emphasis_spans(text: &str) -> Vec<Span> {
    text.split(MARKER)
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| Span {
            text: part.to_string(),
            emphasized: i % 2 == 1,
        })
        .collect()
}
