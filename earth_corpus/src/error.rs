//! Errors raised while loading or validating a corpus.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CorpusError>;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse corpus: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate section key `{0}`")]
    DuplicateSection(String),

    #[error("duplicate sub-fact key `{0}`")]
    DuplicateSubFact(String),

    #[error("section `{section}` links to unknown sub-fact `{action}`")]
    DanglingButton { section: String, action: String },

    #[error("corpus has no sections")]
    Empty,
}
