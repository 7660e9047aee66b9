use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for the sentence generator
#[derive(Error, Debug)]
pub enum GrammarError {
    /// The grammar file could not be opened
    #[error("cannot open grammar file {path}: {source}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A rule line failed to parse; the whole load is rejected
    #[error("malformed rule on line {line}: {reason}")]
    MalformedRule { line: usize, reason: String },

    /// A symbol was chosen for expansion but every expansion has zero weight
    #[error("no selectable expansion for symbol `{0}`")]
    NoViableExpansion(String),
}

/// Result type for grammar operations
pub type Result<T> = std::result::Result<T, GrammarError>;
