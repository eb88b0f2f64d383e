use std::path::PathBuf;
use thiserror::Error;

/* Syntax error inside an object literal. `offset` is a byte offset into the literal text. */
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} at offset {offset}")]
pub struct LiteralError {
    pub offset: usize,
    pub message: String,
}

/* Reasons a single registry entry is skipped. Never fatal for the run. */
#[derive(Error, Debug)]
pub enum EntryError {
    #[error("failed to read entry: {0}")]
    Io(#[from] std::io::Error),

    #[error("no `data = {{ ... }}` assignment found")]
    MissingMarker,

    #[error("malformed object literal at line {line}, column {column}: {message}")]
    Literal {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("record does not match the chain schema: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("record has no chainId")]
    MissingChainId,
}

/* Errors that stop loading altogether */
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read registry directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
