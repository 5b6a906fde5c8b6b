// File: src/error.rs
use std::io;

/// Everything that can go wrong in a solver session.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The ciphertext read at startup had no usable characters.
    #[error("ciphertext is empty")]
    EmptyInput,

    #[error("unknown heuristic language '{0}' (expected 'german' or 'english')")]
    UnknownLanguage(String),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SolverError>;
