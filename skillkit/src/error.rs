//! Error types for skillkit.

use thiserror::Error;

/// Errors surfaced by widget construction and terminal drawing.
#[derive(Debug, Error)]
pub enum Error {
    /// Two options in one list share an id.
    #[error("duplicate option id '{0}'")]
    DuplicateOptionId(String),

    /// Writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
