use thiserror::Error;

/// Errors raised by the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("password length must be at least 1, got {0}")]
    InvalidLength(usize),

    #[error("length {length} is too short to include all {classes} enabled character classes")]
    TooShortForClasses { length: usize, classes: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("aborted")]
    Aborted,
}

pub type Result<T> = std::result::Result<T, Error>;
