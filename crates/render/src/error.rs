//! Rendering error model.

use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

/// Failure while serialising a report into text.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV output: {0}")]
    Io(#[from] std::io::Error),

    #[error("rendered output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
