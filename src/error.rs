use std::path::PathBuf;

use thiserror::Error;

pub type SurferResult<T> = Result<T, SurferError>;

#[derive(Debug, Error)]
pub enum SurferError {
    #[error("failed to read name database `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed database line {line_number}: {reason}")]
    MalformedLine { line_number: usize, reason: String },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
