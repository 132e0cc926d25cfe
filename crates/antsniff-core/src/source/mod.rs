mod hex;

pub use hex::HexLineSource;

use thiserror::Error;

/// One captured frame and the 1-based input line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameEvent {
    pub line: usize,
    pub bytes: Vec<u8>,
}

pub trait FrameSource {
    /// Next frame in input order, or `None` once the input is exhausted.
    ///
    /// An `InvalidToken` error only affects its own line; the source can be
    /// polled again afterwards.
    fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: invalid hex byte '{token}'")]
    InvalidToken { line: usize, token: String },
}

impl From<hex::error::HexSourceError> for SourceError {
    fn from(value: hex::error::HexSourceError) -> Self {
        match value {
            hex::error::HexSourceError::Io(err) => SourceError::Io(err),
            hex::error::HexSourceError::InvalidToken { line, token } => {
                SourceError::InvalidToken { line, token }
            }
        }
    }
}
