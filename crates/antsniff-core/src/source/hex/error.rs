use thiserror::Error;

#[derive(Debug, Error)]
pub enum HexSourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: invalid hex byte '{token}'")]
    InvalidToken { line: usize, token: String },
}
