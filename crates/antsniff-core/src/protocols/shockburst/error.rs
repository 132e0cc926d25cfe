use thiserror::Error;

/// Errors raised while splitting a frame into address, header and payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("truncated frame: need {needed} bytes, got {actual}")]
    TruncatedFrame { needed: usize, actual: usize },
}
