use thiserror::Error;

/// Errors returned by ANT-FS payload decoding.
///
/// Unknown opcodes are not errors; they decode to a hex-dump message.
///
/// # Examples
/// ```
/// use antsniff_core::protocols::antfs::AntFsError;
///
/// let err = AntFsError::TruncatedField { field: "host_serial", needed: 7, actual: 5 };
/// assert!(err.to_string().contains("host_serial"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AntFsError {
    #[error("truncated field `{field}`: need {needed} bytes, got {actual}")]
    TruncatedField {
        field: &'static str,
        needed: usize,
        actual: usize,
    },
}
