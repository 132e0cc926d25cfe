//! Little-endian field codecs shared by every protocol layer.
//!
//! All reads are bounds-checked against the slice; an out-of-range read
//! reports how many bytes the field needed and how many were available. The
//! protocol readers map [`Truncated`] onto their own error types.

use thiserror::Error;

/// A read that would run past the end of the slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("need {needed} bytes, got {actual}")]
pub struct Truncated {
    pub needed: usize,
    pub actual: usize,
}

/// Return `bytes[offset..offset + len]` without reading past the slice end.
pub fn read_slice(bytes: &[u8], offset: usize, len: usize) -> Result<&[u8], Truncated> {
    let end = offset.checked_add(len).ok_or(Truncated {
        needed: usize::MAX,
        actual: bytes.len(),
    })?;
    bytes.get(offset..end).ok_or(Truncated {
        needed: end,
        actual: bytes.len(),
    })
}

pub fn read_u8(bytes: &[u8], offset: usize) -> Result<u8, Truncated> {
    let field = read_slice(bytes, offset, 1)?;
    Ok(field[0])
}

/// Read a 16-bit value whose first byte is least significant.
///
/// # Examples
/// ```
/// use antsniff_core::read_u16_le;
///
/// assert_eq!(read_u16_le(&[0x34, 0x12], 0).unwrap(), 0x1234);
/// assert!(read_u16_le(&[0x34], 0).is_err());
/// ```
pub fn read_u16_le(bytes: &[u8], offset: usize) -> Result<u16, Truncated> {
    let field = read_slice(bytes, offset, 2)?;
    Ok(u16::from_le_bytes([field[0], field[1]]))
}

/// Read a 32-bit value whose first byte is least significant.
///
/// # Examples
/// ```
/// use antsniff_core::read_u32_le;
///
/// assert_eq!(read_u32_le(&[0x78, 0x56, 0x34, 0x12], 0).unwrap(), 0x1234_5678);
/// ```
pub fn read_u32_le(bytes: &[u8], offset: usize) -> Result<u32, Truncated> {
    let field = read_slice(bytes, offset, 4)?;
    Ok(u32::from_le_bytes([field[0], field[1], field[2], field[3]]))
}

/// Render bytes as contiguous lowercase hex (`[0xde, 0xad]` -> `"dead"`).
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
