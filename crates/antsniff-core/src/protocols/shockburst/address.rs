use std::fmt;

use serde::{Serialize, Serializer};

use super::error::FrameError;
use super::layout;
use crate::protocols::common::read_slice;

/// 40-bit ShockBurst link address.
///
/// Displayed and serialized as fixed-width hex (`0x0102030405`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(u64);

impl Address {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#012x}", self.0)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Split the leading address off a frame.
///
/// Byte 0 lands in the most significant position of the 40-bit value.
///
/// # Examples
/// ```
/// use antsniff_core::protocols::shockburst::extract_address;
///
/// let (address, rest) = extract_address(&[0x01, 0x02, 0x03, 0x04, 0x05, 0xaa]).unwrap();
/// assert_eq!(address.value(), 0x01_0203_0405);
/// assert_eq!(rest, &[0xaa]);
/// ```
///
/// # Errors
/// Returns [`FrameError::TruncatedFrame`] when fewer than 5 bytes are present.
pub fn extract_address(frame: &[u8]) -> Result<(Address, &[u8]), FrameError> {
    let head = read_slice(frame, 0, layout::ADDRESS_LEN).map_err(|_| FrameError::TruncatedFrame {
        needed: layout::ADDRESS_LEN,
        actual: frame.len(),
    })?;
    let value = head
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, byte)| {
            acc | (u64::from(*byte) << (8 * (layout::ADDRESS_LEN - 1 - i)))
        });
    Ok((Address(value), &frame[layout::ADDRESS_LEN..]))
}

#[cfg(test)]
mod tests {
    use super::extract_address;
    use crate::protocols::shockburst::FrameError;

    #[test]
    fn first_byte_is_most_significant() {
        let (address, rest) = extract_address(&[0x01, 0x02, 0x03, 0x04, 0x05]).unwrap();
        assert_eq!(address.value(), 0x01_0203_0405);
        assert!(rest.is_empty());
    }

    #[test]
    fn display_is_fixed_width() {
        let (address, _) = extract_address(&[0x00, 0x00, 0x00, 0x00, 0x2a]).unwrap();
        assert_eq!(address.to_string(), "0x000000002a");

        let (address, _) = extract_address(&[0xff; 5]).unwrap();
        assert_eq!(address.to_string(), "0xffffffffff");
        assert_eq!(address.value(), 0xff_ffff_ffff);
    }

    #[test]
    fn serializes_as_hex_string() {
        let (address, _) = extract_address(&[0x01, 0x02, 0x03, 0x04, 0x05]).unwrap();
        let value = serde_json::to_value(address).unwrap();
        assert_eq!(value, serde_json::json!("0x0102030405"));
    }

    #[test]
    fn short_frame_is_truncated() {
        let err = extract_address(&[0x01, 0x02, 0x03, 0x04]).unwrap_err();
        assert_eq!(
            err,
            FrameError::TruncatedFrame {
                needed: 5,
                actual: 4
            }
        );
    }
}
