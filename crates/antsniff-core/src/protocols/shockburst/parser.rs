use super::address::{Address, extract_address};
use super::error::FrameError;
use super::layout;

/// Frame payload after channel classification.
///
/// Beacon and command/response payloads start after the channel header. An
/// unknown channel keeps the whole post-address remainder, header included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel<'a> {
    Beacon(&'a [u8]),
    CommandResponse(&'a [u8]),
    Unknown(&'a [u8]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShockBurstFrame<'a> {
    pub address: Address,
    pub channel: Channel<'a>,
}

/// Classify the post-address remainder by its channel-type byte.
pub fn classify_channel(rest: &[u8]) -> Result<Channel<'_>, FrameError> {
    if rest.len() < layout::CHANNEL_HEADER_LEN {
        return Err(FrameError::TruncatedFrame {
            needed: layout::CHANNEL_HEADER_LEN,
            actual: rest.len(),
        });
    }

    let payload = &rest[layout::CHANNEL_HEADER_LEN..];
    let channel = match rest[layout::CHANNEL_TYPE_OFFSET] {
        layout::CHANNEL_TYPE_BEACON => Channel::Beacon(payload),
        layout::CHANNEL_TYPE_COMMAND => Channel::CommandResponse(payload),
        _ => Channel::Unknown(rest),
    };
    Ok(channel)
}

/// Split a captured frame into its address and classified payload.
///
/// # Errors
/// Returns [`FrameError::TruncatedFrame`] for frames shorter than the address
/// plus channel header (8 bytes), whatever their contents.
pub fn parse_frame(frame: &[u8]) -> Result<ShockBurstFrame<'_>, FrameError> {
    if frame.len() < layout::MIN_FRAME_LEN {
        return Err(FrameError::TruncatedFrame {
            needed: layout::MIN_FRAME_LEN,
            actual: frame.len(),
        });
    }
    let (address, rest) = extract_address(frame)?;
    let channel = classify_channel(rest)?;
    Ok(ShockBurstFrame { address, channel })
}

#[cfg(test)]
mod tests {
    use super::{Channel, classify_channel, parse_frame};
    use crate::protocols::shockburst::{FrameError, layout};

    #[test]
    fn beacon_payload_skips_channel_header() {
        let frame = [1, 2, 3, 4, 5, 0xaa, 0xbb, 0x43, 0x30, 0x0a];
        let parsed = parse_frame(&frame).unwrap();
        assert_eq!(parsed.address.value(), 0x01_0203_0405);
        assert_eq!(parsed.channel, Channel::Beacon(&[0x30, 0x0a]));
    }

    #[test]
    fn command_payload_skips_channel_header() {
        let rest = [0x00, 0x00, layout::CHANNEL_TYPE_COMMAND, 0x05];
        assert_eq!(
            classify_channel(&rest).unwrap(),
            Channel::CommandResponse(&[0x05])
        );
    }

    #[test]
    fn unknown_channel_keeps_full_remainder() {
        let rest = [0xaa, 0xbb, 0x50, 0x01, 0x02];
        assert_eq!(classify_channel(&rest).unwrap(), Channel::Unknown(&rest));
    }

    #[test]
    fn header_only_frame_has_empty_payload() {
        let frame = [1, 2, 3, 4, 5, 0, 0, layout::CHANNEL_TYPE_BEACON];
        let parsed = parse_frame(&frame).unwrap();
        assert_eq!(parsed.channel, Channel::Beacon(&[]));
    }

    #[test]
    fn frames_shorter_than_header_are_truncated() {
        for len in 0..layout::MIN_FRAME_LEN {
            let frame = vec![layout::CHANNEL_TYPE_BEACON; len];
            assert_eq!(
                parse_frame(&frame).unwrap_err(),
                FrameError::TruncatedFrame {
                    needed: layout::MIN_FRAME_LEN,
                    actual: len
                }
            );
        }
    }
}
