use thiserror::Error;

use crate::protocols::antfs::{AntFsError, parse_beacon, parse_message};
use crate::protocols::shockburst::{Channel, FrameError, ShockBurstFrame, parse_frame};
use crate::record::{DecodedRecord, Payload, UnknownChannel};

/// Why a frame could not be decoded.
///
/// Unknown channel types and opcodes are not errors; only frames too short
/// for the fields they must carry fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error(transparent)]
    AntFs(#[from] AntFsError),
}

/// Decode one captured frame into a record.
///
/// Pure and stateless: the same bytes always give the same result, and no
/// partial record is returned on failure.
///
/// # Examples
/// ```
/// use antsniff_core::{Payload, decode};
///
/// let frame = [0x01, 0x02, 0x03, 0x04, 0x05, 0xaa, 0xbb, 0x43, 0x30, 0x03, 0x00];
/// let record = decode(&frame)?;
/// assert_eq!(record.address.to_string(), "0x0102030405");
/// assert!(matches!(record.payload, Payload::Beacon(_)));
/// # Ok::<(), antsniff_core::DecodeError>(())
/// ```
///
/// # Errors
/// Returns [`DecodeError::Frame`] for frames shorter than 8 bytes and
/// [`DecodeError::AntFs`] when the payload is too short for its fields.
pub fn decode(frame: &[u8]) -> Result<DecodedRecord, DecodeError> {
    let ShockBurstFrame { address, channel } = parse_frame(frame)?;
    let payload = match channel {
        Channel::Beacon(payload) => Payload::Beacon(parse_beacon(payload)?),
        Channel::CommandResponse(payload) => Payload::Message(parse_message(payload)?),
        Channel::Unknown(raw) => Payload::Unknown(UnknownChannel::from_raw(raw)),
    };
    Ok(DecodedRecord::new(address, payload))
}

#[cfg(test)]
mod tests {
    use super::{DecodeError, decode};
    use crate::protocols::antfs::{AntFsError, BeaconState, Message, Opcode};
    use crate::protocols::shockburst::FrameError;
    use crate::record::Payload;
    use proptest::prelude::*;
    use serde_json::json;

    const ADDRESS: [u8; 5] = [0x01, 0x02, 0x03, 0x04, 0x05];

    fn frame(channel_type: u8, payload: &[u8]) -> Vec<u8> {
        let mut frame = ADDRESS.to_vec();
        frame.extend_from_slice(&[0xaa, 0xbb, channel_type]);
        frame.extend_from_slice(payload);
        frame
    }

    #[test]
    fn beacon_end_to_end() {
        let record = decode(&frame(0x43, &[0x30, 0x0a, 0x00, 0x01, 0x00, 0x0f, 0x00])).unwrap();
        assert_eq!(record.address.value(), 0x01_0203_0405);
        let Payload::Beacon(beacon) = &record.payload else {
            panic!("expected beacon, got {:?}", record.payload);
        };
        assert!(beacon.data && beacon.upload && !beacon.pairing);
        // 0x0a has low nibble 0x0a -> reserved state, no trailing fields.
        assert_eq!(beacon.state, BeaconState::Reserved);
    }

    #[test]
    fn link_beacon_has_identity_but_no_serial() {
        let record = decode(&frame(0x43, &[0x30, 0x00, 0x00, 0x01, 0x00, 0x0f, 0x00])).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], json!("client beacon"));
        assert_eq!(value["state"], json!("link"));
        assert_eq!(value["period"], json!("0.5 Hz"));
        assert_eq!(value["device_type"], json!(1));
        assert_eq!(value["manufacturer"], json!(15));
        assert!(value.get("host_serial").is_none());
    }

    #[test]
    fn unknown_channel_preserves_raw_bytes() {
        let record = decode(&frame(0x50, &[0xde, 0xad])).unwrap();
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "address": "0x0102030405", "type": "unknown", "data": "aabb50dead" })
        );
    }

    #[test]
    fn unknown_opcode_is_not_an_error() {
        let record = decode(&frame(0x44, &[0xff, 0x00, 0x01])).unwrap();
        let Payload::Message(Message::Unrecognized(msg)) = &record.payload else {
            panic!("expected unrecognized message, got {:?}", record.payload);
        };
        assert_eq!(msg.opcode, 0xff);
        assert_eq!(msg.data, "ff0001");
    }

    #[test]
    fn short_frames_fail_before_classification() {
        let err = decode(&[0x01, 0x02, 0x03, 0x04, 0x05, 0xaa, 0x43]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Frame(FrameError::TruncatedFrame {
                needed: 8,
                actual: 7
            })
        );
    }

    #[test]
    fn truncated_payload_fails_whole_frame() {
        let err = decode(&frame(0x44, &[0x02, 0x10, 0x01])).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::AntFs(AntFsError::TruncatedField {
                field: "host_serial",
                ..
            })
        ));
        assert!(err.to_string().contains("host_serial"));
    }

    #[test]
    fn command_frame_with_empty_payload_lacks_opcode() {
        let err = decode(&frame(0x44, &[])).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::AntFs(AntFsError::TruncatedField { field: "opcode", .. })
        ));
    }

    proptest! {
        #[test]
        fn decode_is_deterministic(bytes in proptest::collection::vec(any::<u8>(), 0..32)) {
            prop_assert_eq!(decode(&bytes), decode(&bytes));
        }

        #[test]
        fn frames_shorter_than_header_always_truncate(
            bytes in proptest::collection::vec(any::<u8>(), 0..8)
        ) {
            let is_truncated_frame = matches!(
                decode(&bytes),
                Err(DecodeError::Frame(FrameError::TruncatedFrame { .. }))
            );
            prop_assert!(is_truncated_frame);
        }

        #[test]
        fn unknown_channels_never_fail(
            address in proptest::array::uniform5(any::<u8>()),
            header in proptest::array::uniform2(any::<u8>()),
            channel_type in any::<u8>()
                .prop_filter("not beacon/command", |b| *b != 0x43 && *b != 0x44),
            rest in proptest::collection::vec(any::<u8>(), 0..16)
        ) {
            let mut bytes = address.to_vec();
            bytes.extend_from_slice(&header);
            bytes.push(channel_type);
            bytes.extend_from_slice(&rest);
            let record = decode(&bytes).unwrap();
            prop_assert!(matches!(record.payload, Payload::Unknown(_)));
        }

        #[test]
        fn unrecognized_opcodes_never_fail(
            opcode in any::<u8>().prop_filter("unknown opcode", |b| {
                matches!(Opcode::from(*b), Opcode::Unrecognized(_))
            }),
            rest in proptest::collection::vec(any::<u8>(), 0..16)
        ) {
            let mut payload = vec![opcode];
            payload.extend_from_slice(&rest);
            let record = decode(&frame(0x44, &payload)).unwrap();
            let is_unrecognized =
                matches!(record.payload, Payload::Message(Message::Unrecognized(_)));
            prop_assert!(is_unrecognized);
        }
    }
}
