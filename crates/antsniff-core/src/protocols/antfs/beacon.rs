use serde::Serialize;

use super::codes::{BeaconAuthType, ChannelPeriod, LinkState};
use super::error::AntFsError;
use super::layout;
use super::reader::AntFsReader;

/// Decoded ANT-FS client beacon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "client beacon")]
pub struct Beacon {
    /// Client has data available for download.
    pub data: bool,
    /// Client accepts uploads.
    pub upload: bool,
    /// Client accepts pairing requests.
    pub pairing: bool,
    pub period: ChannelPeriod,
    #[serde(flatten)]
    pub state: BeaconState,
    pub auth_type: BeaconAuthType,
}

/// Link state together with the trailing fields that state carries.
///
/// A link beacon identifies the device; auth and transport beacons carry the
/// serial of the host the client is talking to. The two never coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum BeaconState {
    Link { device_type: u16, manufacturer: u16 },
    Auth { host_serial: u32 },
    Transport { host_serial: u32 },
    Busy,
    Reserved,
}

impl BeaconState {
    pub fn link_state(&self) -> LinkState {
        match self {
            Self::Link { .. } => LinkState::Link,
            Self::Auth { .. } => LinkState::Auth,
            Self::Transport { .. } => LinkState::Transport,
            Self::Busy => LinkState::Busy,
            Self::Reserved => LinkState::Reserved,
        }
    }

    pub fn host_serial(&self) -> Option<u32> {
        match self {
            Self::Auth { host_serial } | Self::Transport { host_serial } => Some(*host_serial),
            _ => None,
        }
    }
}

/// Decode a client beacon payload (channel header already stripped).
///
/// # Examples
/// ```
/// use antsniff_core::protocols::antfs::{BeaconState, parse_beacon};
///
/// let beacon = parse_beacon(&[0x30, 0x00, 0x00, 0x01, 0x00, 0x0f, 0x00]).unwrap();
/// assert!(beacon.data && beacon.upload && !beacon.pairing);
/// assert_eq!(beacon.state, BeaconState::Link { device_type: 1, manufacturer: 15 });
/// ```
///
/// # Errors
/// Returns [`AntFsError::TruncatedField`] when the payload lacks the status
/// bytes or the trailing fields its link state requires.
pub fn parse_beacon(payload: &[u8]) -> Result<Beacon, AntFsError> {
    let reader = AntFsReader::new(payload);

    let status = reader.read_u8("status", layout::BEACON_STATUS_OFFSET)?;
    let state_code = reader.read_u8("state", layout::BEACON_STATE_OFFSET)?;
    let auth_type = reader.read_u8("auth_type", layout::BEACON_AUTH_TYPE_OFFSET)?;

    let state = match LinkState::from_code(state_code & layout::STATE_LINK_STATE_MASK) {
        LinkState::Link => BeaconState::Link {
            device_type: reader.read_u16_le("device_type", layout::BEACON_DEVICE_TYPE_OFFSET)?,
            manufacturer: reader
                .read_u16_le("manufacturer", layout::BEACON_MANUFACTURER_OFFSET)?,
        },
        LinkState::Auth => BeaconState::Auth {
            host_serial: reader.read_u32_le("host_serial", layout::BEACON_HOST_SERIAL_OFFSET)?,
        },
        LinkState::Transport => BeaconState::Transport {
            host_serial: reader.read_u32_le("host_serial", layout::BEACON_HOST_SERIAL_OFFSET)?,
        },
        LinkState::Busy => BeaconState::Busy,
        LinkState::Reserved => BeaconState::Reserved,
    };

    Ok(Beacon {
        data: status & layout::STATUS_DATA_AVAILABLE != 0,
        upload: status & layout::STATUS_UPLOAD_ENABLED != 0,
        pairing: status & layout::STATUS_PAIRING_ENABLED != 0,
        period: ChannelPeriod::from_code(status & layout::STATUS_PERIOD_MASK),
        state,
        auth_type: BeaconAuthType::from_code(auth_type),
    })
}
