use serde::Serialize;

use crate::protocols::antfs::{Beacon, Message};
use crate::protocols::common::to_hex;
use crate::protocols::shockburst::Address;

/// One decoded frame: its link address plus the classified payload.
///
/// Serializes as a single flat object, e.g.
/// `{"address": "0x0102030405", "type": "client beacon", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedRecord {
    pub address: Address,
    #[serde(flatten)]
    pub payload: Payload,
}

/// Classification of a frame by its channel-type byte.
///
/// Each variant serializes its own `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Beacon(Beacon),
    Message(Message),
    Unknown(UnknownChannel),
}

/// Frame whose channel type is neither beacon nor command/response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "unknown")]
pub struct UnknownChannel {
    /// Post-address bytes, channel header included, as lowercase hex.
    pub data: String,
}

impl UnknownChannel {
    pub fn from_raw(raw: &[u8]) -> Self {
        Self { data: to_hex(raw) }
    }
}

/// Coarse classification used for summaries and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Beacon,
    Message,
    Unknown,
}

impl DecodedRecord {
    pub fn new(address: Address, payload: Payload) -> Self {
        Self { address, payload }
    }

    pub fn kind(&self) -> RecordKind {
        match self.payload {
            Payload::Beacon(_) => RecordKind::Beacon,
            Payload::Message(_) => RecordKind::Message,
            Payload::Unknown(_) => RecordKind::Unknown,
        }
    }
}
