//! Closed code tables used by beacons, commands and responses.
//!
//! Each table maps a raw byte onto a named value and falls back to a
//! catch-all (`reserved` or `EINVAL`) for codes the protocol does not define.
//! Values serialize as their protocol label.

use serde::Serialize;

/// Beacon / link channel period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChannelPeriod {
    #[serde(rename = "0.5 Hz")]
    HalfHz,
    #[serde(rename = "1 Hz")]
    OneHz,
    #[serde(rename = "2 Hz")]
    TwoHz,
    #[serde(rename = "4 Hz")]
    FourHz,
    #[serde(rename = "8 Hz")]
    EightHz,
    #[serde(rename = "match established")]
    MatchEstablished,
    #[serde(rename = "reserved")]
    Reserved,
}

impl ChannelPeriod {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::HalfHz,
            1 => Self::OneHz,
            2 => Self::TwoHz,
            3 => Self::FourHz,
            4 => Self::EightHz,
            7 => Self::MatchEstablished,
            _ => Self::Reserved,
        }
    }
}

/// Client session phase advertised in the beacon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkState {
    Link,
    Auth,
    Transport,
    Busy,
    Reserved,
}

impl LinkState {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Link,
            1 => Self::Auth,
            2 => Self::Transport,
            3 => Self::Busy,
            _ => Self::Reserved,
        }
    }
}

/// Authentication modes a client beacon advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BeaconAuthType {
    #[serde(rename = "pass-through")]
    PassThrough,
    #[serde(rename = "n/a")]
    NotAvailable,
    #[serde(rename = "pairing")]
    Pairing,
    #[serde(rename = "passkey & pairing")]
    PasskeyAndPairing,
    #[serde(rename = "reserved")]
    Reserved,
}

impl BeaconAuthType {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::PassThrough,
            1 => Self::NotAvailable,
            2 => Self::Pairing,
            3 => Self::PasskeyAndPairing,
            _ => Self::Reserved,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DisconnectType {
    #[serde(rename = "return to link")]
    ReturnToLink,
    #[serde(rename = "return to broadcast")]
    ReturnToBroadcast,
    #[serde(rename = "reserved")]
    Reserved,
    #[serde(rename = "device specific")]
    DeviceSpecific,
}

impl DisconnectType {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::ReturnToLink,
            1 => Self::ReturnToBroadcast,
            2..=127 => Self::Reserved,
            _ => Self::DeviceSpecific,
        }
    }
}

/// Authentication request carried by the host's auth command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthRequest {
    #[serde(rename = "pass-through")]
    PassThrough,
    #[serde(rename = "request serial")]
    Serial,
    #[serde(rename = "request pairing")]
    Pairing,
    #[serde(rename = "request passkey")]
    Passkey,
    #[serde(rename = "EINVAL")]
    Invalid,
}

impl AuthRequest {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::PassThrough,
            1 => Self::Serial,
            2 => Self::Pairing,
            3 => Self::Passkey,
            _ => Self::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthResult {
    #[serde(rename = "response to serial req.")]
    SerialResponse,
    #[serde(rename = "accept")]
    Accept,
    #[serde(rename = "reject")]
    Reject,
    #[serde(rename = "EINVAL")]
    Invalid,
}

impl AuthResult {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::SerialResponse,
            1 => Self::Accept,
            2 => Self::Reject,
            _ => Self::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DownloadStatus {
    Ok,
    #[serde(rename = "ENOENT")]
    NoEntry,
    #[serde(rename = "EACCESS")]
    Access,
    #[serde(rename = "ENOTREADY")]
    NotReady,
    #[serde(rename = "EINVAL")]
    Invalid,
    #[serde(rename = "ECRC")]
    Crc,
}

impl DownloadStatus {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::NoEntry,
            2 => Self::Access,
            3 => Self::NotReady,
            5 => Self::Crc,
            _ => Self::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UploadStatus {
    Ok,
    #[serde(rename = "ENOENT")]
    NoEntry,
    #[serde(rename = "EACCESS")]
    Access,
    #[serde(rename = "ENOSPC")]
    NoSpace,
    #[serde(rename = "EINVAL")]
    Invalid,
    #[serde(rename = "ENOTREADY")]
    NotReady,
}

impl UploadStatus {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::NoEntry,
            2 => Self::Access,
            3 => Self::NoSpace,
            5 => Self::NotReady,
            _ => Self::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EraseStatus {
    Ok,
    Failed,
    #[serde(rename = "ENOTREADY")]
    NotReady,
    #[serde(rename = "EINVAL")]
    Invalid,
}

impl EraseStatus {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::Failed,
            2 => Self::NotReady,
            _ => Self::Invalid,
        }
    }
}
