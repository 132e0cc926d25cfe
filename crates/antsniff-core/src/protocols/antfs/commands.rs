//! Host-to-client commands.
//!
//! Download, upload and upload-data commands open multi-packet bursts; only
//! the first packet is decoded here and the fields below are the ones that
//! packet carries.

use serde::Serialize;

use super::codes::{AuthRequest, ChannelPeriod, DisconnectType};
use super::error::AntFsError;
use super::layout;
use super::reader::AntFsReader;

/// Moves the client onto a new RF channel and period for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkCommand {
    pub frequency: u8,
    pub frequency_mhz: u16,
    pub period: ChannelPeriod,
    pub host_serial: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisconnectCommand {
    pub disconnect_type: DisconnectType,
    pub time_duration: u8,
    pub application_duration: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuthCommand {
    pub auth_type: AuthRequest,
    pub auth_string_length: u8,
    pub host_serial: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DownloadRequestCommand {
    pub index: u16,
    pub offset: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UploadRequestCommand {
    pub index: u16,
    pub max_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EraseRequestCommand {
    pub index: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UploadDataCommand {
    pub crc_seed: u16,
    pub offset: u32,
}

pub fn parse_link_command(payload: &[u8]) -> Result<LinkCommand, AntFsError> {
    let reader = AntFsReader::new(payload);
    let frequency = reader.read_u8("frequency", layout::ARG_OFFSET)?;
    Ok(LinkCommand {
        frequency,
        frequency_mhz: layout::RF_BASE_MHZ + u16::from(frequency),
        period: ChannelPeriod::from_code(reader.read_u8("period", layout::ARG2_OFFSET)?),
        host_serial: reader.read_u32_le("host_serial", layout::DWORD_OFFSET)?,
    })
}

pub fn parse_disconnect_command(payload: &[u8]) -> Result<DisconnectCommand, AntFsError> {
    let reader = AntFsReader::new(payload);
    Ok(DisconnectCommand {
        disconnect_type: DisconnectType::from_code(
            reader.read_u8("disconnect_type", layout::ARG_OFFSET)?,
        ),
        time_duration: reader.read_u8("time_duration", layout::ARG2_OFFSET)?,
        application_duration: reader.read_u8("application_duration", layout::ARG3_OFFSET)?,
    })
}

pub fn parse_auth_command(payload: &[u8]) -> Result<AuthCommand, AntFsError> {
    let reader = AntFsReader::new(payload);
    Ok(AuthCommand {
        auth_type: AuthRequest::from_code(reader.read_u8("auth_type", layout::ARG_OFFSET)?),
        auth_string_length: reader.read_u8("auth_string_length", layout::ARG2_OFFSET)?,
        host_serial: reader.read_u32_le("host_serial", layout::DWORD_OFFSET)?,
    })
}

pub fn parse_download_request_command(
    payload: &[u8],
) -> Result<DownloadRequestCommand, AntFsError> {
    let reader = AntFsReader::new(payload);
    Ok(DownloadRequestCommand {
        index: reader.read_u16_le("index", layout::WORD_OFFSET)?,
        offset: reader.read_u32_le("offset", layout::DWORD_OFFSET)?,
    })
}

pub fn parse_upload_request_command(payload: &[u8]) -> Result<UploadRequestCommand, AntFsError> {
    let reader = AntFsReader::new(payload);
    Ok(UploadRequestCommand {
        index: reader.read_u16_le("index", layout::WORD_OFFSET)?,
        max_size: reader.read_u32_le("max_size", layout::DWORD_OFFSET)?,
    })
}

pub fn parse_erase_request_command(payload: &[u8]) -> Result<EraseRequestCommand, AntFsError> {
    let reader = AntFsReader::new(payload);
    Ok(EraseRequestCommand {
        index: reader.read_u16_le("index", layout::WORD_OFFSET)?,
    })
}

pub fn parse_upload_data_command(payload: &[u8]) -> Result<UploadDataCommand, AntFsError> {
    let reader = AntFsReader::new(payload);
    Ok(UploadDataCommand {
        crc_seed: reader.read_u16_le("crc_seed", layout::WORD_OFFSET)?,
        offset: reader.read_u32_le("offset", layout::DWORD_OFFSET)?,
    })
}
