//! Client-to-host responses.

use serde::Serialize;

use super::codes::{AuthResult, DownloadStatus, EraseStatus, UploadStatus};
use super::error::AntFsError;
use super::layout;
use super::reader::AntFsReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuthResponse {
    pub response: AuthResult,
    pub auth_string_length: u8,
    pub client_serial: u32,
}

/// Response-shaped decoding of opcode 0x89.
///
/// Not dispatched: `parse_message` decodes 0x89 with the download request
/// command layout. Call this directly to read the status/remaining view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "download request response")]
pub struct DownloadRequestResponse {
    pub response: DownloadStatus,
    pub remaining: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UploadRequestResponse {
    pub response: UploadStatus,
    pub last_offset: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EraseResponse {
    pub response: EraseStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UploadDataResponse {
    pub response: bool,
}

pub fn parse_auth_response(payload: &[u8]) -> Result<AuthResponse, AntFsError> {
    let reader = AntFsReader::new(payload);
    Ok(AuthResponse {
        response: AuthResult::from_code(reader.read_u8("response", layout::ARG_OFFSET)?),
        auth_string_length: reader.read_u8("auth_string_length", layout::ARG2_OFFSET)?,
        client_serial: reader.read_u32_le("client_serial", layout::DWORD_OFFSET)?,
    })
}

pub fn parse_download_request_response(
    payload: &[u8],
) -> Result<DownloadRequestResponse, AntFsError> {
    let reader = AntFsReader::new(payload);
    Ok(DownloadRequestResponse {
        response: DownloadStatus::from_code(reader.read_u8("response", layout::ARG_OFFSET)?),
        remaining: reader.read_u32_le("remaining", layout::DWORD_OFFSET)?,
    })
}

pub fn parse_upload_request_response(
    payload: &[u8],
) -> Result<UploadRequestResponse, AntFsError> {
    let reader = AntFsReader::new(payload);
    Ok(UploadRequestResponse {
        response: UploadStatus::from_code(reader.read_u8("response", layout::ARG_OFFSET)?),
        last_offset: reader.read_u32_le("last_offset", layout::DWORD_OFFSET)?,
    })
}

pub fn parse_erase_response(payload: &[u8]) -> Result<EraseResponse, AntFsError> {
    let reader = AntFsReader::new(payload);
    Ok(EraseResponse {
        response: EraseStatus::from_code(reader.read_u8("response", layout::ARG_OFFSET)?),
    })
}

/// The response is `true` whenever the response byte is present.
pub fn parse_upload_data_response(payload: &[u8]) -> Result<UploadDataResponse, AntFsError> {
    let reader = AntFsReader::new(payload);
    reader.read_u8("response", layout::ARG_OFFSET)?;
    Ok(UploadDataResponse { response: true })
}
