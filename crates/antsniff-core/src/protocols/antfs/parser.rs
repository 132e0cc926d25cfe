use serde::Serialize;

use super::commands::{
    AuthCommand, DisconnectCommand, DownloadRequestCommand, EraseRequestCommand, LinkCommand,
    UploadDataCommand, UploadRequestCommand, parse_auth_command, parse_disconnect_command,
    parse_download_request_command, parse_erase_request_command, parse_link_command,
    parse_upload_data_command, parse_upload_request_command,
};
use super::error::AntFsError;
use super::layout;
use super::opcode::Opcode;
use super::reader::AntFsReader;
use super::responses::{
    AuthResponse, EraseResponse, UploadDataResponse, UploadRequestResponse, parse_auth_response,
    parse_erase_response, parse_upload_data_response, parse_upload_request_response,
};

/// Decoded ANT-FS command or response, tagged by `type` when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Message {
    #[serde(rename = "link command")]
    Link(LinkCommand),
    #[serde(rename = "disconnect command")]
    Disconnect(DisconnectCommand),
    #[serde(rename = "auth command")]
    Auth(AuthCommand),
    #[serde(rename = "ping command")]
    Ping,
    #[serde(rename = "download request command")]
    DownloadRequest(DownloadRequestCommand),
    #[serde(rename = "upload request command")]
    UploadRequest(UploadRequestCommand),
    #[serde(rename = "erase request command")]
    EraseRequest(EraseRequestCommand),
    #[serde(rename = "upload data command")]
    UploadData(UploadDataCommand),
    #[serde(rename = "auth response")]
    AuthResponse(AuthResponse),
    #[serde(rename = "upload request response")]
    UploadRequestResponse(UploadRequestResponse),
    #[serde(rename = "erase response")]
    EraseResponse(EraseResponse),
    #[serde(rename = "upload data response")]
    UploadDataResponse(UploadDataResponse),
    #[serde(rename = "unknown command/response")]
    Unrecognized(UnrecognizedMessage),
}

/// Command/response with an opcode outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnrecognizedMessage {
    #[serde(skip)]
    pub opcode: u8,
    /// Whole payload, opcode included, as lowercase hex.
    pub data: String,
}

impl Message {
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized(_))
    }
}

/// Decode a command/response payload (channel header already stripped).
///
/// The opcode selects the decoder. Opcode 0x89 is the download request
/// response but decodes with the download request command layout and
/// yields [`Message::DownloadRequest`]; see
/// [`parse_download_request_response`](super::parse_download_request_response)
/// for the status/remaining view of the same bytes.
///
/// # Examples
/// ```
/// use antsniff_core::protocols::antfs::{Message, parse_message};
///
/// assert_eq!(parse_message(&[0x05]).unwrap(), Message::Ping);
/// assert!(parse_message(&[0xff, 0x01]).unwrap().is_unrecognized());
/// ```
///
/// # Errors
/// Returns [`AntFsError::TruncatedField`] when the payload is empty or shorter
/// than the fields of its opcode. Unknown opcodes never fail.
pub fn parse_message(payload: &[u8]) -> Result<Message, AntFsError> {
    let reader = AntFsReader::new(payload);
    let opcode = Opcode::from(reader.read_u8("opcode", layout::OPCODE_OFFSET)?);

    let message = match opcode {
        Opcode::Link => Message::Link(parse_link_command(payload)?),
        Opcode::Disconnect => Message::Disconnect(parse_disconnect_command(payload)?),
        Opcode::Authenticate => Message::Auth(parse_auth_command(payload)?),
        Opcode::Ping => Message::Ping,
        Opcode::DownloadRequest => {
            Message::DownloadRequest(parse_download_request_command(payload)?)
        }
        Opcode::UploadRequest => Message::UploadRequest(parse_upload_request_command(payload)?),
        Opcode::EraseRequest => Message::EraseRequest(parse_erase_request_command(payload)?),
        Opcode::UploadData => Message::UploadData(parse_upload_data_command(payload)?),
        Opcode::AuthResponse => Message::AuthResponse(parse_auth_response(payload)?),
        // Aliased onto the command layout; kept for compatibility with existing captures.
        Opcode::DownloadResponse => {
            Message::DownloadRequest(parse_download_request_command(payload)?)
        }
        Opcode::UploadResponse => {
            Message::UploadRequestResponse(parse_upload_request_response(payload)?)
        }
        Opcode::EraseResponse => Message::EraseResponse(parse_erase_response(payload)?),
        Opcode::UploadDataResponse => {
            Message::UploadDataResponse(parse_upload_data_response(payload)?)
        }
        Opcode::Unrecognized(_) => Message::Unrecognized(UnrecognizedMessage {
            opcode: opcode.code(),
            data: reader.read_hex(),
        }),
    };
    Ok(message)
}
