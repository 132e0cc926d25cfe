use super::layout;

/// Leading byte of an ANT-FS command or response.
///
/// Commands are sent by the host and have the high bit clear; responses come
/// from the client with the high bit set. Any other byte is kept as
/// `Unrecognized` rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Link,
    Disconnect,
    Authenticate,
    Ping,
    DownloadRequest,
    UploadRequest,
    EraseRequest,
    UploadData,
    AuthResponse,
    DownloadResponse,
    UploadResponse,
    EraseResponse,
    UploadDataResponse,
    Unrecognized(u8),
}

impl Opcode {
    pub fn code(self) -> u8 {
        match self {
            Self::Link => layout::OPCODE_LINK,
            Self::Disconnect => layout::OPCODE_DISCONNECT,
            Self::Authenticate => layout::OPCODE_AUTHENTICATE,
            Self::Ping => layout::OPCODE_PING,
            Self::DownloadRequest => layout::OPCODE_DOWNLOAD_REQUEST,
            Self::UploadRequest => layout::OPCODE_UPLOAD_REQUEST,
            Self::EraseRequest => layout::OPCODE_ERASE_REQUEST,
            Self::UploadData => layout::OPCODE_UPLOAD_DATA,
            Self::AuthResponse => layout::OPCODE_AUTH_RESPONSE,
            Self::DownloadResponse => layout::OPCODE_DOWNLOAD_RESPONSE,
            Self::UploadResponse => layout::OPCODE_UPLOAD_RESPONSE,
            Self::EraseResponse => layout::OPCODE_ERASE_RESPONSE,
            Self::UploadDataResponse => layout::OPCODE_UPLOAD_DATA_RESPONSE,
            Self::Unrecognized(code) => code,
        }
    }
}

impl From<u8> for Opcode {
    fn from(code: u8) -> Self {
        match code {
            layout::OPCODE_LINK => Self::Link,
            layout::OPCODE_DISCONNECT => Self::Disconnect,
            layout::OPCODE_AUTHENTICATE => Self::Authenticate,
            layout::OPCODE_PING => Self::Ping,
            layout::OPCODE_DOWNLOAD_REQUEST => Self::DownloadRequest,
            layout::OPCODE_UPLOAD_REQUEST => Self::UploadRequest,
            layout::OPCODE_ERASE_REQUEST => Self::EraseRequest,
            layout::OPCODE_UPLOAD_DATA => Self::UploadData,
            layout::OPCODE_AUTH_RESPONSE => Self::AuthResponse,
            layout::OPCODE_DOWNLOAD_RESPONSE => Self::DownloadResponse,
            layout::OPCODE_UPLOAD_RESPONSE => Self::UploadResponse,
            layout::OPCODE_ERASE_RESPONSE => Self::EraseResponse,
            layout::OPCODE_UPLOAD_DATA_RESPONSE => Self::UploadDataResponse,
            other => Self::Unrecognized(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Opcode;

    #[test]
    fn every_byte_round_trips_through_code() {
        for byte in 0..=u8::MAX {
            assert_eq!(Opcode::from(byte).code(), byte);
        }
    }

    #[test]
    fn known_opcodes_are_not_unrecognized() {
        let known = [
            0x02, 0x03, 0x04, 0x05, 0x09, 0x0a, 0x0b, 0x0c, 0x84, 0x89, 0x8a, 0x8b, 0x8c,
        ];
        for byte in known {
            assert!(!matches!(Opcode::from(byte), Opcode::Unrecognized(_)));
        }
        assert_eq!(Opcode::from(0xff), Opcode::Unrecognized(0xff));
        assert_eq!(Opcode::from(0x01), Opcode::Unrecognized(0x01));
    }
}
