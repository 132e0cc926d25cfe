// Client beacon.
pub const BEACON_STATUS_OFFSET: usize = 0;
pub const BEACON_STATE_OFFSET: usize = 1;
pub const BEACON_AUTH_TYPE_OFFSET: usize = 2;
pub const BEACON_DEVICE_TYPE_OFFSET: usize = 3;
pub const BEACON_MANUFACTURER_OFFSET: usize = 5;
pub const BEACON_HOST_SERIAL_OFFSET: usize = 3;

pub const STATUS_DATA_AVAILABLE: u8 = 1 << 5;
pub const STATUS_UPLOAD_ENABLED: u8 = 1 << 4;
pub const STATUS_PAIRING_ENABLED: u8 = 1 << 3;
pub const STATUS_PERIOD_MASK: u8 = 0x07;
pub const STATE_LINK_STATE_MASK: u8 = 0x0f;

// Commands and responses. Every message starts with its opcode; the 16-bit
// field, when present, sits at 1 and the 32-bit field at 3.
pub const OPCODE_OFFSET: usize = 0;
pub const ARG_OFFSET: usize = 1;
pub const ARG2_OFFSET: usize = 2;
pub const ARG3_OFFSET: usize = 3;
pub const WORD_OFFSET: usize = 1;
pub const DWORD_OFFSET: usize = 3;

pub const OPCODE_LINK: u8 = 0x02;
pub const OPCODE_DISCONNECT: u8 = 0x03;
pub const OPCODE_AUTHENTICATE: u8 = 0x04;
pub const OPCODE_PING: u8 = 0x05;
pub const OPCODE_DOWNLOAD_REQUEST: u8 = 0x09;
pub const OPCODE_UPLOAD_REQUEST: u8 = 0x0a;
pub const OPCODE_ERASE_REQUEST: u8 = 0x0b;
pub const OPCODE_UPLOAD_DATA: u8 = 0x0c;

pub const OPCODE_AUTH_RESPONSE: u8 = 0x84;
pub const OPCODE_DOWNLOAD_RESPONSE: u8 = 0x89;
pub const OPCODE_UPLOAD_RESPONSE: u8 = 0x8a;
pub const OPCODE_ERASE_RESPONSE: u8 = 0x8b;
pub const OPCODE_UPLOAD_DATA_RESPONSE: u8 = 0x8c;

/// RF channels are offsets in MHz above this base.
pub const RF_BASE_MHZ: u16 = 2400;
