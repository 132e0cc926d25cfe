pub const ADDRESS_LEN: usize = 5;

pub const CHANNEL_HEADER_LEN: usize = 3;
pub const CHANNEL_TYPE_OFFSET: usize = 2;

pub const CHANNEL_TYPE_BEACON: u8 = 0x43;
pub const CHANNEL_TYPE_COMMAND: u8 = 0x44;

pub const MIN_FRAME_LEN: usize = ADDRESS_LEN + CHANNEL_HEADER_LEN;
