pub mod reader;

pub use reader::{Truncated, read_slice, read_u8, read_u16_le, read_u32_le, to_hex};
