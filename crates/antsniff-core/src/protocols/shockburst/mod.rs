//! ShockBurst link layer as seen by the ANT radio.
//!
//! A captured frame starts with a 5-byte link address (first byte most
//! significant), followed by a 3-byte channel header whose last byte tells a
//! beacon apart from a command/response. Everything after the header is the
//! ANT-FS payload and is handed to `protocols::antfs` untouched.
//!
//! The preamble and trailing CRC are not part of a captured frame here; no
//! checksum is validated.

pub mod address;
pub mod error;
pub mod layout;
pub mod parser;

pub use address::{Address, extract_address};
pub use error::FrameError;
pub use parser::{Channel, ShockBurstFrame, classify_channel, parse_frame};
