//! ANT-FS payload decoding.
//!
//! Payloads arrive with the ShockBurst address and channel header removed.
//! Beacons are decoded by `beacon`; commands and responses are dispatched on
//! their leading opcode by `parser` onto the decoders in `commands` and
//! `responses`. Code tables live in `codes`, byte offsets in `layout`, and all
//! reads go through `reader` so truncation errors name the missing field.
//!
//! Multi-packet bursts (downloads, uploads, erase) are not reassembled; the
//! first packet of a burst is decoded on its own.

pub mod beacon;
pub mod codes;
pub mod commands;
pub mod error;
pub mod layout;
pub mod opcode;
pub mod parser;
pub mod reader;
pub mod responses;

pub use beacon::{Beacon, BeaconState, parse_beacon};
pub use error::AntFsError;
pub use opcode::Opcode;
pub use parser::{Message, UnrecognizedMessage, parse_message};
pub use responses::{DownloadRequestResponse, parse_download_request_response};
