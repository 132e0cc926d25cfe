//! Hex text capture source.
//!
//! Each non-empty line holds one frame as whitespace-separated hex bytes, the
//! format produced by the sniffer's text log. Lines starting with `#` are
//! comments.

pub mod error;
pub mod parser;
pub mod reader;

pub use parser::HexLineSource;
