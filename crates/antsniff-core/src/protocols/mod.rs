//! Protocol decoding modules.
//!
//! Each protocol follows a layered structure:
//! - `layout`: byte offsets and constants (source of truth)
//! - `reader`: safe byte access and protocol conventions
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! `shockburst` splits a captured frame into address and channel payload;
//! `antfs` decodes that payload. Parsers are pure and contain no I/O.

pub mod antfs;
pub mod common;
pub mod shockburst;
