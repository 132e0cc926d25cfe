//! antsniff core library for offline ANT / ANT-FS frame decoding.
//!
//! Captured ShockBurst frames are split into a 40-bit link address and a
//! channel payload (`protocols::shockburst`), classified as client beacon,
//! command/response or unknown, and decoded into typed records
//! (`protocols::antfs`). [`decode`] is the pure per-frame entry point; the
//! `source` and `analysis` layers read hex text captures and build an ordered
//! report around it. All I/O stays in `source`.
//!
//! Invariants:
//! - Decoding depends on frame bytes only; no state is carried between frames.
//! - Exactly one classification applies per frame, and a record serializes
//!   exactly one `type` tag.
//! - Report entries keep input order; unknown channel types and opcodes are
//!   records, never errors.
//!
//! # Examples
//! ```
//! use antsniff_core::decode;
//!
//! let frame = [0x01, 0x02, 0x03, 0x04, 0x05, 0xaa, 0xbb, 0x44, 0x05];
//! let record = decode(&frame)?;
//! let json = serde_json::to_value(&record)?;
//! assert_eq!(json["type"], "ping command");
//! assert_eq!(json["address"], "0x0102030405");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::Serialize;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

mod analysis;
mod decode;
pub mod protocols;
mod record;
mod source;

pub use analysis::{AnalysisError, analyze_hex_file, analyze_source};
pub use decode::{DecodeError, decode};
pub use protocols::common::{read_u16_le, read_u32_le};
pub use protocols::shockburst::Address;
pub use record::{DecodedRecord, Payload, RecordKind, UnknownChannel};
pub use source::{FrameEvent, FrameSource, HexLineSource, SourceError};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when the caller does not stamp the report.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Decoded capture: one entry per input frame, in input order.
///
/// # Examples
/// ```
/// use antsniff_core::make_stub_report;
///
/// let report = make_stub_report("capture.txt", 123);
/// assert_eq!(report.report_version, antsniff_core::REPORT_VERSION);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,
    /// Input capture metadata.
    pub input: InputInfo,
    /// Frame counts by outcome and classification.
    pub summary: DecodeSummary,
    /// Per-address activity in ascending address order.
    pub addresses: Vec<AddressSummary>,
    /// Decoded frames in input order.
    pub frames: Vec<FrameEntry>,
}

impl Report {
    /// Set `generated_at` to `at` in RFC 3339 form.
    ///
    /// Analysis leaves [`DEFAULT_GENERATED_AT`] in place so its output is
    /// reproducible; callers stamp the report when they publish it.
    pub fn stamp(&mut self, at: OffsetDateTime) {
        self.generated_at = at
            .format(&Rfc3339)
            .unwrap_or_else(|_| DEFAULT_GENERATED_AT.to_string());
    }
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "antsniff").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input capture metadata embedded in reports.
#[derive(Debug, Clone, Serialize)]
pub struct InputInfo {
    /// Input path as provided to the analyzer (`-` for stdin).
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Frame counts for a capture.
///
/// `messages` includes unrecognized opcodes; `unrecognized_opcodes` counts
/// them separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecodeSummary {
    pub frames_total: u64,
    pub decoded: u64,
    pub failed: u64,
    pub beacons: u64,
    pub messages: u64,
    pub unrecognized_opcodes: u64,
    pub unknown_channels: u64,
}

/// Activity seen for one link address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressSummary {
    /// Address in fixed-width hex form.
    pub address: String,
    /// Decoded frames from this address.
    pub frames: u64,
    pub beacons: u64,
    pub messages: u64,
    /// Input line of the first and last decoded frame.
    pub first_line: usize,
    pub last_line: usize,
}

/// One input frame and what became of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameEntry {
    /// 1-based input line.
    pub line: usize,
    #[serde(flatten)]
    pub outcome: FrameOutcome,
}

/// Serialized as either `"record": {...}` or `"error": "..."`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameOutcome {
    Record(DecodedRecord),
    Error(String),
}

/// Build a stub report with base fields filled and empty aggregates.
///
/// # Examples
/// ```
/// use antsniff_core::make_stub_report;
///
/// let report = make_stub_report("capture.txt", 123);
/// assert!(report.frames.is_empty());
/// assert_eq!(report.summary.frames_total, 0);
/// ```
pub fn make_stub_report(input_path: &str, input_bytes: u64) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "antsniff".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        summary: DecodeSummary::default(),
        addresses: vec![],
        frames: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn frame_entries_serialize_record_or_error() {
        let mut report = make_stub_report("capture.txt", 1);
        report.frames.push(FrameEntry {
            line: 1,
            outcome: FrameOutcome::Record(
                decode(&[1, 2, 3, 4, 5, 0xaa, 0xbb, 0x44, 0x05]).expect("ping frame"),
            ),
        });
        report.frames.push(FrameEntry {
            line: 2,
            outcome: FrameOutcome::Error("truncated frame: need 8 bytes, got 3".to_string()),
        });

        let value = serde_json::to_value(&report).expect("report json");
        assert_eq!(
            value["frames"][0],
            json!({ "line": 1, "record": { "address": "0x0102030405", "type": "ping command" } })
        );
        assert_eq!(
            value["frames"][1],
            json!({ "line": 2, "error": "truncated frame: need 8 bytes, got 3" })
        );
        assert!(value["frames"][1].get("record").is_none());
    }

    #[test]
    fn stub_report_has_tool_metadata() {
        let report = make_stub_report("capture.txt", 7);
        let value = serde_json::to_value(&report).expect("report json");
        assert_eq!(value["tool"]["name"], json!("antsniff"));
        assert_eq!(value["generated_at"], json!(DEFAULT_GENERATED_AT));
        assert_eq!(value["input"]["bytes"], json!(7));
        assert_eq!(value["summary"]["failed"], json!(0));
    }

    #[test]
    fn stamp_formats_rfc3339() {
        let mut report = make_stub_report("capture.txt", 0);
        let at = OffsetDateTime::from_unix_timestamp(1_700_000_000).expect("valid timestamp");
        report.stamp(at);
        assert_eq!(report.generated_at, "2023-11-14T22:13:20Z");
    }
}
