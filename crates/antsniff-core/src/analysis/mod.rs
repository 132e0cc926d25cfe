use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::decode::decode;
use crate::protocols::antfs::Message;
use crate::record::Payload;
use crate::source::{FrameEvent, FrameSource, HexLineSource, SourceError};
use crate::{FrameEntry, FrameOutcome, Report, make_stub_report};

mod addresses;
mod summary;

use addresses::{AddressStats, add_address_stats, build_address_summaries};
use summary::SummaryStats;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Decode every frame of a hex text capture file.
pub fn analyze_hex_file(path: &Path) -> Result<Report, AnalysisError> {
    let source = HexLineSource::open(path)?;
    let bytes = path.metadata()?.len();
    analyze_source(&path.display().to_string(), bytes, source)
}

/// Decode every frame a source yields, in order, into a report.
///
/// A frame that fails to tokenize or decode becomes an error entry and the
/// run continues; only I/O failures abort.
pub fn analyze_source<S: FrameSource>(
    input_path: &str,
    input_bytes: u64,
    mut source: S,
) -> Result<Report, AnalysisError> {
    let mut report = make_stub_report(input_path, input_bytes);
    let mut stats = SummaryStats::default();
    let mut address_stats: HashMap<_, AddressStats> = HashMap::new();

    loop {
        let entry = match source.next_frame() {
            Ok(Some(FrameEvent { line, bytes })) => decode_entry(line, &bytes),
            Ok(None) => break,
            Err(SourceError::InvalidToken { line, token }) => {
                warn!(line, token = %token, "skipping line with invalid hex byte");
                FrameEntry {
                    line,
                    outcome: FrameOutcome::Error(format!("invalid hex byte '{token}'")),
                }
            }
            Err(err) => return Err(err.into()),
        };
        if let FrameOutcome::Record(record) = &entry.outcome {
            add_address_stats(&mut address_stats, entry.line, record);
        }
        stats.add(&entry);
        report.frames.push(entry);
    }

    report.summary = stats.build();
    report.addresses = build_address_summaries(address_stats);
    info!(
        frames = report.summary.frames_total,
        decoded = report.summary.decoded,
        failed = report.summary.failed,
        "capture decoded"
    );
    Ok(report)
}

fn decode_entry(line: usize, bytes: &[u8]) -> FrameEntry {
    let outcome = match decode(bytes) {
        Ok(record) => {
            match &record.payload {
                Payload::Beacon(beacon) => {
                    trace!(
                        line,
                        address = %record.address,
                        state = ?beacon.state.link_state(),
                        host_serial = ?beacon.state.host_serial(),
                        "client beacon"
                    );
                }
                Payload::Unknown(_) => {
                    debug!(line, address = %record.address, "unknown channel type");
                }
                Payload::Message(Message::Unrecognized(msg)) => {
                    debug!(line, opcode = msg.opcode, "unrecognized opcode");
                }
                Payload::Message(_) => {}
            }
            FrameOutcome::Record(record)
        }
        Err(err) => {
            warn!(line, len = bytes.len(), error = %err, "frame not decoded");
            FrameOutcome::Error(err.to_string())
        }
    };
    FrameEntry { line, outcome }
}

#[cfg(test)]
mod tests {
    use super::analyze_source;
    use crate::FrameOutcome;
    use crate::source::HexLineSource;
    use std::io::Cursor;

    #[test]
    fn keeps_input_order_and_continues_after_failures() {
        let text = "\
01 02 03 04 05 aa bb 43 30 03 00
01 02 03 04
01 02 03 04 05 aa bb 44 zz
01 02 03 04 05 aa bb 44 ff 01
01 02 03 04 05 aa bb 50 01
";
        let source = HexLineSource::new(Cursor::new(text));
        let report = analyze_source("capture.txt", text.len() as u64, source).unwrap();

        let lines: Vec<usize> = report.frames.iter().map(|f| f.line).collect();
        assert_eq!(lines, vec![1, 2, 3, 4, 5]);
        assert!(matches!(report.frames[0].outcome, FrameOutcome::Record(_)));
        assert!(matches!(report.frames[1].outcome, FrameOutcome::Error(_)));
        assert!(matches!(
            &report.frames[2].outcome,
            FrameOutcome::Error(msg) if msg.contains("zz")
        ));

        let summary = &report.summary;
        assert_eq!(summary.frames_total, 5);
        assert_eq!(summary.decoded, 3);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.beacons, 1);
        assert_eq!(summary.messages, 1);
        assert_eq!(summary.unrecognized_opcodes, 1);
        assert_eq!(summary.unknown_channels, 1);

        assert_eq!(report.addresses.len(), 1);
        assert_eq!(report.addresses[0].frames, 3);
        assert_eq!(report.input.bytes, text.len() as u64);
    }

    #[test]
    fn non_utf8_line_fails_only_that_frame() {
        let text: &[u8] = b"01 02 03 04 05 aa bb 44 05\n01 \xff\n01 02 03 04 05 aa bb 44 05\n";
        let source = HexLineSource::new(Cursor::new(text));
        let report = analyze_source("-", text.len() as u64, source).unwrap();

        let lines: Vec<usize> = report.frames.iter().map(|f| f.line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
        assert!(matches!(report.frames[0].outcome, FrameOutcome::Record(_)));
        assert!(matches!(
            &report.frames[1].outcome,
            FrameOutcome::Error(msg) if msg.starts_with("invalid hex byte")
        ));
        assert!(matches!(report.frames[2].outcome, FrameOutcome::Record(_)));
        assert_eq!(report.summary.failed, 1);
        assert_eq!(report.summary.decoded, 2);
    }

    #[test]
    fn empty_input_gives_empty_report() {
        let report = analyze_source("-", 0, HexLineSource::new(Cursor::new(""))).unwrap();
        assert!(report.frames.is_empty());
        assert_eq!(report.summary.frames_total, 0);
        assert!(report.addresses.is_empty());
    }
}
