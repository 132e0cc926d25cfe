use crate::record::{Payload, RecordKind};
use crate::{DecodeSummary, FrameEntry, FrameOutcome};

#[derive(Debug, Default)]
pub(crate) struct SummaryStats {
    frames: u64,
    failed: u64,
    beacons: u64,
    messages: u64,
    unrecognized_opcodes: u64,
    unknown_channels: u64,
}

impl SummaryStats {
    pub(crate) fn add(&mut self, entry: &FrameEntry) {
        self.frames += 1;
        let record = match &entry.outcome {
            FrameOutcome::Record(record) => record,
            FrameOutcome::Error(_) => {
                self.failed += 1;
                return;
            }
        };
        match record.kind() {
            RecordKind::Beacon => self.beacons += 1,
            RecordKind::Message => self.messages += 1,
            RecordKind::Unknown => self.unknown_channels += 1,
        }
        if matches!(&record.payload, Payload::Message(message) if message.is_unrecognized()) {
            self.unrecognized_opcodes += 1;
        }
    }

    pub(crate) fn build(self) -> DecodeSummary {
        DecodeSummary {
            frames_total: self.frames,
            decoded: self.frames - self.failed,
            failed: self.failed,
            beacons: self.beacons,
            messages: self.messages,
            unrecognized_opcodes: self.unrecognized_opcodes,
            unknown_channels: self.unknown_channels,
        }
    }
}
