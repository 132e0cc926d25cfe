use std::collections::HashMap;

use crate::AddressSummary;
use crate::protocols::shockburst::Address;
use crate::record::{DecodedRecord, RecordKind};

#[derive(Debug, Default, Clone)]
pub(crate) struct AddressStats {
    pub frames: u64,
    pub beacons: u64,
    pub messages: u64,
    pub first_line: usize,
    pub last_line: usize,
}

pub(crate) fn add_address_stats(
    stats: &mut HashMap<Address, AddressStats>,
    line: usize,
    record: &DecodedRecord,
) {
    let entry = stats.entry(record.address).or_insert_with(|| AddressStats {
        first_line: line,
        ..AddressStats::default()
    });
    entry.frames += 1;
    entry.last_line = line;
    match record.kind() {
        RecordKind::Beacon => entry.beacons += 1,
        RecordKind::Message => entry.messages += 1,
        RecordKind::Unknown => {}
    }
}

pub(crate) fn build_address_summaries(
    stats: HashMap<Address, AddressStats>,
) -> Vec<AddressSummary> {
    let mut addresses: Vec<(Address, AddressStats)> = stats.into_iter().collect();
    addresses.sort_by(|a, b| a.0.cmp(&b.0));
    addresses
        .into_iter()
        .map(|(address, stats)| AddressSummary {
            address: address.to_string(),
            frames: stats.frames,
            beacons: stats.beacons,
            messages: stats.messages,
            first_line: stats.first_line,
            last_line: stats.last_line,
        })
        .collect()
}
