//! Instance conflict tracking for the PGNs that carry a device instance
//! byte. Two devices claiming the same (PGN, instance) pair make the data
//! ambiguous for consumers; the detector records every observed claim and
//! recomputes the conflict set on demand.
//!
//! Storage is fixed-capacity and caller-serialized: one writer feeds
//! `observe`, queries read the result of the last recomputation.
use crate::protocol::transport::message::Message;

/// Upper bound of tracked (PGN, source) claims.
pub const MAX_INSTANCE_RECORDS: usize = 64;
/// Upper bound of simultaneous conflicts.
pub const MAX_CONFLICTS: usize = 16;
/// Upper bound of sources participating in one conflict.
pub const MAX_CONFLICT_SOURCES: usize = 16;

/// Instance byte reserved as "invalid / not set".
const INVALID_INSTANCE: u8 = 255;

/// PGNs whose payload carries a device instance.
const INSTANCE_PGNS: [u32; 10] = [
    127488, // Engine Parameters, Rapid
    127489, // Engine Parameters, Dynamic
    127502, // Binary Switch Bank Control
    127505, // Fluid Level
    127508, // Battery Status
    127509, // Inverter Status
    127513, // Battery Configuration Status
    130312, // Temperature
    130314, // Actual Pressure
    130316, // Temperature, Extended Range
];

/// Checks whether a PGN belongs to the tracked set.
pub fn is_instance_pgn(pgn: u32) -> bool {
    INSTANCE_PGNS.contains(&pgn)
}

/// Reads the instance byte of a tracked message.
/// The offset depends on the PGN: most put it first, the switch bank
/// control and the temperature/pressure family put it after a leading byte.
pub fn extract_instance(msg: &Message) -> Option<u8> {
    let data = msg.data();
    let offset = match msg.pgn {
        127502 | 130312 | 130314 | 130316 => 1,
        pgn if is_instance_pgn(pgn) => 0,
        _ => return None,
    };
    data.get(offset).copied()
}

//==================================================================================RECORDS
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// One observed claim: a source address announcing an instance on a PGN.
pub struct InstanceRecord {
    pub pgn: u32,
    pub source: u8,
    pub instance: u8,
    /// Monotonic observation counter value at the last sighting.
    pub last_seen: u32,
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// One detected conflict: several sources sharing a (PGN, instance) pair.
pub struct InstanceConflict {
    pub pgn: u32,
    pub instance: u8,
    sources: [u8; MAX_CONFLICT_SOURCES],
    source_count: usize,
}

impl InstanceConflict {
    fn new(pgn: u32, instance: u8) -> Self {
        Self {
            pgn,
            instance,
            sources: [0; MAX_CONFLICT_SOURCES],
            source_count: 0,
        }
    }

    fn add_source(&mut self, source: u8) {
        if !self.sources().contains(&source) && self.source_count < MAX_CONFLICT_SOURCES {
            self.sources[self.source_count] = source;
            self.source_count += 1;
        }
    }

    /// Source addresses involved, in first-seen order.
    pub fn sources(&self) -> &[u8] {
        &self.sources[..self.source_count]
    }

    pub fn involves(&self, source: u8) -> bool {
        self.sources().contains(&source)
    }
}

//==================================================================================DETECTOR
/// Fixed-capacity conflict detector. Claims are keyed by (PGN, source)
/// and never evicted; `clear` resets the whole history.
pub struct ConflictDetector {
    records: [InstanceRecord; MAX_INSTANCE_RECORDS],
    record_count: usize,
    conflicts: [InstanceConflict; MAX_CONFLICTS],
    conflict_count: usize,
    observations: u32,
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ConflictDetector {
    pub const fn new() -> Self {
        Self {
            records: [InstanceRecord {
                pgn: 0,
                source: 0,
                instance: INVALID_INSTANCE,
                last_seen: 0,
            }; MAX_INSTANCE_RECORDS],
            record_count: 0,
            conflicts: [InstanceConflict {
                pgn: 0,
                instance: INVALID_INSTANCE,
                sources: [0; MAX_CONFLICT_SOURCES],
                source_count: 0,
            }; MAX_CONFLICTS],
            conflict_count: 0,
            observations: 0,
        }
    }

    /// Records the instance claim carried by a message, when any.
    /// Untracked PGNs, missing payload bytes, and the invalid instance
    /// marker are skipped. A claim from a known (PGN, source) pair is
    /// updated in place; the pool ignores new claims once full.
    pub fn observe(&mut self, msg: &Message) {
        let Some(instance) = extract_instance(msg) else {
            return;
        };
        if instance == INVALID_INSTANCE {
            return;
        }
        self.observations = self.observations.wrapping_add(1);

        for record in &mut self.records[..self.record_count] {
            if record.pgn == msg.pgn && record.source == msg.source {
                record.instance = instance;
                record.last_seen = self.observations;
                return;
            }
        }

        if self.record_count < MAX_INSTANCE_RECORDS {
            self.records[self.record_count] = InstanceRecord {
                pgn: msg.pgn,
                source: msg.source,
                instance,
                last_seen: self.observations,
            };
            self.record_count += 1;
        }
    }

    /// Rebuilds the conflict set from scratch out of the current records.
    /// Idempotent: recomputing without new observations yields the same set.
    pub fn recompute_conflicts(&mut self) {
        self.conflict_count = 0;

        for i in 0..self.record_count {
            let record = self.records[i];

            if self.find_conflict(record.pgn, record.instance).is_some() {
                continue; // Group already built
            }

            let mut group = InstanceConflict::new(record.pgn, record.instance);
            for other in &self.records[..self.record_count] {
                if other.pgn == record.pgn && other.instance == record.instance {
                    group.add_source(other.source);
                }
            }

            if group.source_count > 1 && self.conflict_count < MAX_CONFLICTS {
                self.conflicts[self.conflict_count] = group;
                self.conflict_count += 1;
            }
        }
    }

    fn find_conflict(&self, pgn: u32, instance: u8) -> Option<&InstanceConflict> {
        self.conflicts[..self.conflict_count]
            .iter()
            .find(|c| c.pgn == pgn && c.instance == instance)
    }

    /// Conflicts found by the last recomputation.
    pub fn conflicts(&self) -> &[InstanceConflict] {
        &self.conflicts[..self.conflict_count]
    }

    pub fn conflict_count(&self) -> usize {
        self.conflict_count
    }

    pub fn has_conflicts(&self) -> bool {
        self.conflict_count > 0
    }

    /// Checks whether a source participates in any detected conflict.
    pub fn has_conflict(&self, source: u8) -> bool {
        self.conflicts().iter().any(|c| c.involves(source))
    }

    /// Conflicts touching one PGN.
    pub fn conflicts_for_pgn(&self, pgn: u32) -> impl Iterator<Item = &InstanceConflict> {
        self.conflicts().iter().filter(move |c| c.pgn == pgn)
    }

    /// Number of claims currently tracked.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Drops every record and conflict.
    pub fn clear(&mut self) {
        self.record_count = 0;
        self.conflict_count = 0;
        self.observations = 0;
    }
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
