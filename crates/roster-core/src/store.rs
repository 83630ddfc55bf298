//! Authoritative in-memory record collection.

use std::collections::HashSet;

use roster_model::{FieldUpdate, NewRecord, Record, RecordId};
use tracing::{debug, info, warn};

/// Owns every record; newest records come first.
///
/// Every effective mutation bumps [`revision`](Self::revision), which the
/// browser uses to decide whether a cached view is still valid.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    revision: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from an existing dataset, keeping input order.
    ///
    /// Ids must be unique; on a duplicate the first record wins.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        for record in records {
            if seen.insert(record.id) {
                kept.push(record);
            } else {
                warn!(id = %record.id, "dropping record with duplicate id");
            }
        }
        debug!(count = kept.len(), "record store seeded");
        Self {
            records: kept,
            revision: 0,
        }
    }

    /// Insert a new record at the front and return the stored copy.
    pub fn add(&mut self, candidate: NewRecord) -> Record {
        let mut id = RecordId::new();
        while self.contains(id) {
            id = RecordId::new();
        }
        let record = candidate.into_record(id);
        self.records.insert(0, record.clone());
        self.revision += 1;
        info!(id = %id, "record added");
        record
    }

    /// Delete the record with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: RecordId) -> Option<Record> {
        let index = self.position_of(id)?;
        let removed = self.records.remove(index);
        self.revision += 1;
        info!(id = %id, "record removed");
        Some(removed)
    }

    /// Overwrite one field of the record with `id`.
    ///
    /// Returns `false` without touching anything when `id` is unknown.
    pub fn update(&mut self, id: RecordId, update: FieldUpdate) -> bool {
        let Some(index) = self.position_of(id) else {
            debug!(id = %id, "update for unknown record ignored");
            return false;
        };
        let field = update.field();
        self.records[index].apply(update);
        self.revision += 1;
        debug!(id = %id, field = %field, "record updated");
        true
    }

    /// Owned snapshot of every record, newest first.
    pub fn list(&self) -> Vec<Record> {
        self.records.clone()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn position_of(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }
}
