//! Store implementation
//!
//! Vec-backed record table with an id index.

use std::collections::HashMap;
use std::iter::Rev;
use std::slice;

use tracing::debug;

use crate::error::{BrigadeError, Result};
use crate::model::RecordId;

use super::Record;

/// Owned collection of one entity kind
///
/// Records live in a `Vec` in insertion order (oldest first); store order is
/// the reverse, so the newest record is yielded first. `index` maps each id to
/// the position of its first record in store order.
#[derive(Debug, Clone)]
pub struct Store<R: Record> {
    records: Vec<R>,
    index: HashMap<RecordId, usize>,
    /// Highest id assigned or loaded so far
    last_id: RecordId,
}

impl<R: Record> Store<R> {
    /// Create an empty store (sequence at 0)
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            last_id: 0,
        }
    }

    /// Rebuild a store from records in file order.
    ///
    /// Each record lands in front of the previous one, so store order is the
    /// reverse of file order. The sequence resumes from the highest id seen.
    pub fn from_file_order(records: impl IntoIterator<Item = R>) -> Self {
        let mut store = Self::new();
        for record in records {
            let id = record.id();
            // A later push sits earlier in store order, so it takes the slot
            store.index.insert(id, store.records.len());
            store.records.push(record);
            store.last_id = store.last_id.max(id);
        }
        store
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Highest id assigned or loaded; the next create gets `last_id() + 1`
    pub fn last_id(&self) -> RecordId {
        self.last_id
    }

    /// Number of records, inactive ones included
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records that are not soft-deleted
    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_active()).count()
    }

    /// Every record in store order, inactive ones included
    pub fn iter(&self) -> Rev<slice::Iter<'_, R>> {
        self.records.iter().rev()
    }

    /// Active records in store order
    pub fn active(&self) -> ActiveRecords<'_, R> {
        ActiveRecords {
            inner: self.records.iter().rev(),
        }
    }

    /// First record with this id in store order, whatever its status
    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.index.get(&id).map(|&pos| &self.records[pos])
    }

    pub(crate) fn get_mut(&mut self, id: RecordId) -> Option<&mut R> {
        match self.index.get(&id) {
            Some(&pos) => self.records.get_mut(pos),
            None => None,
        }
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Allocate the next id and append the record built for it.
    ///
    /// On failure the store and its sequence are left untouched.
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(RecordId) -> R) -> Result<RecordId> {
        let alloc_failed = || BrigadeError::AllocationFailure { kind: R::KIND };

        let id = self.last_id.checked_add(1).ok_or_else(alloc_failed)?;
        self.records.try_reserve(1).map_err(|_| alloc_failed())?;
        self.index.try_reserve(1).map_err(|_| alloc_failed())?;

        let record = build(id);
        self.index.insert(id, self.records.len());
        self.records.push(record);
        self.last_id = id;

        debug!(kind = R::KIND, id, "record created");
        Ok(id)
    }

    /// Apply `mutate` to an active record.
    ///
    /// Returns `NotFound` when the id is absent or the record is inactive.
    pub(crate) fn update_active(
        &mut self,
        id: RecordId,
        mutate: impl FnOnce(&mut R),
    ) -> Result<()> {
        match self.get_mut(id) {
            Some(record) if record.is_active() => {
                mutate(record);
                debug!(kind = R::KIND, id, status = ?record.status(), "record updated");
                Ok(())
            }
            _ => Err(BrigadeError::NotFound { kind: R::KIND, id }),
        }
    }

    /// Replace the status of an active record
    pub fn set_status(&mut self, id: RecordId, status: R::Status) -> Result<()> {
        self.update_active(id, |record| record.set_status(status))
    }

    /// Mark a record inactive.
    ///
    /// Succeeds for any existing id, including one that is already inactive.
    pub fn soft_delete(&mut self, id: RecordId) -> Result<()> {
        let record = self
            .get_mut(id)
            .ok_or(BrigadeError::NotFound { kind: R::KIND, id })?;
        record.set_status(R::INACTIVE);
        debug!(kind = R::KIND, id, "record soft-deleted");
        Ok(())
    }
}

impl<R: Record> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the active records of a store, newest first
#[derive(Clone)]
pub struct ActiveRecords<'a, R> {
    inner: Rev<slice::Iter<'a, R>>,
}

impl<'a, R: Record> Iterator for ActiveRecords<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find(|record| record.is_active())
    }
}
