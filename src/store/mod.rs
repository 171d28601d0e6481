//! Entity Store Module
//!
//! In-memory collections of records, one store per entity kind.
//!
//! ## Responsibilities
//! - Assign ids from a per-store monotonic sequence
//! - Keep every record ever created (soft delete only, no id reuse)
//! - Produce restartable scans of active records in store order
//! - Id lookup without walking the collection
//!
//! ## Store order
//! Newest first. A freshly created record is the first one a scan yields;
//! records loaded from disk come out in reverse file order.

mod equipment;
mod firefighters;
mod interventions;
mod occurrences;
mod table;

pub use table::{ActiveRecords, Store};

use crate::model::{
    Equipment, EquipmentStatus, Firefighter, FirefighterStatus, Intervention, InterventionStatus,
    Occurrence, OccurrenceStatus, RecordId,
};

pub type FirefighterStore = Store<Firefighter>;
pub type EquipmentStore = Store<Equipment>;
pub type OccurrenceStore = Store<Occurrence>;
pub type InterventionStore = Store<Intervention>;

/// Behaviour shared by every stored entity
pub trait Record: Clone {
    /// Entity name used in errors and logs
    const KIND: &'static str;

    /// Status enum of this entity
    type Status: Copy + PartialEq + std::fmt::Debug;

    /// The status a soft-deleted record carries
    const INACTIVE: Self::Status;

    fn id(&self) -> RecordId;

    fn status(&self) -> Self::Status;

    fn set_status(&mut self, status: Self::Status);

    /// True unless the record is soft-deleted
    fn is_active(&self) -> bool {
        self.status() != Self::INACTIVE
    }
}

impl Record for Firefighter {
    const KIND: &'static str = "firefighter";
    type Status = FirefighterStatus;
    const INACTIVE: FirefighterStatus = FirefighterStatus::Inactive;

    fn id(&self) -> RecordId {
        self.id
    }

    fn status(&self) -> FirefighterStatus {
        self.status
    }

    fn set_status(&mut self, status: FirefighterStatus) {
        self.status = status;
    }
}

impl Record for Equipment {
    const KIND: &'static str = "equipment";
    type Status = EquipmentStatus;
    const INACTIVE: EquipmentStatus = EquipmentStatus::Inactive;

    fn id(&self) -> RecordId {
        self.id
    }

    fn status(&self) -> EquipmentStatus {
        self.status
    }

    fn set_status(&mut self, status: EquipmentStatus) {
        self.status = status;
    }
}

impl Record for Occurrence {
    const KIND: &'static str = "occurrence";
    type Status = OccurrenceStatus;
    const INACTIVE: OccurrenceStatus = OccurrenceStatus::Inactive;

    fn id(&self) -> RecordId {
        self.id
    }

    fn status(&self) -> OccurrenceStatus {
        self.status
    }

    fn set_status(&mut self, status: OccurrenceStatus) {
        self.status = status;
    }
}

impl Record for Intervention {
    const KIND: &'static str = "intervention";
    type Status = InterventionStatus;
    const INACTIVE: InterventionStatus = InterventionStatus::Inactive;

    fn id(&self) -> RecordId {
        self.id
    }

    fn status(&self) -> InterventionStatus {
        self.status
    }

    fn set_status(&mut self, status: InterventionStatus) {
        self.status = status;
    }
}

/// Cut `text` at its first NUL and to at most `max_bytes`, backing off to a
/// char boundary
pub(crate) fn clip(text: &str, max_bytes: usize) -> String {
    let text = text.split('\0').next().unwrap_or_default();
    if text.len() <= max_bytes {
        return text.to_string();
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}
