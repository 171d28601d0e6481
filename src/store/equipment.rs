//! Equipment store operations

use crate::error::Result;
use crate::model::{Equipment, EquipmentStatus, RecordId};
use crate::persist::MAX_TEXT_BYTES;

use super::{clip, Store};

impl Store<Equipment> {
    /// Register a piece of equipment as `Operational`
    pub fn create(&mut self, designation: &str, kind: &str) -> Result<RecordId> {
        self.insert_with(|id| Equipment {
            id,
            designation: clip(designation, MAX_TEXT_BYTES),
            kind: clip(kind, MAX_TEXT_BYTES),
            status: EquipmentStatus::Operational,
        })
    }

    pub fn update_status(&mut self, id: RecordId, status: EquipmentStatus) -> Result<()> {
        self.set_status(id, status)
    }
}
