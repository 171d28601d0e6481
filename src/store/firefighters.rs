//! Firefighter store operations

use tracing::debug;

use crate::error::Result;
use crate::model::{Firefighter, FirefighterStatus, RecordId};
use crate::persist::MAX_TEXT_BYTES;

use super::{clip, Store};

impl Store<Firefighter> {
    /// Register a firefighter as `Available` with zeroed counters
    pub fn create(&mut self, name: &str, specialty: &str) -> Result<RecordId> {
        self.insert_with(|id| Firefighter {
            id,
            name: clip(name, MAX_TEXT_BYTES),
            specialty: clip(specialty, MAX_TEXT_BYTES),
            status: FirefighterStatus::Available,
            total_interventions: 0,
            total_response_time: 0,
        })
    }

    /// Change the status of an active firefighter
    pub fn update_status(&mut self, id: RecordId, status: FirefighterStatus) -> Result<()> {
        self.set_status(id, status)
    }

    /// Count one more intervention for `id`, whatever its status.
    ///
    /// Returns false when no firefighter has that id.
    pub fn record_assignment(&mut self, id: RecordId) -> bool {
        match self.get_mut(id) {
            Some(firefighter) => {
                firefighter.total_interventions += 1;
                debug!(
                    id,
                    total = firefighter.total_interventions,
                    "firefighter assignment recorded"
                );
                true
            }
            None => false,
        }
    }
}
