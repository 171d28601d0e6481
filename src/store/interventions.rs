//! Intervention store operations
//!
//! Creating an intervention is the one place a store write reaches into
//! another store: the assigned firefighter's counter goes up by one.

use tracing::{debug, info};

use crate::error::Result;
use crate::model::{Firefighter, Intervention, InterventionStatus, RecordId, Timestamp};

use super::Store;

impl Store<Intervention> {
    /// Open an intervention in planning and credit the assigned firefighter.
    ///
    /// Neither reference is checked. When `firefighter_id` resolves in
    /// `firefighters` its `total_interventions` is incremented exactly once;
    /// otherwise the intervention is still created and nothing else changes.
    pub fn create(
        &mut self,
        occurrence_id: RecordId,
        started_at: Timestamp,
        firefighter_id: RecordId,
        firefighters: &mut Store<Firefighter>,
    ) -> Result<RecordId> {
        let id = self.insert_with(|id| Intervention {
            id,
            occurrence_id,
            started_at,
            ended_at: Timestamp::UNSET,
            status: InterventionStatus::InPlanning,
            firefighter_id,
        })?;

        if firefighters.record_assignment(firefighter_id) {
            info!(intervention = id, firefighter = firefighter_id, "firefighter assigned");
        } else {
            debug!(
                intervention = id,
                firefighter = firefighter_id,
                "assigned firefighter does not exist; counter not updated"
            );
        }
        Ok(id)
    }

    /// Change the status of an active intervention.
    ///
    /// `ended_at` is recorded only when moving to `Finished`.
    pub fn update_status(
        &mut self,
        id: RecordId,
        status: InterventionStatus,
        ended_at: Option<Timestamp>,
    ) -> Result<()> {
        self.update_active(id, |intervention| {
            intervention.status = status;
            if status == InterventionStatus::Finished {
                if let Some(ended_at) = ended_at {
                    intervention.ended_at = ended_at;
                }
            }
        })
    }
}
