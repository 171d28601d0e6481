//! Intervention record

use serde::Serialize;

use super::{RecordId, Timestamp};

coded_enum! {
    InterventionStatus, "intervention status" {
        InPlanning = 0, "in-planning", "Planning";
        Running = 1, "running", "Running";
        Finished = 2, "finished", "Finished";
        /// Cancelled (soft-deleted)
        Inactive = 3, "inactive", "Inactive";
    }
}

/// Links an occurrence to the firefighter working it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Intervention {
    pub id: RecordId,
    /// May name an occurrence that does not exist
    pub occurrence_id: RecordId,
    pub started_at: Timestamp,
    /// [`Timestamp::UNSET`] until the intervention is finished
    pub ended_at: Timestamp,
    pub status: InterventionStatus,
    /// May name a firefighter that does not exist
    pub firefighter_id: RecordId,
}
