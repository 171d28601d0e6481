//! Firefighter record

use serde::Serialize;

use super::RecordId;

coded_enum! {
    /// Availability of a firefighter
    FirefighterStatus, "firefighter status" {
        Available = 0, "available", "Available";
        Busy = 1, "busy", "Busy";
        /// Soft-deleted
        Inactive = 2, "inactive", "Inactive";
    }
}

/// A member of the brigade
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Firefighter {
    pub id: RecordId,
    pub name: String,
    pub specialty: String,
    pub status: FirefighterStatus,
    /// Incremented once per intervention created with this firefighter assigned
    pub total_interventions: i32,
    /// Reserved; persisted but never computed
    pub total_response_time: i32,
}
