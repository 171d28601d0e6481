//! Occurrence (incident) record

use serde::Serialize;

use super::{RecordId, Timestamp};

coded_enum! {
    /// Environment an occurrence happens in
    OccurrenceKind, "occurrence type" {
        Forest = 0, "forest", "Forest";
        Urban = 1, "urban", "Urban";
        Industrial = 2, "industrial", "Industrial";
    }
}

coded_enum! {
    Priority, "priority" {
        Low = 0, "low", "Low";
        Normal = 1, "normal", "Normal";
        High = 2, "high", "High";
    }
}

coded_enum! {
    /// Lifecycle of an occurrence
    OccurrenceStatus, "occurrence status" {
        Reported = 0, "reported", "Reported";
        InProgress = 1, "in-progress", "In progress";
        Resolved = 2, "resolved", "Resolved";
        /// Cancelled (soft-deleted)
        Inactive = 3, "inactive", "Inactive";
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub id: RecordId,
    pub location: String,
    pub reported_at: Timestamp,
    /// [`Timestamp::UNSET`] until the occurrence is resolved
    pub ended_at: Timestamp,
    pub kind: OccurrenceKind,
    pub priority: Priority,
    pub status: OccurrenceStatus,
}
