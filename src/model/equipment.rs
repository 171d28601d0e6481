//! Equipment record

use serde::Serialize;

use super::RecordId;

coded_enum! {
    /// Operational state of a piece of equipment
    EquipmentStatus, "equipment status" {
        Operational = 0, "operational", "Operational";
        InUse = 1, "in-use", "In use";
        Maintenance = 2, "maintenance", "Maintenance";
        /// Soft-deleted
        Inactive = 3, "inactive", "Inactive";
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Equipment {
    pub id: RecordId,
    pub designation: String,
    /// Free text, e.g. "Hose"
    pub kind: String,
    pub status: EquipmentStatus,
}
