//! Equipment usage and strain

use std::fmt;

use serde::Serialize;

use crate::model::{Equipment, EquipmentStatus};
use crate::store::Store;

use super::{above_pct, percent};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrainReport {
    /// Active equipment
    pub total: usize,
    pub maintenance: usize,
    pub operational: usize,
    /// 0 when there is no active equipment
    pub maintenance_pct: f64,
    /// 0 when there is no active equipment
    pub operational_pct: f64,
    /// Maintenance share strictly above the alert threshold
    pub overstrained: bool,
}

/// Share of the active fleet in maintenance and ready for use
pub fn equipment_strain(equipment: &Store<Equipment>, alert_pct: f64) -> StrainReport {
    let mut total = 0;
    let mut maintenance = 0;
    let mut operational = 0;

    for item in equipment.active() {
        total += 1;
        match item.status {
            EquipmentStatus::Maintenance => maintenance += 1,
            EquipmentStatus::Operational => operational += 1,
            _ => {}
        }
    }

    StrainReport {
        total,
        maintenance,
        operational,
        maintenance_pct: percent(maintenance, total),
        operational_pct: percent(operational, total),
        overstrained: total > 0 && above_pct(maintenance, total, alert_pct),
    }
}

impl fmt::Display for StrainReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== EQUIPMENT STRAIN ANALYSIS ===")?;
        writeln!(f, "Fleet size: {} unit(s)", self.total)?;
        writeln!(f, "Operational readiness: {:.1}%", self.operational_pct)?;
        writeln!(f, "Maintenance ratio: {:.1}%", self.maintenance_pct)?;
        if self.overstrained {
            write!(f, "Maintenance share is high! Consider new acquisitions.")
        } else {
            write!(f, "Fleet condition is healthy.")
        }
    }
}
