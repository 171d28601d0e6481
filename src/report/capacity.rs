//! Operational capacity monitor

use std::fmt;

use serde::Serialize;

use crate::model::{Equipment, EquipmentStatus, Firefighter, FirefighterStatus};
use crate::store::Store;

use super::{below_pct, percent};

/// Free share of one resource category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CategoryCapacity {
    /// No active members in the category
    NoData,

    Measured {
        free: usize,
        total: usize,
        percent: f64,
        /// Free share strictly below the critical threshold
        critical: bool,
    },
}

impl CategoryCapacity {
    fn measure(free: usize, total: usize, critical_pct: f64) -> Self {
        if total == 0 {
            return CategoryCapacity::NoData;
        }
        CategoryCapacity::Measured {
            free,
            total,
            percent: percent(free, total),
            critical: below_pct(free, total, critical_pct),
        }
    }

    pub fn is_critical(&self) -> bool {
        matches!(self, CategoryCapacity::Measured { critical: true, .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapacityReport {
    /// Available firefighters among active ones
    pub firefighters: CategoryCapacity,
    /// Operational equipment among active equipment
    pub equipment: CategoryCapacity,
}

/// Count free resources against active ones in each category
pub fn capacity_monitor(
    firefighters: &Store<Firefighter>,
    equipment: &Store<Equipment>,
    critical_pct: f64,
) -> CapacityReport {
    let (free_ff, total_ff) = firefighters.active().fold((0, 0), |(free, total), f| {
        (free + usize::from(f.status == FirefighterStatus::Available), total + 1)
    });
    let (free_eq, total_eq) = equipment.active().fold((0, 0), |(free, total), e| {
        (free + usize::from(e.status == EquipmentStatus::Operational), total + 1)
    });

    CapacityReport {
        firefighters: CategoryCapacity::measure(free_ff, total_ff, critical_pct),
        equipment: CategoryCapacity::measure(free_eq, total_eq, critical_pct),
    }
}

impl fmt::Display for CapacityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== OPERATIONAL CAPACITY MONITOR ===")?;

        writeln!(f, "Personnel (firefighters):")?;
        match self.firefighters {
            CategoryCapacity::NoData => writeln!(f, " -> No active firefighters on record.")?,
            CategoryCapacity::Measured { free, total, percent, critical } => {
                writeln!(f, " -> {} free of {} total ({:.1}%)", free, total, percent)?;
                if critical {
                    writeln!(f, " Critical capacity! Call for reinforcements.")?;
                } else {
                    writeln!(f, " Stable.")?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "Equipment:")?;
        match self.equipment {
            CategoryCapacity::NoData => writeln!(f, " -> No active equipment on record.")?,
            CategoryCapacity::Measured { free, total, percent, critical } => {
                writeln!(f, " -> {} operational of {} total ({:.1}%)", free, total, percent)?;
                if critical {
                    writeln!(f, " Fleet close to its limit!")?;
                } else {
                    writeln!(f, " Stable.")?;
                }
            }
        }

        write!(f, "====================================")
    }
}
