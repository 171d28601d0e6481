//! Operational efficiency: mean resolution time per occurrence type

use std::fmt;

use serde::Serialize;

use crate::model::{Occurrence, OccurrenceKind, OccurrenceStatus};
use crate::store::Store;

use super::mean;

/// Resolution figures for one occurrence type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KindEfficiency {
    pub kind: OccurrenceKind,
    /// Resolved occurrences with a recorded end time
    pub resolved: usize,
    pub total_minutes: i64,
    /// 0 when nothing of this type was resolved
    pub average_minutes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EfficiencyReport {
    /// One entry per occurrence type, in type order
    pub by_kind: Vec<KindEfficiency>,
}

impl EfficiencyReport {
    pub fn for_kind(&self, kind: OccurrenceKind) -> Option<&KindEfficiency> {
        self.by_kind.iter().find(|entry| entry.kind == kind)
    }
}

/// Average reported-to-resolved time for each occurrence type.
///
/// Only active, `Resolved` occurrences with a set end time count. Negative
/// durations (end before report) count as 0.
pub fn operational_efficiency(occurrences: &Store<Occurrence>) -> EfficiencyReport {
    let mut by_kind: Vec<KindEfficiency> = OccurrenceKind::ALL
        .iter()
        .map(|&kind| KindEfficiency {
            kind,
            resolved: 0,
            total_minutes: 0,
            average_minutes: 0,
        })
        .collect();

    let resolved = occurrences
        .active()
        .filter(|o| o.status == OccurrenceStatus::Resolved && o.ended_at.is_set());

    for occurrence in resolved {
        let minutes = occurrence.reported_at.minutes_until(&occurrence.ended_at).max(0);
        if let Some(entry) = by_kind.iter_mut().find(|e| e.kind == occurrence.kind) {
            entry.total_minutes += minutes;
            entry.resolved += 1;
        }
    }

    for entry in &mut by_kind {
        entry.average_minutes = mean(entry.total_minutes, entry.resolved);
    }

    EfficiencyReport { by_kind }
}

impl fmt::Display for EfficiencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== OPERATIONAL EFFICIENCY REPORT ===")?;
        write!(f, "Mean resolution time per occurrence type (minutes):")?;
        for entry in &self.by_kind {
            let label = format!("{}:", entry.kind.label().to_uppercase());
            write!(
                f,
                "\n- {:<12}{} min (mean) over {} resolved occurrence(s).",
                label, entry.average_minutes, entry.resolved
            )?;
        }
        Ok(())
    }
}
