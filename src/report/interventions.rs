//! Intervention duration statistics

use std::fmt;

use serde::Serialize;

use crate::model::{Intervention, InterventionStatus};
use crate::store::Store;

use super::mean;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterventionStats {
    /// Every `Finished` intervention, whatever its duration
    pub finished: usize,
    /// Finished interventions with a positive duration
    pub measured: usize,
    pub total_minutes: i64,
    /// Mean over `measured`, 0 when none
    pub average_minutes: i64,
}

/// Mean start-to-end time of finished interventions.
///
/// Non-positive durations are left out of the mean but still counted in
/// `finished`, so the two counts can differ.
pub fn intervention_stats(interventions: &Store<Intervention>) -> InterventionStats {
    let mut finished = 0;
    let mut measured = 0;
    let mut total_minutes = 0;

    for intervention in interventions
        .iter()
        .filter(|i| i.status == InterventionStatus::Finished)
    {
        finished += 1;
        let minutes = intervention.started_at.minutes_until(&intervention.ended_at);
        if minutes > 0 {
            total_minutes += minutes;
            measured += 1;
        }
    }

    InterventionStats {
        finished,
        measured,
        total_minutes,
        average_minutes: mean(total_minutes, measured),
    }
}

impl fmt::Display for InterventionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== INTERVENTION STATISTICS ===")?;
        if self.measured > 0 {
            writeln!(f, "- Mean duration: {} minutes", self.average_minutes)?;
        } else {
            writeln!(f, "- No finished intervention with a measurable duration.")?;
        }
        write!(f, "- Total finished: {}", self.finished)
    }
}
