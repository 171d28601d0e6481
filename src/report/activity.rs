//! Firefighter activity listing
//!
//! Presented to operators as a "ranking", but entries keep store order and
//! are not sorted by count.

use std::fmt;

use serde::Serialize;

use crate::model::{Firefighter, RecordId};
use crate::store::Store;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub id: RecordId,
    pub name: String,
    pub total_interventions: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityListing {
    pub entries: Vec<ActivityEntry>,
}

/// Active firefighters with their intervention counts, in store order
pub fn activity_listing(firefighters: &Store<Firefighter>) -> ActivityListing {
    let entries = firefighters
        .active()
        .map(|f| ActivityEntry {
            id: f.id,
            name: f.name.clone(),
            total_interventions: f.total_interventions,
        })
        .collect();
    ActivityListing { entries }
}

impl fmt::Display for ActivityListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== FIREFIGHTER ACTIVITY ===")?;
        writeln!(f, "{:<30} | {:<15}", "NAME", "INTERVENTIONS")?;
        write!(f, "------------------------------------------------")?;
        for entry in &self.entries {
            write!(f, "\n{:<30} | {}", entry.name, entry.total_interventions)?;
        }
        Ok(())
    }
}
