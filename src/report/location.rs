//! Occurrence frequency per location

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::model::Occurrence;
use crate::store::Store;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    pub location: String,
    pub occurrences: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationReport {
    /// Each distinct location once, in first-seen store order
    pub locations: Vec<LocationCount>,
}

impl LocationReport {
    pub fn count_for(&self, location: &str) -> Option<usize> {
        self.locations
            .iter()
            .find(|entry| entry.location == location)
            .map(|entry| entry.occurrences)
    }
}

/// Group active occurrences by exact location text
pub fn location_frequency(occurrences: &Store<Occurrence>) -> LocationReport {
    let mut locations: Vec<LocationCount> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for occurrence in occurrences.active() {
        match slots.get(occurrence.location.as_str()) {
            Some(&slot) => locations[slot].occurrences += 1,
            None => {
                slots.insert(occurrence.location.as_str(), locations.len());
                locations.push(LocationCount {
                    location: occurrence.location.clone(),
                    occurrences: 1,
                });
            }
        }
    }

    LocationReport { locations }
}

impl fmt::Display for LocationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--- OCCURRENCES BY LOCATION ---")?;
        if self.locations.is_empty() {
            return write!(f, "\nNo active occurrences.");
        }
        for entry in &self.locations {
            write!(f, "\n- {}: {} incident(s)", entry.location, entry.occurrences)?;
        }
        Ok(())
    }
}
