//! Reporting Engine
//!
//! Read-only aggregates over one or more stores.
//!
//! ## Responsibilities
//! - Capacity monitor (free personnel / operational equipment)
//! - Operational efficiency (resolution time per occurrence type)
//! - Equipment strain (maintenance vs. operational share)
//! - Location frequency (active occurrences per location)
//! - Firefighter activity listing
//! - Intervention statistics
//!
//! Every report borrows the stores for the duration of the call, skips
//! inactive records unless stated otherwise, and returns a plain value that
//! renders as text through `Display` or as JSON through serde.
//!
//! Durations use [`Timestamp::linear_minutes`](crate::model::Timestamp::linear_minutes)
//! and are integer minutes; averages truncate toward zero.

mod activity;
mod capacity;
mod efficiency;
mod interventions;
mod location;
mod strain;

pub use activity::{activity_listing, ActivityEntry, ActivityListing};
pub use capacity::{capacity_monitor, CapacityReport, CategoryCapacity};
pub use efficiency::{operational_efficiency, EfficiencyReport, KindEfficiency};
pub use interventions::{intervention_stats, InterventionStats};
pub use location::{location_frequency, LocationCount, LocationReport};
pub use strain::{equipment_strain, StrainReport};

/// `part` as a percentage of `total`; 0 when `total` is 0
pub(crate) fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Whether `part / total` is strictly below `threshold_pct` percent.
///
/// Compared as `part * 100 < threshold * total` so exact boundaries such as
/// 1 of 5 against 20% are not disturbed by rounding.
pub(crate) fn below_pct(part: usize, total: usize, threshold_pct: f64) -> bool {
    (part as f64) * 100.0 < threshold_pct * total as f64
}

/// Whether `part / total` is strictly above `threshold_pct` percent
pub(crate) fn above_pct(part: usize, total: usize, threshold_pct: f64) -> bool {
    (part as f64) * 100.0 > threshold_pct * total as f64
}

/// Integer mean, 0 for an empty sample
pub(crate) fn mean(sum: i64, count: usize) -> i64 {
    if count == 0 {
        return 0;
    }
    sum / count as i64
}
