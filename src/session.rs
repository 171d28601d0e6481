//! Session Module
//!
//! One operator session: owns the four stores and their files.
//!
//! ## Responsibilities
//! - Load every store on open, save every store on close
//! - Route create / update / delete to the right store
//! - Link interventions to firefighters at creation time
//! - Run reports with the configured thresholds

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::model::{
    Equipment, EquipmentStatus, Firefighter, FirefighterStatus, Intervention, InterventionStatus,
    Occurrence, OccurrenceKind, OccurrenceStatus, Priority, RecordId, Timestamp,
};
use crate::persist::{self, FixedRecord};
use crate::report::{
    self, ActivityListing, CapacityReport, EfficiencyReport, InterventionStats, LocationReport,
    StrainReport,
};
use crate::store::{EquipmentStore, FirefighterStore, InterventionStore, OccurrenceStore, Store};

/// The in-memory state of one operator session
///
/// Single-threaded: every operation takes `&self` or `&mut self` and runs to
/// completion. Files are touched only by `open`, `save` and `close`.
pub struct Session {
    config: Config,
    firefighters: FirefighterStore,
    equipment: EquipmentStore,
    occurrences: OccurrenceStore,
    interventions: InterventionStore,
}

impl Session {
    // =========================================================================
    // File Names
    // =========================================================================
    pub const FIREFIGHTERS_FILE: &'static str = "firefighters.bin";
    pub const EQUIPMENT_FILE: &'static str = "equipments.bin";
    pub const OCCURRENCES_FILE: &'static str = "occurrences.bin";
    pub const INTERVENTIONS_FILE: &'static str = "interventions.bin";

    /// Open a session over the files in `config.data_dir`.
    ///
    /// A store whose file cannot be read starts empty; only an invalid config
    /// or an uncreatable data directory fails the open.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        fs::create_dir_all(&config.data_dir)?;

        let dir = config.data_dir.clone();
        let session = Self {
            firefighters: load_or_empty(&dir.join(Self::FIREFIGHTERS_FILE)),
            equipment: load_or_empty(&dir.join(Self::EQUIPMENT_FILE)),
            occurrences: load_or_empty(&dir.join(Self::OCCURRENCES_FILE)),
            interventions: load_or_empty(&dir.join(Self::INTERVENTIONS_FILE)),
            config,
        };

        info!(
            data_dir = %dir.display(),
            firefighters = session.firefighters.len(),
            equipment = session.equipment.len(),
            occurrences = session.occurrences.len(),
            interventions = session.interventions.len(),
            "session opened"
        );
        Ok(session)
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_dir(path).build())
    }

    /// Write all four stores.
    ///
    /// A store that cannot be written is logged and skipped; the others are
    /// still saved. Returns how many stores were written.
    pub fn save(&self) -> usize {
        let dir = &self.config.data_dir;
        [
            save_logged(&dir.join(Self::FIREFIGHTERS_FILE), &self.firefighters),
            save_logged(&dir.join(Self::EQUIPMENT_FILE), &self.equipment),
            save_logged(&dir.join(Self::OCCURRENCES_FILE), &self.occurrences),
            save_logged(&dir.join(Self::INTERVENTIONS_FILE), &self.interventions),
        ]
        .into_iter()
        .filter(|saved| *saved)
        .count()
    }

    /// End the session, saving every store
    pub fn close(self) -> usize {
        let saved = self.save();
        info!(stores_saved = saved, "session closed");
        saved
    }

    // =========================================================================
    // Firefighters
    // =========================================================================

    pub fn create_firefighter(&mut self, name: &str, specialty: &str) -> Result<RecordId> {
        self.firefighters.create(name, specialty)
    }

    pub fn update_firefighter(&mut self, id: RecordId, status: FirefighterStatus) -> Result<()> {
        self.firefighters.update_status(id, status)
    }

    pub fn delete_firefighter(&mut self, id: RecordId) -> Result<()> {
        self.firefighters.soft_delete(id)
    }

    // =========================================================================
    // Equipment
    // =========================================================================

    pub fn create_equipment(&mut self, designation: &str, kind: &str) -> Result<RecordId> {
        self.equipment.create(designation, kind)
    }

    pub fn update_equipment(&mut self, id: RecordId, status: EquipmentStatus) -> Result<()> {
        self.equipment.update_status(id, status)
    }

    pub fn delete_equipment(&mut self, id: RecordId) -> Result<()> {
        self.equipment.soft_delete(id)
    }

    // =========================================================================
    // Occurrences
    // =========================================================================

    pub fn create_occurrence(
        &mut self,
        location: &str,
        kind: OccurrenceKind,
        priority: Priority,
        reported_at: Timestamp,
    ) -> Result<RecordId> {
        self.occurrences.create(location, kind, priority, reported_at)
    }

    pub fn update_occurrence(
        &mut self,
        id: RecordId,
        status: OccurrenceStatus,
        ended_at: Option<Timestamp>,
    ) -> Result<()> {
        self.occurrences.update_status(id, status, ended_at)
    }

    pub fn delete_occurrence(&mut self, id: RecordId) -> Result<()> {
        self.occurrences.soft_delete(id)
    }

    // =========================================================================
    // Interventions
    // =========================================================================

    /// Create an intervention and credit the assigned firefighter, if any
    pub fn create_intervention(
        &mut self,
        occurrence_id: RecordId,
        started_at: Timestamp,
        firefighter_id: RecordId,
    ) -> Result<RecordId> {
        self.interventions
            .create(occurrence_id, started_at, firefighter_id, &mut self.firefighters)
    }

    pub fn update_intervention(
        &mut self,
        id: RecordId,
        status: InterventionStatus,
        ended_at: Option<Timestamp>,
    ) -> Result<()> {
        self.interventions.update_status(id, status, ended_at)
    }

    pub fn delete_intervention(&mut self, id: RecordId) -> Result<()> {
        self.interventions.soft_delete(id)
    }

    // =========================================================================
    // Reports
    // =========================================================================

    pub fn capacity(&self) -> CapacityReport {
        report::capacity_monitor(
            &self.firefighters,
            &self.equipment,
            self.config.capacity_critical_pct,
        )
    }

    pub fn efficiency(&self) -> EfficiencyReport {
        report::operational_efficiency(&self.occurrences)
    }

    pub fn strain(&self) -> StrainReport {
        report::equipment_strain(&self.equipment, self.config.maintenance_alert_pct)
    }

    pub fn locations(&self) -> LocationReport {
        report::location_frequency(&self.occurrences)
    }

    pub fn activity(&self) -> ActivityListing {
        report::activity_listing(&self.firefighters)
    }

    pub fn intervention_stats(&self) -> InterventionStats {
        report::intervention_stats(&self.interventions)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn firefighters(&self) -> &Store<Firefighter> {
        &self.firefighters
    }

    pub fn equipment(&self) -> &Store<Equipment> {
        &self.equipment
    }

    pub fn occurrences(&self) -> &Store<Occurrence> {
        &self.occurrences
    }

    pub fn interventions(&self) -> &Store<Intervention> {
        &self.interventions
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

fn load_or_empty<R: FixedRecord>(path: &Path) -> Store<R> {
    match persist::load(path) {
        Ok((store, _stats)) => store,
        Err(e) => {
            warn!(kind = R::KIND, error = %e, "store unavailable; starting empty");
            Store::new()
        }
    }
}

fn save_logged<R: FixedRecord>(path: &Path, store: &Store<R>) -> bool {
    match persist::save(path, store) {
        Ok(_) => true,
        Err(e) => {
            warn!(kind = R::KIND, error = %e, "store not saved");
            false
        }
    }
}
