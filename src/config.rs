//! Configuration for Brigade
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{BrigadeError, Result};

/// Main configuration for a Brigade session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all data files
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── firefighters.bin
    ///     ├── equipments.bin
    ///     ├── occurrences.bin
    ///     └── interventions.bin
    pub data_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Report Configuration
    // -------------------------------------------------------------------------
    /// Capacity monitor flags a category critical when its free share is
    /// strictly below this percentage
    pub capacity_critical_pct: f64,

    /// Strain report flags the fleet overstrained when its maintenance share
    /// strictly exceeds this percentage
    pub maintenance_alert_pct: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            capacity_critical_pct: 20.0,
            maintenance_alert_pct: 30.0,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that thresholds are percentages
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("capacity_critical_pct", self.capacity_critical_pct),
            ("maintenance_alert_pct", self.maintenance_alert_pct),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(BrigadeError::Config(format!(
                    "{} must be within 0..=100, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all record files)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the capacity critical threshold (percent)
    pub fn capacity_critical_pct(mut self, pct: f64) -> Self {
        self.config.capacity_critical_pct = pct;
        self
    }

    /// Set the maintenance alert threshold (percent)
    pub fn maintenance_alert_pct(mut self, pct: f64) -> Self {
        self.config.maintenance_alert_pct = pct;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
