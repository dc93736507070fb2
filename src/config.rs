//! Dashboard configuration.
//!
//! Everything is optional: with no file the dashboard runs with a 3m alert
//! threshold, a 7-day history chart, OS-seeded randomness, and no log file.
//!
//! Example `flood_dashboard.toml`:
//! ```toml
//! alert_threshold_m = 3.0
//! history_days = 7
//! seed = 42
//!
//! [logging]
//! level = "debug"
//! file = "flood_dashboard.log"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::alert::thresholds::WATER_LEVEL_ALERT_M;
use crate::logging::LogLevel;
use crate::model::{DashboardError, WATER_LEVEL_RANGE_M};

/// Config file looked up in the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "flood_dashboard.toml";

/// Environment variable naming a config file. May be set in `.env`.
pub const CONFIG_ENV_VAR: &str = "FLOOD_DASHBOARD_CONFIG";

const MAX_HISTORY_DAYS: usize = 31;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub alert_threshold_m: f64,
    pub history_days: usize,
    pub seed: Option<u64>,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            alert_threshold_m: WATER_LEVEL_ALERT_M,
            history_days: 7,
            seed: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl DashboardConfig {
    /// Parses and validates TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, DashboardError> {
        let config: DashboardConfig =
            toml::from_str(text).map_err(|e| DashboardError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a config file.
    pub fn from_file(path: &Path) -> Result<Self, DashboardError> {
        let text = fs::read_to_string(path)
            .map_err(|e| DashboardError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Loads config from an explicit path, else `FLOOD_DASHBOARD_CONFIG`,
    /// else `flood_dashboard.toml` if it exists, else defaults.
    ///
    /// An explicitly named file that is missing is an error; a missing
    /// default file is not.
    pub fn load(explicit: Option<&str>) -> Result<Self, DashboardError> {
        dotenv::dotenv().ok();
        Self::load_with(
            explicit,
            std::env::var(CONFIG_ENV_VAR).ok(),
            Path::new(DEFAULT_CONFIG_FILE),
        )
    }

    /// Path resolution behind `load`, with the environment value and the
    /// default file passed in.
    pub fn load_with(
        explicit: Option<&str>,
        env_path: Option<String>,
        default_file: &Path,
    ) -> Result<Self, DashboardError> {
        let named = explicit.map(PathBuf::from).or_else(|| env_path.map(PathBuf::from));
        match named {
            Some(path) => Self::from_file(&path),
            None if default_file.exists() => Self::from_file(default_file),
            None => Ok(Self::default()),
        }
    }

    pub fn log_level(&self) -> Result<LogLevel, DashboardError> {
        self.logging.level.parse().map_err(DashboardError::Config)
    }

    fn validate(&self) -> Result<(), DashboardError> {
        let (lo, hi) = WATER_LEVEL_RANGE_M;
        if !(lo..=hi).contains(&self.alert_threshold_m) {
            return Err(DashboardError::Config(format!(
                "alert_threshold_m must be within [{}, {}], got {}",
                lo, hi, self.alert_threshold_m
            )));
        }
        if !(1..=MAX_HISTORY_DAYS).contains(&self.history_days) {
            return Err(DashboardError::Config(format!(
                "history_days must be within [1, {}], got {}",
                MAX_HISTORY_DAYS, self.history_days
            )));
        }
        self.log_level()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
