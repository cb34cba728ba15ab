//! TOML alarm definition files.
//!
//! Alarm definitions are input configuration for a driver process, loaded
//! once at startup:
//!
//! ```toml
//! [[alarms]]
//! label = "Wake"
//! time = "07:00"
//! days = ["mon", "tue", "wed", "thu", "fri"]
//! ```
//!
//! Ring state and history never touch disk.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::ring::AlarmEngine;

/// One `[[alarms]]` table in a definitions file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmSpec {
    pub label: String,
    /// Fire time, `HH:MM`.
    pub time: String,
    /// Weekday tokens ("mon" .. "sun"). Omitted or empty = every day.
    #[serde(default)]
    pub days: Vec<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

/// Wrapper for the top-level table array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlarmsFile {
    #[serde(default)]
    pub alarms: Vec<AlarmSpec>,
}

impl AlarmsFile {
    /// Load alarm definitions from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let file: AlarmsFile =
            toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Ok(file)
    }

    /// Feed every definition through the engine's validating create path.
    /// Entries marked `enabled = false` are toggled off after insertion,
    /// since new alarms always start enabled.
    pub fn populate(&self, engine: &mut AlarmEngine) -> Result<()> {
        for spec in &self.alarms {
            let alarm = engine.create_alarm(&spec.label, &spec.time, &spec.days)?;
            if !spec.enabled {
                engine.toggle_alarm(alarm.id)?;
            }
        }
        Ok(())
    }

    /// Load a file and build a populated engine from it.
    pub fn load_engine(path: &Path) -> Result<AlarmEngine> {
        let file = Self::load(path)?;
        let mut engine = AlarmEngine::new();
        file.populate(&mut engine)?;
        Ok(engine)
    }
}
