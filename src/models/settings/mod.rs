// Planner settings
// Operating window and grid resolution, persisted as a TOML config file

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// The fixed daily operating window and slot resolution the grid
/// represents. The window is `[start_hour, end_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerSettings {
    pub start_hour: u32,
    pub end_hour: u32,
    pub slot_minutes: u32,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 22,
            slot_minutes: 30,
        }
    }
}

impl PlannerSettings {
    /// Validate the settings.
    ///
    /// The slot duration must divide the window evenly so row indices
    /// tile the window exactly.
    pub fn validate(&self) -> Result<(), String> {
        if self.start_hour >= self.end_hour {
            return Err("Operating window start must be before its end".to_string());
        }

        // 24 is excluded: window boundaries must stay representable
        // same-day wall-clock times, and there is no 24:00 NaiveTime
        if self.end_hour >= 24 {
            return Err("Operating window must end by 23:00".to_string());
        }

        if self.slot_minutes == 0 {
            return Err("Slot duration must be positive".to_string());
        }

        let window_minutes = (self.end_hour - self.start_hour) * 60;
        if window_minutes % self.slot_minutes != 0 {
            return Err(format!(
                "Slot duration of {} minutes does not divide the {}-minute window evenly",
                self.slot_minutes, window_minutes
            ));
        }

        Ok(())
    }

    /// Default config file path under the platform config directory.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "room-planner")
            .map(|dirs| dirs.config_dir().join("planner.toml"))
    }

    /// Load settings from a TOML file, falling back to defaults when the
    /// file does not exist yet.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No planner config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read planner config {:?}", path))?;
        let settings: Self =
            toml::from_str(&content).context("Failed to parse planner config")?;
        settings
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid planner config: {}", e))?;

        Ok(settings)
    }

    /// Save settings to a TOML file, creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()
            .map_err(|e| anyhow::anyhow!("Invalid planner settings: {}", e))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write planner config {:?}", path))?;

        Ok(())
    }

    pub fn window_start_minutes(&self) -> i64 {
        self.start_hour as i64 * 60
    }

    pub fn window_end_minutes(&self) -> i64 {
        self.end_hour as i64 * 60
    }

    /// Number of discrete rows the window divides into.
    pub fn row_count(&self) -> usize {
        ((self.window_end_minutes() - self.window_start_minutes()) / self.slot_minutes as i64)
            as usize
    }
}
