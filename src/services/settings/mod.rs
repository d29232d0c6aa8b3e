// Settings service
// Loads and saves the TOML settings file

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

/// Environment variable that overrides the settings file location.
pub const CONFIG_ENV_VAR: &str = "SCHOOL_CALENDAR_CONFIG";
const CONFIG_FILE_NAME: &str = "settings.toml";

/// Where settings are read from when no explicit path is given:
/// `$SCHOOL_CALENDAR_CONFIG`, then the platform config directory.
pub fn default_settings_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    ProjectDirs::from("com", "SchoolDashboard", "SchoolCalendar")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to [`default_settings_path`].
    pub fn from_default_location() -> Result<Self> {
        let path = default_settings_path()
            .context("could not determine a configuration directory for settings")?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read settings, returning defaults if the file does not exist yet.
    /// The layout section is validated so a bad file fails here rather than
    /// at render time.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", self.path.display()))?;
        settings
            .layout_config()
            .with_context(|| format!("invalid layout settings in {}", self.path.display()))?;
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings)?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}
