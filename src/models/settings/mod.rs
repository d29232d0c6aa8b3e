// Settings module
// User-editable calendar settings, stored as TOML

use serde::{Deserialize, Serialize};

use crate::models::layout::{
    LayoutConfig, LayoutConfigError, DEFAULT_GAP_PX, DEFAULT_PALETTE, DEFAULT_PX_PER_HOUR,
    DEFAULT_WINDOW_END_HOUR, DEFAULT_WINDOW_START_HOUR,
};
use crate::models::view::{ViewMode, DEFAULT_MONTH_WINDOW_DAYS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// View opened at startup: Day, WorkWeek, Week or Month
    pub current_view: String,
    /// Length of the rolling month window
    pub month_window_days: usize,
    pub date_format: String,
    pub layout: LayoutSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            current_view: "Week".to_string(),
            month_window_days: DEFAULT_MONTH_WINDOW_DAYS,
            date_format: "DD/MM/YYYY".to_string(),
            layout: LayoutSettings::default(),
        }
    }
}

impl Settings {
    /// The configured startup view. Unknown names fall back to the week view.
    pub fn view_mode(&self) -> ViewMode {
        ViewMode::parse(&self.current_view, self.month_window_days).unwrap_or_else(|| {
            log::warn!(
                "Unknown view '{}' in settings, using week view",
                self.current_view
            );
            ViewMode::default()
        })
    }

    pub fn layout_config(&self) -> Result<LayoutConfig, LayoutConfigError> {
        self.layout.to_config()
    }
}

/// Raw time-grid options as written in the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub window_start_hour: u32,
    pub window_end_hour: u32,
    pub px_per_hour: f32,
    pub gap_px: f32,
    pub palette: Vec<String>,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            window_start_hour: DEFAULT_WINDOW_START_HOUR,
            window_end_hour: DEFAULT_WINDOW_END_HOUR,
            px_per_hour: DEFAULT_PX_PER_HOUR,
            gap_px: DEFAULT_GAP_PX,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl LayoutSettings {
    pub fn to_config(&self) -> Result<LayoutConfig, LayoutConfigError> {
        LayoutConfig::new(
            self.window_start_hour,
            self.window_end_hour,
            self.px_per_hour,
            self.gap_px,
            self.palette.clone(),
        )
    }
}
