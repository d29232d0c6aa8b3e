// Layout module
// Time-grid configuration and the geometry produced for each occurrence

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Default first visible hour of the grid
pub const DEFAULT_WINDOW_START_HOUR: u32 = 6;
/// Default hour at which the grid ends
pub const DEFAULT_WINDOW_END_HOUR: u32 = 22;
pub const DEFAULT_PX_PER_HOUR: f32 = 60.0;
/// Vertical gutter subtracted from each block so stacked blocks stay apart
pub const DEFAULT_GAP_PX: f32 = 4.0;
/// Alternating block colors
pub const DEFAULT_PALETTE: [&str; 2] = ["#4A90D9", "#7B61C1"];

/// Rejected layout configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutConfigError {
    #[error("pixels per hour must be a positive number, got {0}")]
    InvalidScale(f32),
    #[error("visible window {start}:00-{end}:00 is empty or extends past midnight")]
    InvalidWindow { start: u32, end: u32 },
    #[error("block gap must be a non-negative number, got {0}")]
    InvalidGap(f32),
    #[error("color palette must contain at least one color")]
    EmptyPalette,
    #[error("palette entry '{0}' is not a #RRGGBB color")]
    InvalidColor(String),
}

/// Validated configuration for the time grid.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    window_start_hour: u32,
    window_end_hour: u32,
    px_per_hour: f32,
    gap_px: f32,
    palette: Vec<String>,
}

impl LayoutConfig {
    /// Build a configuration, rejecting values that cannot produce
    /// meaningful geometry.
    pub fn new(
        window_start_hour: u32,
        window_end_hour: u32,
        px_per_hour: f32,
        gap_px: f32,
        palette: Vec<String>,
    ) -> Result<Self, LayoutConfigError> {
        if !px_per_hour.is_finite() || px_per_hour <= 0.0 {
            return Err(LayoutConfigError::InvalidScale(px_per_hour));
        }
        if window_start_hour >= window_end_hour || window_end_hour > 24 {
            return Err(LayoutConfigError::InvalidWindow {
                start: window_start_hour,
                end: window_end_hour,
            });
        }
        if !gap_px.is_finite() || gap_px < 0.0 {
            return Err(LayoutConfigError::InvalidGap(gap_px));
        }
        if palette.is_empty() {
            return Err(LayoutConfigError::EmptyPalette);
        }
        if let Some(bad) = palette.iter().find(|c| parse_hex_color(c).is_none()) {
            return Err(LayoutConfigError::InvalidColor(bad.clone()));
        }

        Ok(Self {
            window_start_hour,
            window_end_hour,
            px_per_hour,
            gap_px,
            palette,
        })
    }

    /// Same as the defaults but with a different vertical scale.
    pub fn with_scale(px_per_hour: f32) -> Result<Self, LayoutConfigError> {
        let defaults = Self::default();
        Self::new(
            defaults.window_start_hour,
            defaults.window_end_hour,
            px_per_hour,
            defaults.gap_px,
            defaults.palette,
        )
    }

    pub fn window_start_hour(&self) -> u32 {
        self.window_start_hour
    }

    pub fn window_end_hour(&self) -> u32 {
        self.window_end_hour
    }

    pub fn px_per_hour(&self) -> f32 {
        self.px_per_hour
    }

    pub fn gap_px(&self) -> f32 {
        self.gap_px
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    pub fn palette_size(&self) -> usize {
        self.palette.len()
    }

    /// Palette color for a block's `color_index`; wraps around the palette.
    pub fn color_for(&self, index: usize) -> &str {
        &self.palette[index % self.palette.len()]
    }
}

impl Default for LayoutConfig {
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

/// Parse a hex color string into RGB components.
///
/// # Arguments
/// * `hex` - A hex color string, optionally prefixed with '#' (e.g., "#FF5500" or "FF5500")
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Pixel geometry for one occurrence inside its day column.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBlock {
    pub occurrence_id: String,
    pub top_offset_px: f32,
    pub height_px: f32,
    pub color_index: usize,
    /// Times the geometry was computed from (after placeholder substitution)
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// One rendered date of the visible range.
#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub blocks: Vec<LayoutBlock>,
}

impl DayColumn {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
