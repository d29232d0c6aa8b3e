//! Time-grid layout.
//!
//! Converts one day's ordered occurrences into vertical pixel geometry
//! against the configured time-of-day window. Nothing is clipped: an
//! occurrence before the window gets a negative offset and one after it
//! lands below the grid. Clipping is up to the presenter.

use chrono::{NaiveTime, Timelike};

use crate::models::layout::{LayoutBlock, LayoutConfig};
use crate::models::occurrence::{minutes_of_day, ScheduleOccurrence};

/// Smallest height a block is ever drawn with.
pub const MIN_BLOCK_HEIGHT_PX: f32 = 24.0;

/// Lay out one day's occurrences in bucket order.
///
/// `color_index` is the position in the bucket modulo the palette size, so
/// the same ordering always yields the same colors.
pub fn layout(day_occurrences: &[&ScheduleOccurrence], config: &LayoutConfig) -> Vec<LayoutBlock> {
    day_occurrences
        .iter()
        .enumerate()
        .map(|(position, occurrence)| layout_block(occurrence, position, config))
        .collect()
}

fn layout_block(
    occurrence: &ScheduleOccurrence,
    position: usize,
    config: &LayoutConfig,
) -> LayoutBlock {
    let span = occurrence.time_span();
    let duration_minutes = span.duration_minutes();

    let height_px = if duration_minutes <= 0 {
        log::debug!(
            "Occurrence {} has no positive duration, drawing minimum height",
            occurrence.id
        );
        MIN_BLOCK_HEIGHT_PX
    } else {
        let raw = minutes_to_px(duration_minutes, config) - config.gap_px();
        raw.max(MIN_BLOCK_HEIGHT_PX)
    };

    LayoutBlock {
        occurrence_id: occurrence.id.clone(),
        top_offset_px: offset_for(span.start, config),
        height_px,
        color_index: position % config.palette_size(),
        start: span.start,
        end: span.end,
    }
}

fn minutes_to_px(minutes: i64, config: &LayoutConfig) -> f32 {
    minutes as f32 / 60.0 * config.px_per_hour()
}

/// Vertical offset of a time of day from the top of the window.
pub fn offset_for(time: NaiveTime, config: &LayoutConfig) -> f32 {
    let from_window =
        (time.hour() as i64 - config.window_start_hour() as i64) * 60 + time.minute() as i64;
    minutes_to_px(from_window, config)
}

/// Full height of a day column.
pub fn grid_height_px(config: &LayoutConfig) -> f32 {
    (config.window_end_hour() - config.window_start_hour()) as f32 * config.px_per_hour()
}

/// Hour lines for the time gutter: `(hour, offset)` for every hour from the
/// window start up to and including the window end.
pub fn hour_marks(config: &LayoutConfig) -> Vec<(u32, f32)> {
    (config.window_start_hour()..=config.window_end_hour())
        .map(|hour| {
            let offset = (hour - config.window_start_hour()) as f32 * config.px_per_hour();
            (hour, offset)
        })
        .collect()
}

/// Offset of the "now" line, or `None` when `time` is outside the window.
pub fn time_indicator_offset(time: NaiveTime, config: &LayoutConfig) -> Option<f32> {
    let minutes = minutes_of_day(time);
    let window_start = config.window_start_hour() as i64 * 60;
    let window_end = config.window_end_hour() as i64 * 60;
    if minutes < window_start || minutes > window_end {
        return None;
    }
    Some(offset_for(time, config))
}
