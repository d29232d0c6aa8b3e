//! Plain-text presentation of rendered calendar columns.
//!
//! Stands in for the dashboard's markup: each day column is printed as a
//! header followed by one line per layout block.

use std::collections::HashMap;
use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::layout::{DayColumn, LayoutBlock, LayoutConfig};
use crate::models::occurrence::ScheduleOccurrence;

/// Day-column header date following the `date_format` setting.
/// Day-first and year-first settings are honoured; anything else prints
/// month-first.
pub fn format_short_date(date: NaiveDate, date_format: &str) -> String {
    if date_format.starts_with("DD/MM") || date_format.starts_with("dd/mm") {
        date.format("%d/%m").to_string()
    } else if date_format.starts_with("YYYY") || date_format.starts_with("yyyy") {
        date.format("%Y/%m/%d").to_string()
    } else {
        date.format("%m/%d").to_string()
    }
}

/// Secondary details shown after the title: room, subject, head count.
pub fn format_details(occurrence: &ScheduleOccurrence) -> String {
    let mut parts = Vec::new();

    if let Some(room) = occurrence.room.as_deref().filter(|r| !r.is_empty()) {
        parts.push(format!("room {}", room));
    }
    if let Some(subject) = occurrence.subject.as_deref().filter(|s| !s.is_empty()) {
        parts.push(subject.to_string());
    }
    if let Some(count) = occurrence.attendee_count {
        parts.push(format!("{} attending", count));
    }

    parts.join(", ")
}

fn format_block(
    block: &LayoutBlock,
    occurrence: Option<&ScheduleOccurrence>,
    config: &LayoutConfig,
) -> String {
    let mut line = format!(
        "  {}-{}  top {:>6.1}px  height {:>5.1}px  {}",
        block.start.format("%H:%M"),
        block.end.format("%H:%M"),
        block.top_offset_px,
        block.height_px,
        config.color_for(block.color_index),
    );

    let Some(occurrence) = occurrence else {
        return line;
    };
    let title = if occurrence.title.is_empty() {
        "(untitled)"
    } else {
        occurrence.title.as_str()
    };
    let _ = write!(line, "  {}", title);
    let details = format_details(occurrence);
    if !details.is_empty() {
        let _ = write!(line, " ({})", details);
    }
    line
}

/// Render day columns as text. `occurrences` supplies titles and details,
/// matched on date and id since a recurring lesson repeats its id across
/// days. Blocks without a match are printed with geometry only.
pub fn render_columns(
    columns: &[DayColumn],
    occurrences: &[ScheduleOccurrence],
    config: &LayoutConfig,
    date_format: &str,
) -> String {
    let by_key: HashMap<(NaiveDate, &str), &ScheduleOccurrence> = occurrences
        .iter()
        .filter_map(|o| o.date().map(|date| ((date, o.id.as_str()), o)))
        .collect();

    let mut out = String::new();
    for column in columns {
        let _ = writeln!(
            out,
            "{} {}",
            column.date.format("%a"),
            format_short_date(column.date, date_format)
        );
        if column.is_empty() {
            let _ = writeln!(out, "  no classes");
            continue;
        }
        for block in &column.blocks {
            let occurrence = by_key
                .get(&(column.date, block.occurrence_id.as_str()))
                .copied();
            let _ = writeln!(out, "{}", format_block(block, occurrence, config));
        }
    }
    out
}

/// Render the list view: one line per occurrence, dated.
pub fn render_agenda(entries: &[(NaiveDate, &ScheduleOccurrence)], date_format: &str) -> String {
    if entries.is_empty() {
        return "No classes scheduled\n".to_string();
    }

    let mut out = String::new();
    for (date, occurrence) in entries {
        let span = occurrence.time_span();
        let _ = write!(
            out,
            "{} {} {}-{}  {}",
            date.format("%a"),
            format_short_date(*date, date_format),
            span.start.format("%H:%M"),
            span.end.format("%H:%M"),
            occurrence.title
        );
        let details = format_details(occurrence);
        if !details.is_empty() {
            let _ = write!(out, " ({})", details);
        }
        out.push('\n');
    }
    out
}
