//! Calendar engine.
//!
//! Ties the cursor, the binner and the time-grid layout to an
//! [`OccurrenceSource`]. The source is asked for data once per visible-range
//! change and its answer replaces the previous collection wholesale; every
//! render re-bins and re-lays-out from that collection.

use anyhow::Result;
use chrono::NaiveDate;

use crate::models::layout::{DayColumn, LayoutConfig};
use crate::models::occurrence::ScheduleOccurrence;
use crate::models::view::{Direction, ViewMode};
use crate::services::binning::{agenda, bin};
use crate::services::cursor::{Clock, DateCursor, SystemClock};
use crate::services::layout::layout;
use crate::services::source::OccurrenceSource;

/// Bin `occurrences` over `range` and lay out each day.
pub fn render_range(
    occurrences: &[ScheduleOccurrence],
    range: &[NaiveDate],
    config: &LayoutConfig,
) -> Vec<DayColumn> {
    bin(occurrences, range)
        .into_iter()
        .map(|(date, bucket)| DayColumn {
            date,
            blocks: layout(&bucket, config),
        })
        .collect()
}

pub struct CalendarEngine<S: OccurrenceSource, C: Clock = SystemClock> {
    source: S,
    cursor: DateCursor<C>,
    view: ViewMode,
    config: LayoutConfig,
    occurrences: Vec<ScheduleOccurrence>,
    fetched_range: Option<Vec<NaiveDate>>,
}

impl<S: OccurrenceSource, C: Clock> CalendarEngine<S, C> {
    pub fn new(source: S, cursor: DateCursor<C>, view: ViewMode, config: LayoutConfig) -> Self {
        Self {
            source,
            cursor,
            view,
            config,
            occurrences: Vec::new(),
            fetched_range: None,
        }
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn cursor(&self) -> &DateCursor<C> {
        &self.cursor
    }

    pub fn anchor(&self) -> NaiveDate {
        self.cursor.anchor()
    }

    pub fn set_anchor(&mut self, anchor: NaiveDate) {
        self.cursor.set_anchor(anchor);
    }

    pub fn navigate(&mut self, direction: Direction) {
        self.cursor.navigate(self.view, direction);
    }

    pub fn jump_to_today(&mut self) {
        self.cursor.jump_to_today();
    }

    pub fn visible_range(&self) -> Vec<NaiveDate> {
        self.cursor.current_range(self.view)
    }

    /// Occurrences from the most recent fetch.
    pub fn occurrences(&self) -> &[ScheduleOccurrence] {
        &self.occurrences
    }

    /// Fetch from the source if the visible range changed since the last
    /// successful fetch. Returns whether a fetch happened.
    ///
    /// On failure the previous collection is kept and the error is returned
    /// to the caller.
    pub fn refresh(&mut self) -> Result<bool> {
        let range = self.visible_range();
        if self.fetched_range.as_ref() == Some(&range) {
            return Ok(false);
        }

        log::debug!(
            "Fetching occurrences for {} - {}",
            range[0],
            range[range.len() - 1]
        );
        self.occurrences = self.source.fetch(&range)?;
        self.fetched_range = Some(range);
        Ok(true)
    }

    /// Drop the cached collection so the next render fetches again.
    pub fn invalidate(&mut self) {
        self.fetched_range = None;
    }

    /// Day columns for the visible range.
    pub fn render(&mut self) -> Result<Vec<DayColumn>> {
        self.refresh()?;
        let range = self.visible_range();
        Ok(render_range(&self.occurrences, &range, &self.config))
    }

    /// Chronological list of the visible range's occurrences.
    pub fn agenda(&mut self) -> Result<Vec<(NaiveDate, &ScheduleOccurrence)>> {
        self.refresh()?;
        let range = self.visible_range();
        let buckets = bin(&self.occurrences, &range);
        Ok(agenda(&buckets))
    }
}
