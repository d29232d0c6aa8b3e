//! Date cursor: the anchor date a calendar view is centered on.
//!
//! Each view owns its own cursor, so several calendars can navigate
//! independently. Reading "today" goes through a [`Clock`] so callers that
//! need deterministic behaviour can inject a fixed date.

use chrono::{Duration, Local, NaiveDate, Weekday};

use crate::models::view::{Direction, PeriodUnit, ViewMode};
use crate::utils::date::{consecutive_dates, get_week_start, shift_month_preserving_day};

/// Source of the current date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub struct DateCursor<C: Clock = SystemClock> {
    anchor: NaiveDate,
    clock: C,
}

impl DateCursor<SystemClock> {
    /// Cursor anchored on today's local date.
    pub fn today() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> DateCursor<C> {
    /// Cursor anchored on the clock's current date.
    pub fn with_clock(clock: C) -> Self {
        Self {
            anchor: clock.today(),
            clock,
        }
    }

    pub fn at(anchor: NaiveDate, clock: C) -> Self {
        Self { anchor, clock }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: NaiveDate) {
        self.anchor = anchor;
    }

    /// Move the anchor by one period. Never fails: a step past the last
    /// representable date leaves the anchor where it is.
    pub fn advance(&mut self, unit: PeriodUnit, direction: Direction) {
        let sign = direction.sign();
        let moved = match unit {
            PeriodUnit::Day => self.anchor.checked_add_signed(Duration::days(sign)),
            PeriodUnit::Week => self.anchor.checked_add_signed(Duration::weeks(sign)),
            PeriodUnit::Month => Some(shift_month_preserving_day(self.anchor, sign as i32)),
        };
        match moved {
            Some(anchor) => {
                self.anchor = anchor;
                log::debug!("Calendar anchor moved to {}", self.anchor);
            }
            None => log::warn!(
                "Cannot move calendar anchor {} by {:?} {:?}, keeping it",
                self.anchor,
                direction,
                unit
            ),
        }
    }

    /// Step the anchor by the period that matches `view`.
    pub fn navigate(&mut self, view: ViewMode, direction: Direction) {
        self.advance(view.period(), direction);
    }

    pub fn jump_to_today(&mut self) {
        self.anchor = self.clock.today();
    }

    /// Dates visible in `view`, ascending and without duplicates.
    ///
    /// Weeks open on Monday (Sunday is the seventh day). The month view is a
    /// rolling window starting at the anchor rather than a calendar-month grid;
    /// a zero-length window is widened to the anchor alone.
    pub fn current_range(&self, view: ViewMode) -> Vec<NaiveDate> {
        match view {
            ViewMode::Day => vec![self.anchor],
            ViewMode::WorkWeek => {
                consecutive_dates(get_week_start(self.anchor, Weekday::Mon), 5)
            }
            ViewMode::Week => consecutive_dates(get_week_start(self.anchor, Weekday::Mon), 7),
            ViewMode::Month(days) => consecutive_dates(self.anchor, days.max(1)),
        }
    }
}
