// View module
// View modes and navigation units for the calendar cursor

use std::fmt;

/// Default length of the rolling "month" window.
pub const DEFAULT_MONTH_WINDOW_DAYS: usize = 30;

/// Which slice of the calendar is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Day,
    /// Monday through Friday of the anchor's week
    WorkWeek,
    /// Monday through Sunday of the anchor's week
    Week,
    /// Rolling window of `n` days starting at the anchor
    Month(usize),
}

impl ViewMode {
    /// Parse a view name (`day`, `workweek`, `week`, `month`), case-insensitive.
    /// `month` takes its window length from `month_days`.
    pub fn parse(name: &str, month_days: usize) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "day" => Some(Self::Day),
            "workweek" | "work_week" | "work-week" => Some(Self::WorkWeek),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month(month_days)),
            _ => None,
        }
    }

    /// Navigation step that matches this view.
    pub fn period(&self) -> PeriodUnit {
        match self {
            Self::Day => PeriodUnit::Day,
            Self::WorkWeek | Self::Week => PeriodUnit::Week,
            Self::Month(_) => PeriodUnit::Month,
        }
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        Self::Week
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "Day"),
            Self::WorkWeek => write!(f, "WorkWeek"),
            Self::Week => write!(f, "Week"),
            Self::Month(days) => write!(f, "Month ({} days)", days),
        }
    }
}

/// Distance moved by one navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodUnit {
    Day,
    Week,
    /// One calendar month, day-of-month clamped to the target month
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(&self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}
