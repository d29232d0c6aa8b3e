// Occurrence module
// One dated instance of a class or event as delivered by the data-fetch layer

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::utils::date::{parse_date, parse_time};

/// Start of the placeholder block used when an occurrence has no usable times.
pub const FALLBACK_START: (u32, u32) = (9, 0);
/// End of the placeholder block used when an occurrence has no usable times.
pub const FALLBACK_END: (u32, u32) = (10, 0);

/// A concrete, dated schedule occurrence.
///
/// Dates and times are kept exactly as received. They are resolved lazily
/// through [`ScheduleOccurrence::date`] and [`ScheduleOccurrence::time_span`],
/// which apply the lenient policies: an unreadable date makes the occurrence
/// unplaceable, unreadable times fall back to a 09:00-10:00 block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOccurrence {
    pub id: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendee_count: Option<u32>,
}

/// Resolved start/end times of an occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// True when the placeholder block replaced missing or malformed times
    pub is_fallback: bool,
}

impl TimeSpan {
    pub fn fallback() -> Self {
        Self {
            start: hm(FALLBACK_START),
            end: hm(FALLBACK_END),
            is_fallback: true,
        }
    }

    /// Signed length in whole minutes; zero or negative for malformed spans.
    pub fn duration_minutes(&self) -> i64 {
        minutes_of_day(self.end) - minutes_of_day(self.start)
    }
}

fn hm((hour, minute): (u32, u32)) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Minutes elapsed since midnight, ignoring seconds.
pub fn minutes_of_day(time: NaiveTime) -> i64 {
    time.hour() as i64 * 60 + time.minute() as i64
}

impl ScheduleOccurrence {
    /// Create an occurrence with the required fields.
    ///
    /// # Examples
    /// ```
    /// use school_calendar::models::occurrence::ScheduleOccurrence;
    ///
    /// let lesson = ScheduleOccurrence::new("c-101", "2024-02-05", "08:00", "09:30");
    /// assert_eq!(lesson.time_span().duration_minutes(), 90);
    /// ```
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            start: Some(start.into()),
            end: Some(end.into()),
            title: String::new(),
            room: None,
            subject: None,
            attendee_count: None,
        }
    }

    /// Create a builder for constructing occurrences with optional fields
    pub fn builder(id: impl Into<String>, date: impl Into<String>) -> OccurrenceBuilder {
        OccurrenceBuilder::new(id, date)
    }

    /// Calendar date of the occurrence, or `None` if it cannot be read.
    pub fn date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// Start and end times, falling back to 09:00-10:00 when either one is
    /// missing or malformed.
    pub fn time_span(&self) -> TimeSpan {
        let start = self.start.as_deref().and_then(parse_time);
        let end = self.end.as_deref().and_then(parse_time);
        match (start, end) {
            (Some(start), Some(end)) => TimeSpan {
                start,
                end,
                is_fallback: false,
            },
            _ => {
                log::debug!(
                    "Occurrence {} has unusable times ({:?} - {:?}), using placeholder block",
                    self.id,
                    self.start,
                    self.end
                );
                TimeSpan::fallback()
            }
        }
    }

    /// Resolved start time, used as the in-day sort key.
    pub fn start_time(&self) -> NaiveTime {
        self.time_span().start
    }
}

/// Builder for creating occurrences with optional fields
pub struct OccurrenceBuilder {
    occurrence: ScheduleOccurrence,
}

impl OccurrenceBuilder {
    pub fn new(id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            occurrence: ScheduleOccurrence {
                id: id.into(),
                date: date.into(),
                start: None,
                end: None,
                title: String::new(),
                room: None,
                subject: None,
                attendee_count: None,
            },
        }
    }

    /// Set both ends of the time span
    pub fn times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.occurrence.start = Some(start.into());
        self.occurrence.end = Some(end.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.occurrence.title = title.into();
        self
    }

    pub fn room(mut self, room: impl Into<String>) -> Self {
        self.occurrence.room = Some(room.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.occurrence.subject = Some(subject.into());
        self
    }

    pub fn attendee_count(mut self, count: u32) -> Self {
        self.occurrence.attendee_count = Some(count);
        self
    }

    pub fn build(self) -> ScheduleOccurrence {
        self.occurrence
    }
}
