// Test fixtures - reusable test data
// Provides consistent schedules across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use school_calendar::models::occurrence::ScheduleOccurrence;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, Feb 5, 2024
    pub fn monday_feb_5_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 5).unwrap()
    }

    /// Sunday, Feb 11, 2024 (last day of the ISO week starting Feb 5)
    pub fn sunday_feb_11_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 11).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Tuesday, Dec 31, 2024 (week spans the new year)
    pub fn new_years_eve_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }
}

/// Sample schedules for testing
pub mod schedules {
    use super::*;

    /// Two lessons sharing an 08:00 start on Feb 5, 2024
    pub fn tied_morning_lessons() -> Vec<ScheduleOccurrence> {
        vec![
            ScheduleOccurrence::builder("double-maths", "2024-02-05")
                .times("08:00", "09:30")
                .title("Mathematics")
                .room("A1")
                .build(),
            ScheduleOccurrence::builder("english", "2024-02-05")
                .times("08:00", "09:00")
                .title("English")
                .room("A2")
                .build(),
        ]
    }

    /// A mixed week of lessons, including one malformed date and one
    /// lesson without times
    pub fn school_week() -> Vec<ScheduleOccurrence> {
        vec![
            ScheduleOccurrence::builder("mon-chem", "2024-02-05")
                .times("10:00", "11:00")
                .title("Chemistry")
                .subject("Science")
                .attendee_count(22)
                .build(),
            ScheduleOccurrence::builder("mon-maths", "2024-02-05")
                .times("08:00", "09:30")
                .title("Mathematics")
                .build(),
            ScheduleOccurrence::builder("wed-assembly", "2024-02-07")
                .title("Assembly")
                .build(),
            ScheduleOccurrence::builder("fri-pe", "2024-02-09")
                .times("14:00", "15:30")
                .title("Physical Education")
                .room("Gym")
                .build(),
            ScheduleOccurrence::builder("broken", "2024/02/06")
                .times("09:00", "10:00")
                .title("Lost lesson")
                .build(),
            ScheduleOccurrence::builder("next-week", "2024-02-12")
                .times("09:00", "10:00")
                .title("Next week")
                .build(),
        ]
    }
}
