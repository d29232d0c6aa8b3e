// Date utility functions
// Calendar arithmetic shared by the cursor and the binner

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day` - The weekday that opens a week
///
/// Weeks that begin before the earliest representable date start at
/// `NaiveDate::MIN` instead.
pub fn get_week_start(date: NaiveDate, first_day: Weekday) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday() as i64;
    let first = first_day.num_days_from_monday() as i64;
    let offset = (weekday - first + 7) % 7;
    date.checked_sub_signed(Duration::days(offset))
        .unwrap_or(NaiveDate::MIN)
}

/// `count` consecutive dates beginning at `start`.
pub fn consecutive_dates(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    start.iter_days().take(count).collect()
}

/// Move a date by whole months, keeping the day-of-month where possible.
///
/// Days that do not exist in the target month clamp to its last day,
/// so Jan 31 + 1 month lands on Feb 28 (or 29 in a leap year).
pub fn shift_month_preserving_day(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) as u32 + 1;
    let day = current.day().min(last_day_of_month(new_year, new_month));
    NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap_or(current)
}

pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Parse a wall-clock calendar date.
///
/// Accepts `YYYY-MM-DD`, or an ISO date-time whose date part is used.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
}

/// Parse a 24-hour time of day (`HH:MM` or `HH:MM:SS`).
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_get_week_start_monday() {
        // Wednesday, Dec 4, 2024
        let start = get_week_start(ymd(2024, 12, 4), Weekday::Mon);
        assert_eq!(start, ymd(2024, 12, 2));
    }

    #[test]
    fn test_get_week_start_sunday_anchor_goes_back_six_days() {
        // Sunday, Dec 8, 2024
        let start = get_week_start(ymd(2024, 12, 8), Weekday::Mon);
        assert_eq!(start, ymd(2024, 12, 2));
    }

    #[test]
    fn test_get_week_start_first_day_sunday() {
        let start = get_week_start(ymd(2024, 12, 4), Weekday::Sun);
        assert_eq!(start, ymd(2024, 12, 1));
    }

    #[test]
    fn test_consecutive_dates_cross_month() {
        let dates = consecutive_dates(ymd(2024, 2, 28), 3);
        assert_eq!(dates, vec![ymd(2024, 2, 28), ymd(2024, 2, 29), ymd(2024, 3, 1)]);
    }

    #[test]
    fn test_shift_month_clamps_day() {
        assert_eq!(shift_month_preserving_day(ymd(2024, 1, 31), 1), ymd(2024, 2, 29));
        assert_eq!(shift_month_preserving_day(ymd(2023, 1, 31), 1), ymd(2023, 2, 28));
        assert_eq!(shift_month_preserving_day(ymd(2024, 1, 15), -1), ymd(2023, 12, 15));
    }

    #[test]
    fn test_calendar_limits_do_not_panic() {
        assert_eq!(get_week_start(NaiveDate::MIN, Weekday::Mon), NaiveDate::MIN);
        assert_eq!(shift_month_preserving_day(NaiveDate::MAX, 1), NaiveDate::MAX);
        assert_eq!(shift_month_preserving_day(NaiveDate::MIN, -1), NaiveDate::MIN);
    }

    #[test]
    fn test_last_day_of_month_december() {
        assert_eq!(last_day_of_month(2024, 12), 31);
        assert_eq!(last_day_of_month(2024, 4), 30);
    }

    #[test]
    fn test_parse_date_variants() {
        assert_eq!(parse_date("2024-02-05"), Some(ymd(2024, 2, 5)));
        assert_eq!(parse_date(" 2024-02-05T08:30:00 "), Some(ymd(2024, 2, 5)));
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("05/02/2024"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_parse_time_variants() {
        assert_eq!(parse_time("08:00"), NaiveTime::from_hms_opt(8, 0, 0));
        assert_eq!(parse_time("23:30:15"), NaiveTime::from_hms_opt(23, 30, 15));
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("8am"), None);
    }
}
