// Event binning
// Groups a flat occurrence list into per-date, time-ordered buckets

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::occurrence::ScheduleOccurrence;

/// Occurrences assigned to one date, ordered by start time.
pub type DayBucket<'a> = (NaiveDate, Vec<&'a ScheduleOccurrence>);

/// Partition `occurrences` into one bucket per date of `range`.
///
/// Every range date gets a bucket, even when nothing falls on it. Occurrences
/// whose date cannot be read, or that fall outside the range, are left out.
/// Within a bucket, occurrences are sorted by start time; equal starts keep
/// their input order.
pub fn bin<'a>(
    occurrences: &'a [ScheduleOccurrence],
    range: &[NaiveDate],
) -> Vec<DayBucket<'a>> {
    let mut by_date: HashMap<NaiveDate, Vec<&'a ScheduleOccurrence>> =
        range.iter().map(|date| (*date, Vec::new())).collect();

    let mut dropped = 0usize;
    for occurrence in occurrences {
        let Some(date) = occurrence.date() else {
            log::debug!(
                "Skipping occurrence {} with unreadable date '{}'",
                occurrence.id,
                occurrence.date
            );
            dropped += 1;
            continue;
        };
        if let Some(bucket) = by_date.get_mut(&date) {
            bucket.push(occurrence);
        }
    }
    if dropped > 0 {
        log::warn!("{} occurrence(s) skipped because of malformed dates", dropped);
    }

    range
        .iter()
        .map(|date| {
            let mut bucket = by_date.remove(date).unwrap_or_default();
            // stable: equal starts keep input order
            bucket.sort_by_cached_key(|occurrence| occurrence.start_time());
            (*date, bucket)
        })
        .collect()
}

/// Flatten buckets into the chronological list used by the agenda view.
/// Days without occurrences contribute nothing.
pub fn agenda<'a>(buckets: &[DayBucket<'a>]) -> Vec<(NaiveDate, &'a ScheduleOccurrence)> {
    buckets
        .iter()
        .flat_map(|(date, bucket)| bucket.iter().map(move |occurrence| (*date, *occurrence)))
        .collect()
}
