// Property-based tests for range generation, binning and layout
// Random anchors, schedules and scales must never break the invariants

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;
use school_calendar::models::layout::LayoutConfig;
use school_calendar::models::occurrence::ScheduleOccurrence;
use school_calendar::models::view::ViewMode;
use school_calendar::services::binning::bin;
use school_calendar::services::cursor::{DateCursor, FixedClock};
use school_calendar::services::layout::{layout, MIN_BLOCK_HEIGHT_PX};

fn anchor_strategy() -> impl Strategy<Value = NaiveDate> {
    // roughly 1990 to 2060
    (0i64..25_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + Duration::days(offset)
    })
}

fn time_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        4 => (0u32..24, 0u32..60).prop_map(|(h, m)| Some(format!("{:02}:{:02}", h, m))),
        1 => Just(None),
        1 => Just(Some("garbage".to_string())),
    ]
}

fn occurrence_strategy() -> impl Strategy<Value = ScheduleOccurrence> {
    (0i64..10, time_strategy(), time_strategy(), any::<bool>()).prop_map(
        |(day, start, end, malformed)| {
            let date = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap() + Duration::days(day);
            let mut occurrence = ScheduleOccurrence::builder("", date.format("%Y-%m-%d").to_string())
                .build();
            if malformed && day == 9 {
                occurrence.date = "not a date".to_string();
            }
            occurrence.start = start;
            occurrence.end = end;
            occurrence
        },
    )
}

fn schedule_strategy() -> impl Strategy<Value = Vec<ScheduleOccurrence>> {
    prop::collection::vec(occurrence_strategy(), 0..40).prop_map(|mut occurrences| {
        for (index, occurrence) in occurrences.iter_mut().enumerate() {
            occurrence.id = format!("occ-{}", index);
        }
        occurrences
    })
}

fn view_strategy() -> impl Strategy<Value = ViewMode> {
    prop_oneof![
        Just(ViewMode::Day),
        Just(ViewMode::WorkWeek),
        Just(ViewMode::Week),
        (1usize..60).prop_map(ViewMode::Month),
    ]
}

fn range_of(anchor: NaiveDate, view: ViewMode) -> Vec<NaiveDate> {
    DateCursor::at(anchor, FixedClock(anchor)).current_range(view)
}

proptest! {
    /// Ranges have the expected length and are strictly ascending by one day
    #[test]
    fn prop_range_length_and_order(anchor in anchor_strategy(), view in view_strategy()) {
        let range = range_of(anchor, view);
        let expected = match view {
            ViewMode::Day => 1,
            ViewMode::WorkWeek => 5,
            ViewMode::Week => 7,
            ViewMode::Month(days) => days,
        };
        prop_assert_eq!(range.len(), expected);
        for pair in range.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    /// Weeks start on the Monday on or before the anchor
    #[test]
    fn prop_week_starts_monday(anchor in anchor_strategy()) {
        let range = range_of(anchor, ViewMode::Week);
        prop_assert_eq!(range[0].weekday(), Weekday::Mon);
        prop_assert!(range.contains(&anchor));
        if anchor.weekday() == Weekday::Sun {
            prop_assert_eq!(range[0], anchor - Duration::days(6));
        }
    }

    /// One bucket per range date, in range order, holding only that date
    #[test]
    fn prop_bin_buckets_match_range(occurrences in schedule_strategy(), days in 1usize..10) {
        let range = range_of(NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(), ViewMode::Month(days));
        let buckets = bin(&occurrences, &range);

        prop_assert_eq!(buckets.len(), range.len());
        for ((date, bucket), expected) in buckets.iter().zip(range.iter()) {
            prop_assert_eq!(date, expected);
            for occurrence in bucket {
                prop_assert_eq!(occurrence.date(), Some(*date));
            }
        }
    }

    /// Buckets are ordered by start time and stable on ties
    #[test]
    fn prop_bin_is_sorted_and_stable(occurrences in schedule_strategy()) {
        let range = range_of(NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(), ViewMode::Month(10));
        let position = |id: &str| occurrences.iter().position(|o| o.id == id).unwrap();

        for (_, bucket) in bin(&occurrences, &range) {
            for pair in bucket.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                prop_assert!(a.start_time() <= b.start_time());
                if a.start_time() == b.start_time() {
                    prop_assert!(position(&a.id) < position(&b.id));
                }
            }
        }
    }

    /// Heights never drop below the floor and layout is deterministic
    #[test]
    fn prop_layout_floor_and_determinism(
        occurrences in schedule_strategy(),
        px_per_hour in 1.0f32..240.0,
    ) {
        let config = LayoutConfig::with_scale(px_per_hour).unwrap();
        let refs: Vec<&ScheduleOccurrence> = occurrences.iter().collect();

        let first = layout(&refs, &config);
        let second = layout(&refs, &config);

        prop_assert_eq!(&first, &second);
        for (index, block) in first.iter().enumerate() {
            prop_assert!(block.height_px >= MIN_BLOCK_HEIGHT_PX);
            prop_assert_eq!(block.color_index, index % config.palette_size());
        }
    }
}

#[test]
fn test_zero_scale_is_rejected() {
    assert!(LayoutConfig::with_scale(0.0).is_err());
}
