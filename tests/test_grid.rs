//! Unit tests for the work-week grid generator.

use chrono::{Datelike, NaiveDate, Weekday};
use ipocal_sdk::{days_in_month, generate_weeks, WEEK_COLS};

// ---------------------------------------------------------------------------
// Structure
// ---------------------------------------------------------------------------

#[test]
fn every_week_has_exactly_five_slots() {
    for month in 1..=12 {
        for week in generate_weeks(2025, month) {
            assert_eq!(week.len(), WEEK_COLS);
            assert!(week.iter().all(|slot| slot.is_some()));
        }
    }
}

#[test]
fn current_month_days_are_the_weekdays_in_order() {
    // Grid completeness: the isCurrentMonth slots, concatenated, are
    // exactly the month's non-weekend day numbers with no gaps or repeats.
    for (year, month) in [(2025, 1), (2025, 6), (2025, 11), (2024, 2), (2025, 12)] {
        let expected: Vec<u32> = (1..=days_in_month(year, month))
            .filter(|&d| {
                let date = NaiveDate::from_ymd_opt(year, month, d).unwrap();
                !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
            })
            .collect();

        let got: Vec<u32> = generate_weeks(year, month)
            .iter()
            .flatten()
            .flatten()
            .filter(|d| d.is_current_month)
            .map(|d| d.day)
            .collect();

        assert_eq!(got, expected, "mismatch for {}-{:02}", year, month);
    }
}

#[test]
fn no_slot_is_a_weekend_date() {
    for (year, month) in [(2025, 3), (2025, 11), (2024, 2)] {
        for week in generate_weeks(year, month) {
            for day in week.iter().flatten().filter(|d| d.is_current_month) {
                let date = NaiveDate::from_ymd_opt(year, month, day.day).unwrap();
                assert!(!matches!(date.weekday(), Weekday::Sat | Weekday::Sun));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Month boundaries
// ---------------------------------------------------------------------------

#[test]
fn first_on_wednesday_pads_with_previous_month() {
    // Jan 1 2025 is a Wednesday; the first week is Dec 30, Dec 31, Jan 1-3.
    let weeks = generate_weeks(2025, 1);
    let first: Vec<(u32, bool)> = weeks[0]
        .iter()
        .map(|d| d.map(|d| (d.day, d.is_current_month)).unwrap())
        .collect();
    assert_eq!(
        first,
        vec![(30, false), (31, false), (1, true), (2, true), (3, true)]
    );
}

#[test]
fn first_on_saturday_yields_a_leading_foreign_week() {
    // Nov 1 2025 is a Saturday: the rewind lands on Mon Oct 27, so the
    // first week is entirely October. Nov's first weekday is Mon the 3rd.
    let weeks = generate_weeks(2025, 11);
    assert_eq!(weeks.len(), 5);
    assert!(weeks[0].iter().flatten().all(|d| !d.is_current_month));
    assert_eq!(weeks[1][0].unwrap().day, 3);
    assert!(weeks[1][0].unwrap().is_current_month);
}

#[test]
fn first_on_sunday_rewinds_six_days() {
    // Jun 1 2025 is a Sunday: the first week is May 26-30, all foreign.
    let weeks = generate_weeks(2025, 6);
    let first: Vec<u32> = weeks[0].iter().map(|d| d.unwrap().day).collect();
    assert_eq!(first, vec![26, 27, 28, 29, 30]);
    assert!(weeks[0].iter().flatten().all(|d| !d.is_current_month));
}

#[test]
fn final_week_is_padded_with_next_month() {
    // Jun 2025 ends Mon Jun 30; the last week is Jun 30 + Jul 1-4.
    let weeks = generate_weeks(2025, 6);
    let last = weeks.last().unwrap();
    let days: Vec<(u32, bool)> = last
        .iter()
        .map(|d| d.map(|d| (d.day, d.is_current_month)).unwrap())
        .collect();
    assert_eq!(
        days,
        vec![(30, true), (1, false), (2, false), (3, false), (4, false)]
    );
}

#[test]
fn month_ending_on_weekend_does_not_add_a_trailing_week() {
    // Nov 2025 ends Sun Nov 30; the last weekday is Fri the 28th and no
    // all-December week is emitted after it.
    let weeks = generate_weeks(2025, 11);
    let last = weeks.last().unwrap();
    assert_eq!(last[4].unwrap().day, 28);
    assert!(last[4].unwrap().is_current_month);
}

// ---------------------------------------------------------------------------
// days_in_month
// ---------------------------------------------------------------------------

#[test]
fn days_in_month_handles_leap_years() {
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2025, 2), 28);
    assert_eq!(days_in_month(2000, 2), 29);
    assert_eq!(days_in_month(1900, 2), 28);
    assert_eq!(days_in_month(2025, 12), 31);
    assert_eq!(days_in_month(2025, 4), 30);
}
