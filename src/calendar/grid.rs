//! Work-week calendar grid generation.
//!
//! The grid models Monday-Friday only: weekends are omitted from the data
//! structure itself rather than flagged and hidden at render time, which
//! keeps column-index math trivial for the segmentation layer.

use chrono::{Datelike, NaiveDate, Weekday};

/// Number of weekday columns in a grid week (Monday-Friday).
pub const WEEK_COLS: usize = 5;

/// One day slot in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    /// Day of month, 1..=31.
    pub day: u32,
    /// True iff this slot's date falls within the displayed month.
    pub is_current_month: bool,
}

/// One grid week: exactly 5 slots, Monday through Friday.
pub type Week = [Option<CalendarDay>; WEEK_COLS];

/// Number of days in the given Gregorian month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (next, NaiveDate::from_ymd_opt(year, month, 1)) {
        (Some(next), Some(first)) => next.signed_duration_since(first).num_days() as u32,
        _ => 0,
    }
}

/// Produce the sequence of work weeks covering `(year, month)`, oldest first.
///
/// The first week starts on the Monday of the week containing the 1st
/// (a 1st falling on Saturday or Sunday rewinds past it to that Monday).
/// The walk advances one calendar day at a time, skipping Saturday and
/// Sunday, until it has passed the last day of the target month; the
/// final week is padded to 5 slots with next-month days. Boundary slots
/// from adjacent months carry `is_current_month: false`.
///
/// Out-of-range month values are the caller's responsibility; an invalid
/// `(year, month)` yields an empty grid.
pub fn generate_weeks(year: i32, month: u32) -> Vec<Week> {
    debug_assert!((1..=12).contains(&month), "month must be 1-12");

    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return Vec::new(),
    };
    let last = first + chrono::Duration::days(days_in_month(year, month) as i64 - 1);

    // Monday of the week containing the 1st. num_days_from_monday gives
    // the rewind distance directly: Sat -> 5, Sun -> 6.
    let rewind = first.weekday().num_days_from_monday() as i64;
    let mut cursor = first - chrono::Duration::days(rewind);

    let mut weeks = Vec::new();

    loop {
        let mut week: Week = [None; WEEK_COLS];
        for slot in week.iter_mut() {
            *slot = Some(CalendarDay {
                day: cursor.day(),
                is_current_month: cursor.year() == year && cursor.month() == month,
            });
            cursor = next_weekday(cursor);
        }
        weeks.push(week);
        // After filling a week the cursor sits on the following Monday.
        if cursor > last {
            break;
        }
    }

    weeks
}

/// The next non-weekend date after `date`.
fn next_weekday(date: NaiveDate) -> NaiveDate {
    let mut next = date.succ_opt().unwrap_or(date);
    while matches!(next.weekday(), Weekday::Sat | Weekday::Sun) {
        next = next.succ_opt().unwrap_or(next);
    }
    next
}
