//! Week segmentation and first-fit row assignment.
//!
//! For each event, the contiguous runs of weekday columns it covers in a
//! given week become segments; segments are then packed into vertical
//! rows so that nothing in the same row overlaps, with all of a
//! company's segments pinned to one row per week.

use crate::calendar::event::{CalendarEvent, EventKind};
use crate::calendar::grid::Week;

/// Vertical space of a week row before any event rows are added.
pub const BASE_WEEK_HEIGHT: f32 = 60.0;
/// Vertical space consumed by each event row.
pub const ROW_SPACING: f32 = 22.0;
/// Minimum height of a week row regardless of content.
pub const MIN_WEEK_HEIGHT: f32 = 80.0;

// ---------------------------------------------------------------------------
// EventSegment
// ---------------------------------------------------------------------------

/// A contiguous run of weekday columns covered by one event in one week.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSegment {
    /// Composite id of the parent event.
    pub event_id: String,
    /// Issuer code, the row-grouping key.
    pub code_id: String,
    pub title: String,
    pub color: String,
    pub kind: EventKind,
    /// First covered column, 0..=4 (Monday = 0).
    pub start_col: usize,
    /// Count of contiguous covered columns, >= 1.
    pub span: usize,
    /// Assigned vertical row, 0-based.
    pub row: usize,
}

impl EventSegment {
    /// Last covered column (inclusive).
    fn end_col(&self) -> usize {
        self.start_col + self.span - 1
    }

    /// Inclusive-range column overlap test.
    fn overlaps(&self, other: &EventSegment) -> bool {
        !(self.end_col() < other.start_col || self.start_col > other.end_col())
    }
}

// ---------------------------------------------------------------------------
// Segmentation
// ---------------------------------------------------------------------------

/// Compute the placed segments for one week.
///
/// A slot matches an event iff it belongs to the displayed month and its
/// `YYYY.MM.DD` date falls within the event's inclusive range. A
/// non-matching slot terminates the current run; matching may resume
/// later in the same week, so one event can yield several segments
/// (e.g. a range interrupted by other-month padding). Events with no
/// matching slot yield nothing.
///
/// Rows are assigned first-fit per company: all segments sharing a
/// `code_id` are placed atomically on the smallest row where none of
/// them collides with an already-placed segment. Companies are processed
/// in first-seen order, so input order is the reproducible tie-break.
pub fn segment_week(
    week: &Week,
    events: &[CalendarEvent],
    year: i32,
    month: u32,
) -> Vec<EventSegment> {
    // 1. Per-event column runs
    let mut groups: Vec<(String, Vec<EventSegment>)> = Vec::new();

    for event in events {
        let mut run_start: Option<usize> = None;

        for col in 0..=week.len() {
            let matches = col < week.len() && slot_matches(week[col].as_ref(), event, year, month);

            if matches {
                run_start.get_or_insert(col);
                continue;
            }
            if let Some(start) = run_start.take() {
                let segment = EventSegment {
                    event_id: event.id.clone(),
                    code_id: event.code_id.clone(),
                    title: event.title.clone(),
                    color: event.color.clone(),
                    kind: event.kind,
                    start_col: start,
                    span: col - start,
                    row: 0,
                };
                push_grouped(&mut groups, segment);
            }
        }
    }

    // 2. First-fit row assignment, atomic per company group
    let mut placed: Vec<EventSegment> = Vec::new();

    for (_, mut segments) in groups {
        let mut row = 0;
        while segments.iter().any(|s| {
            placed
                .iter()
                .any(|p| p.row == row && s.overlaps(p))
        }) {
            row += 1;
        }
        for segment in &mut segments {
            segment.row = row;
        }
        placed.append(&mut segments);
    }

    placed
}

/// Display height of a week given its placed segments.
///
/// Base height plus one row-spacing per occupied row, floored at the
/// minimum week height.
pub fn week_height(segments: &[EventSegment]) -> f32 {
    let rows = segments.iter().map(|s| s.row + 1).max().unwrap_or(0);
    (BASE_WEEK_HEIGHT + rows as f32 * ROW_SPACING).max(MIN_WEEK_HEIGHT)
}

/// Whether a slot's formatted date falls inside the event's range.
///
/// Dates compare lexicographically; both sides are zero-padded
/// `YYYY.MM.DD`, so string order is date order. Malformed event dates
/// simply never match.
fn slot_matches(
    slot: Option<&crate::calendar::grid::CalendarDay>,
    event: &CalendarEvent,
    year: i32,
    month: u32,
) -> bool {
    let day = match slot {
        Some(d) if d.is_current_month => d,
        _ => return false,
    };
    let date = format!("{:04}.{:02}.{:02}", year, month, day.day);
    event.start_date.as_str() <= date.as_str() && date.as_str() <= event.end_date.as_str()
}

/// Append a segment to its company's group, creating the group at the
/// back on first sight (preserves first-seen company order).
fn push_grouped(groups: &mut Vec<(String, Vec<EventSegment>)>, segment: EventSegment) {
    match groups.iter_mut().find(|(code, _)| *code == segment.code_id) {
        Some((_, segments)) => segments.push(segment),
        None => groups.push((segment.code_id.clone(), vec![segment])),
    }
}
