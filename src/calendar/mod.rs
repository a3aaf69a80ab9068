//! Calendar event layout engine.
//!
//! Pure, synchronous computation: no I/O, no shared state. Given IPO
//! records and a displayed month, produces a 5-column work-week grid and
//! packs each IPO's date-range events into non-overlapping display rows
//! per week. Everything is recomputed from scratch per call; callers are
//! expected to memoize on their own inputs.

pub mod color;
pub mod event;
pub mod grid;
pub mod layout;

pub use color::{color_for_id, text_color_for};
pub use event::{extract_events, CalendarEvent, EventKind};
pub use grid::{days_in_month, generate_weeks, CalendarDay, Week, WEEK_COLS};
pub use layout::{segment_week, week_height, EventSegment};
