//! Event kinds and extraction of calendar events from IPO records.

use crate::calendar::color::color_for_id;
use crate::models::IpoRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// EventKind
// ---------------------------------------------------------------------------

/// The three date-valued milestones of an IPO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Subscription,
    Refund,
    Listing,
}

impl EventKind {
    /// All kinds, in the order events are emitted per record.
    pub const ALL: [EventKind; 3] = [
        EventKind::Subscription,
        EventKind::Refund,
        EventKind::Listing,
    ];

    /// Stable string id, used in composite event ids.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Subscription => "subscription",
            EventKind::Refund => "refund",
            EventKind::Listing => "listing",
        }
    }

    /// Korean display label prefixed to event titles.
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Subscription => "청약",
            EventKind::Refund => "환불",
            EventKind::Listing => "상장",
        }
    }
}

// ---------------------------------------------------------------------------
// CalendarEvent
// ---------------------------------------------------------------------------

/// One displayable event, derived per (record, kind) pair.
///
/// Dates are inclusive and normalized to `YYYY.MM.DD`. `code_id` is
/// carried as a first-class field so downstream grouping never has to
/// re-derive it from the composite `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    /// Composite id: `"{code_id}-{kind}"`.
    pub id: String,
    /// Issuer code of the originating record.
    pub code_id: String,
    /// Kind label plus company name (e.g. "청약 더본코리아").
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    /// Display color, a pure function of `code_id`.
    pub color: String,
    pub kind: EventKind,
}

/// Convert IPO records plus a kind filter into a flat list of events.
///
/// An empty `selected` set means "show all kinds" (widen-on-empty), not
/// "show none". Per record, kinds are visited in [`EventKind::ALL`]
/// order; record order is preserved. That combined order is what makes
/// downstream first-fit row packing reproducible.
///
/// A `start~end` range value splits into start/end dates; a single date
/// is used for both. Empty or absent date fields emit nothing.
pub fn extract_events(records: &[IpoRecord], selected: &HashSet<EventKind>) -> Vec<CalendarEvent> {
    let mut events = Vec::new();

    for record in records {
        for kind in EventKind::ALL {
            if !selected.is_empty() && !selected.contains(&kind) {
                continue;
            }
            let raw = match kind {
                EventKind::Subscription => record.subscription_date.as_deref(),
                EventKind::Refund => record.refund_date.as_deref(),
                EventKind::Listing => record.listing_date.as_deref(),
            };
            let raw = match raw {
                Some(v) if !v.trim().is_empty() => v.trim(),
                _ => continue,
            };

            let (start, end) = match raw.split_once('~') {
                Some((s, e)) => (normalize_date(s), normalize_date(e)),
                None => {
                    let d = normalize_date(raw);
                    (d.clone(), d)
                }
            };

            events.push(CalendarEvent {
                id: format!("{}-{}", record.code_id, kind.as_str()),
                code_id: record.code_id.clone(),
                title: format!("{} {}", kind.label(), record.corp_name),
                start_date: start,
                end_date: end,
                color: color_for_id(&record.code_id),
                kind,
            });
        }
    }

    events
}

/// Normalize a date string to dot-separated `YYYY.MM.DD`.
///
/// Malformed input passes through unchanged; it will simply never match
/// any grid slot downstream (silent-skip, no error).
fn normalize_date(s: &str) -> String {
    s.trim().replace('-', ".")
}
