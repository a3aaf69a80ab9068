//! Unit tests for event extraction from IPO records.

mod common;

use ipocal_sdk::models::IpoRecord;
use ipocal_sdk::{color_for_id, extract_events, EventKind};
use std::collections::HashSet;

fn record(code: &str, name: &str) -> IpoRecord {
    IpoRecord {
        code_id: code.to_string(),
        corp_name: name.to_string(),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Range splitting and normalization
// ---------------------------------------------------------------------------

#[test]
fn range_value_splits_into_start_and_end() {
    let mut rec = record("A1", "테스트");
    rec.subscription_date = Some("2025.01.13~2025.01.14".to_string());

    let events = extract_events(&[rec], &HashSet::new());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].start_date, "2025.01.13");
    assert_eq!(events[0].end_date, "2025.01.14");
    assert_eq!(events[0].kind, EventKind::Subscription);
}

#[test]
fn single_date_uses_same_start_and_end() {
    let mut rec = record("A1", "테스트");
    rec.listing_date = Some("2025.11.27".to_string());

    let events = extract_events(&[rec], &HashSet::new());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].start_date, "2025.11.27");
    assert_eq!(events[0].end_date, "2025.11.27");
}

#[test]
fn dashed_dates_are_normalized_to_dots() {
    let mut rec = record("A1", "테스트");
    rec.refund_date = Some("2025-11-06".to_string());
    rec.subscription_date = Some("2025-11-03~2025-11-04".to_string());

    let events = extract_events(&[rec], &HashSet::new());
    assert_eq!(events[0].start_date, "2025.11.03");
    assert_eq!(events[0].end_date, "2025.11.04");
    assert_eq!(events[1].start_date, "2025.11.06");
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[test]
fn empty_selection_widens_to_all_kinds() {
    let records = common::sample_records();
    let all: HashSet<EventKind> = EventKind::ALL.into_iter().collect();

    let widened = extract_events(&records, &HashSet::new());
    let explicit = extract_events(&records, &all);
    assert_eq!(widened, explicit);
    assert!(!widened.is_empty());
}

#[test]
fn selection_filters_by_kind() {
    let records = common::sample_records();
    let only_listing: HashSet<EventKind> = [EventKind::Listing].into_iter().collect();

    let events = extract_events(&records, &only_listing);
    assert!(events.iter().all(|e| e.kind == EventKind::Listing));
    // Two of the three sample records carry a listing date
    assert_eq!(events.len(), 2);
}

#[test]
fn empty_or_missing_fields_emit_nothing() {
    let mut rec = record("A1", "테스트");
    rec.subscription_date = Some("   ".to_string());

    let events = extract_events(&[rec], &HashSet::new());
    assert!(events.is_empty());

    let events = extract_events(&[], &HashSet::new());
    assert!(events.is_empty());
}

// ---------------------------------------------------------------------------
// Ordering and identity
// ---------------------------------------------------------------------------

#[test]
fn events_preserve_record_then_kind_order() {
    let records = common::sample_records();
    let events = extract_events(&records, &HashSet::new());

    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "A123456-subscription",
            "A123456-refund",
            "A123456-listing",
            "B789012-subscription",
            "B789012-refund",
            "C345678-listing",
        ]
    );
}

#[test]
fn code_id_is_carried_first_class() {
    // A hyphenated issuer code must survive grouping; the composite id is
    // never split to recover it.
    let mut rec = record("KR-001", "하이픈");
    rec.listing_date = Some("2025.11.20".to_string());

    let events = extract_events(&[rec], &HashSet::new());
    assert_eq!(events[0].id, "KR-001-listing");
    assert_eq!(events[0].code_id, "KR-001");
}

#[test]
fn title_is_kind_label_plus_company_name() {
    let records = common::sample_records();
    let events = extract_events(&records, &HashSet::new());
    assert_eq!(events[0].title, "청약 더본코리아");
    assert_eq!(events[1].title, "환불 더본코리아");
    assert_eq!(events[2].title, "상장 더본코리아");
}

#[test]
fn event_color_matches_color_for_id() {
    let records = common::sample_records();
    for event in extract_events(&records, &HashSet::new()) {
        assert_eq!(event.color, color_for_id(&event.code_id));
    }
}
