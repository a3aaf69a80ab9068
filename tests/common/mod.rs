//! Shared test fixtures for the IPO calendar SDK integration tests.
//!
//! Provides sample IPO records plus `setup_offline_sdk()`, which builds an
//! SDK in offline mode over a temporary cache directory pre-seeded with
//! canned API responses, so query tests never touch the network.

#![allow(dead_code)]

use ipocal_sdk::models::IpoRecord;
use ipocal_sdk::IpoCalSdk;
use std::fs;
use std::time::Duration;

/// Small November 2025 schedule used across the engine tests.
pub fn sample_records() -> Vec<IpoRecord> {
    serde_json::from_value(sample_schedule_json()).unwrap()
}

/// The same schedule in wire form (camelCase, `data` envelope omitted).
pub fn sample_schedule_json() -> serde_json::Value {
    serde_json::json!([
        {
            "codeId": "A123456",
            "corpName": "더본코리아",
            "subscriptionDate": "2025.11.03~2025.11.04",
            "refundDate": "2025.11.06",
            "listingDate": "2025.11.27",
            "leadUnderwriter": "한국투자증권",
            "hopePriceLow": 23000,
            "hopePriceHigh": 28000,
            "offerPrice": 34000,
            "market": "KOSPI"
        },
        {
            "codeId": "B789012",
            "corpName": "에이펙스",
            "subscriptionDate": "2025.11.03~2025.11.05",
            "refundDate": "2025.11.07",
            "market": "KOSDAQ"
        },
        {
            "codeId": "C345678",
            "corpName": "노머스",
            "listingDate": "2025-11-20"
        }
    ])
}

/// Create an offline `IpoCalSdk` over a pre-seeded temporary cache.
///
/// Returns `(IpoCalSdk, tempfile::TempDir)`. The caller must keep the
/// `TempDir` alive for the duration of the test so the cache directory is
/// not deleted prematurely.
pub fn setup_offline_sdk() -> (IpoCalSdk, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();

    // -- month schedule (wrapped in the data envelope) ----------------------
    seed_response(
        tmp_dir.path(),
        "schedule_2025_11.json",
        &serde_json::json!({ "data": sample_schedule_json() }),
    );

    // -- upcoming (bare array, older deployment shape) ----------------------
    seed_response(tmp_dir.path(), "upcoming.json", &sample_schedule_json());

    // -- broker ranking -----------------------------------------------------
    seed_response(
        tmp_dir.path(),
        "broker_ranking.json",
        &serde_json::json!({ "data": [
            { "rank": 2, "brokerName": "미래에셋증권", "ipoCount": 18, "avgFirstDayReturn": 42.1 },
            { "rank": 1, "brokerName": "한국투자증권", "ipoCount": 24, "avgFirstDayReturn": 57.3 },
        ] }),
    );

    // -- meta ---------------------------------------------------------------
    seed_response(
        tmp_dir.path(),
        "meta.json",
        &serde_json::json!({ "data": { "version": "1.4.0", "updatedAt": "2025-11-01" } }),
    );

    let sdk = IpoCalSdk::builder()
        .cache_dir(tmp_dir.path())
        .offline(true)
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    (sdk, tmp_dir)
}

/// Write one canned response file into a cache directory.
pub fn seed_response(dir: &std::path::Path, file_name: &str, value: &serde_json::Value) {
    fs::write(dir.join(file_name), serde_json::to_vec(value).unwrap()).unwrap();
}
