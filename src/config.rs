use std::collections::HashMap;
use std::path::PathBuf;

pub const API_BASE: &str = "https://api.gongmoju.app/v1";

/// Logical endpoint name -> URL path template.
///
/// Templates use `{name}` placeholders filled from the query parameters
/// passed to [`ApiClient::get_json`](crate::client::ApiClient::get_json).
pub fn endpoints() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        // Month schedule: every IPO with a subscription, refund, or listing
        // date inside the given month
        ("schedule", "ipo/schedule/{year}/{month}"),
        // Upcoming IPOs from today forward
        ("upcoming", "ipo/upcoming"),
        // Single IPO by issuer code
        ("ipo", "ipo/{code_id}"),
        // Lead-underwriter ranking table
        ("broker_ranking", "brokers/ranking"),
        // API metadata (version, last publish date)
        ("meta", "meta"),
    ])
}

pub fn default_cache_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("ipocal-sdk")
    } else {
        PathBuf::from(".ipocal-sdk-cache")
    }
}
