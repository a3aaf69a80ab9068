use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// BrokerRank
// ---------------------------------------------------------------------------

/// One row of the lead-underwriter ranking table.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BrokerRank {
    pub rank: i64,
    /// Broker name (e.g. "한국투자증권").
    pub broker_name: String,
    /// Number of IPOs lead-managed in the ranking window.
    pub ipo_count: i64,
    /// Average first-day return across those IPOs, in percent.
    #[serde(default)]
    pub avg_first_day_return: Option<f64>,
}

// ---------------------------------------------------------------------------
// Meta
// ---------------------------------------------------------------------------

/// API metadata: schema version and last publish date.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub version: String,
    /// Date the schedule data was last republished, `YYYY-MM-DD`.
    pub updated_at: String,
}
