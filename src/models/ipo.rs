use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// IpoRecord — one scheduled IPO as returned by the schedule API
// ---------------------------------------------------------------------------

/// A scheduled IPO with its subscription, refund, and listing dates.
///
/// Each date field holds either a single date (`YYYY.MM.DD` or
/// `YYYY-MM-DD`) or a closed range `start~end` in the same format. Empty
/// or absent fields mean the date is not yet announced.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IpoRecord {
    /// Issuer code, the primary key for a listing.
    pub code_id: String,
    /// Company name as displayed (e.g. "삼성에스디에스").
    pub corp_name: String,
    #[serde(default)]
    pub subscription_date: Option<String>,
    #[serde(default)]
    pub refund_date: Option<String>,
    #[serde(default)]
    pub listing_date: Option<String>,
    /// Lead underwriter(s), comma-separated.
    #[serde(default)]
    pub lead_underwriter: Option<String>,
    /// Low end of the hoped price band, in KRW.
    #[serde(default)]
    pub hope_price_low: Option<i64>,
    /// High end of the hoped price band, in KRW.
    #[serde(default)]
    pub hope_price_high: Option<i64>,
    /// Final offer price once confirmed, in KRW.
    #[serde(default)]
    pub offer_price: Option<i64>,
    /// Institutional demand-forecast competition rate (e.g. "1203.4:1").
    #[serde(default)]
    pub competition_rate: Option<String>,
    /// Share of allotted shares under a lockup commitment, in percent.
    #[serde(default)]
    pub lockup_ratio: Option<f64>,
    /// Target market ("KOSPI", "KOSDAQ", "KONEX").
    #[serde(default)]
    pub market: Option<String>,
}
