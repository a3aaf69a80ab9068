//! IPO schedule queries against the cached REST API.

use crate::client::ApiClient;
use crate::error::{IpoCalError, Result};
use crate::models::IpoRecord;

// ---------------------------------------------------------------------------
// ScheduleQuery
// ---------------------------------------------------------------------------

/// Query interface for IPO schedules.
pub struct ScheduleQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> ScheduleQuery<'a> {
    /// Create a new `ScheduleQuery` bound to the given client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    // -- Month schedule ----------------------------------------------------

    /// Every IPO with a subscription, refund, or listing date inside the
    /// given month.
    ///
    /// The records feed directly into
    /// [`extract_events`](crate::calendar::extract_events); their order is
    /// preserved end to end, which keeps row packing reproducible.
    pub fn month(&self, year: i32, month: u32) -> Result<Vec<IpoRecord>> {
        if !(1..=12).contains(&month) {
            return Err(IpoCalError::InvalidArgument(format!(
                "month must be 1-12, got {}",
                month
            )));
        }
        self.client.get_into(
            "schedule",
            &[
                ("year", year.to_string()),
                ("month", format!("{:02}", month)),
            ],
        )
    }

    // -- Upcoming ----------------------------------------------------------

    /// Upcoming IPOs from today forward, soonest first.
    pub fn upcoming(&self) -> Result<Vec<IpoRecord>> {
        self.client.get_into("upcoming", &[])
    }

    // -- Single record lookup ----------------------------------------------

    /// Retrieve a single IPO by issuer code.
    ///
    /// Returns `Ok(None)` when the API reports the code as unknown (HTTP
    /// 404); other failures propagate.
    pub fn get_by_code(&self, code_id: &str) -> Result<Option<IpoRecord>> {
        let result: Result<IpoRecord> =
            self.client.get_into("ipo", &[("code_id", code_id.to_string())]);
        match result {
            Ok(record) => Ok(Some(record)),
            Err(IpoCalError::Http(e))
                if e.status() == Some(reqwest::StatusCode::NOT_FOUND) =>
            {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
