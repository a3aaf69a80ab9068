//! Lead-underwriter ranking queries.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::BrokerRank;

/// Query interface for the broker ranking table.
pub struct BrokerQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> BrokerQuery<'a> {
    /// Create a new `BrokerQuery` bound to the given client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// The full ranking table, best rank first.
    pub fn rankings(&self) -> Result<Vec<BrokerRank>> {
        let mut rows: Vec<BrokerRank> = self.client.get_into("broker_ranking", &[])?;
        rows.sort_by_key(|r| r.rank);
        Ok(rows)
    }
}
