//! Feeds API endpoints.

use crate::client::FeedbinClient;
use crate::error::FeedbinResult;
use crate::models::Feed;

/// Feeds API. Feeds are read-only from a client's point of view.
pub struct FeedsApi<'a> {
    client: &'a FeedbinClient,
}

impl<'a> FeedsApi<'a> {
    pub(crate) fn new(client: &'a FeedbinClient) -> Self {
        Self { client }
    }

    /// Get a specific feed by ID.
    pub async fn get(&self, feed_id: u64) -> FeedbinResult<Feed> {
        self.client
            .http
            .get(&format!("feeds/{}.json", feed_id))
            .await
            .map_err(|e| e.not_found_as(|| format!("feed {}", feed_id)))
    }
}
