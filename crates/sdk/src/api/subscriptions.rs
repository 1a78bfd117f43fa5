//! Subscriptions API endpoints.

use crate::client::FeedbinClient;
use crate::error::FeedbinResult;
use crate::models::Subscription;

/// Subscriptions API for listing the account's feeds.
pub struct SubscriptionsApi<'a> {
    client: &'a FeedbinClient,
}

impl<'a> SubscriptionsApi<'a> {
    pub(crate) fn new(client: &'a FeedbinClient) -> Self {
        Self { client }
    }

    /// List all subscriptions.
    pub async fn list(&self) -> FeedbinResult<Vec<Subscription>> {
        self.client.http.get("subscriptions.json").await
    }
}
