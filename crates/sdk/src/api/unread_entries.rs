//! Unread entries API endpoints.

use crate::api::check_bulk_ids;
use crate::client::FeedbinClient;
use crate::error::FeedbinResult;
use serde::Serialize;
use tracing::debug;

const PATH: &str = "unread_entries.json";

#[derive(Debug, Serialize)]
struct UnreadEntriesBody<'a> {
    unread_entries: &'a [u64],
}

/// Unread entries API.
///
/// Feedbin tracks unread state as a set of entry ids: adding an id marks the
/// entry unread, removing it marks it read.
pub struct UnreadEntriesApi<'a> {
    client: &'a FeedbinClient,
}

impl<'a> UnreadEntriesApi<'a> {
    pub(crate) fn new(client: &'a FeedbinClient) -> Self {
        Self { client }
    }

    /// Ids of every unread entry.
    pub async fn ids(&self) -> FeedbinResult<Vec<u64>> {
        self.client.http.get(PATH).await
    }

    /// Mark entries as read. Returns the ids Feedbin acknowledged, empty on 204.
    pub async fn mark_read(&self, entry_ids: &[u64]) -> FeedbinResult<Vec<u64>> {
        check_bulk_ids(entry_ids)?;
        debug!(count = entry_ids.len(), "Marking entries read");

        self.client
            .http
            .delete_with_body(PATH, &UnreadEntriesBody { unread_entries: entry_ids })
            .await
    }

    /// Mark entries as unread. Returns the ids Feedbin acknowledged, empty on 204.
    pub async fn mark_unread(&self, entry_ids: &[u64]) -> FeedbinResult<Vec<u64>> {
        check_bulk_ids(entry_ids)?;
        debug!(count = entry_ids.len(), "Marking entries unread");

        self.client
            .http
            .post(PATH, &UnreadEntriesBody { unread_entries: entry_ids })
            .await
    }
}
