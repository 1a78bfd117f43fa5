//! Starred entries API endpoints.

use crate::api::check_bulk_ids;
use crate::client::FeedbinClient;
use crate::error::FeedbinResult;
use serde::Serialize;
use tracing::debug;

const PATH: &str = "starred_entries.json";

#[derive(Debug, Serialize)]
struct StarredEntriesBody<'a> {
    starred_entries: &'a [u64],
}

/// Starred entries API.
pub struct StarredEntriesApi<'a> {
    client: &'a FeedbinClient,
}

impl<'a> StarredEntriesApi<'a> {
    pub(crate) fn new(client: &'a FeedbinClient) -> Self {
        Self { client }
    }

    /// Ids of every starred entry.
    pub async fn ids(&self) -> FeedbinResult<Vec<u64>> {
        self.client.http.get(PATH).await
    }

    /// Star entries. Returns the ids Feedbin acknowledged, empty on 204.
    pub async fn star(&self, entry_ids: &[u64]) -> FeedbinResult<Vec<u64>> {
        check_bulk_ids(entry_ids)?;
        debug!(count = entry_ids.len(), "Starring entries");

        self.client
            .http
            .post(PATH, &StarredEntriesBody { starred_entries: entry_ids })
            .await
    }

    /// Unstar entries. Returns the ids Feedbin acknowledged, empty on 204.
    pub async fn unstar(&self, entry_ids: &[u64]) -> FeedbinResult<Vec<u64>> {
        check_bulk_ids(entry_ids)?;
        debug!(count = entry_ids.len(), "Unstarring entries");

        self.client
            .http
            .delete_with_body(PATH, &StarredEntriesBody { starred_entries: entry_ids })
            .await
    }
}
