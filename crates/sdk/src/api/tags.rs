//! Tags and taggings API endpoints.

use crate::client::FeedbinClient;
use crate::error::FeedbinResult;
use crate::models::{Tag, Tagging};

/// Tags API.
pub struct TagsApi<'a> {
    client: &'a FeedbinClient,
}

impl<'a> TagsApi<'a> {
    pub(crate) fn new(client: &'a FeedbinClient) -> Self {
        Self { client }
    }

    /// List all tags.
    pub async fn list(&self) -> FeedbinResult<Vec<Tag>> {
        self.client.http.get("tags.json").await
    }
}

/// Taggings API: which feeds carry which tag.
pub struct TaggingsApi<'a> {
    client: &'a FeedbinClient,
}

impl<'a> TaggingsApi<'a> {
    pub(crate) fn new(client: &'a FeedbinClient) -> Self {
        Self { client }
    }

    /// List all taggings.
    pub async fn list(&self) -> FeedbinResult<Vec<Tagging>> {
        self.client.http.get("taggings.json").await
    }
}
