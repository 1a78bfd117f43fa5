//! Main client for the Feedbin SDK.

use crate::api::*;
use crate::config::{ClientConfig, Credentials, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::error::{FeedbinError, FeedbinResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main client for interacting with the Feedbin API.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct FeedbinClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl FeedbinClient {
    /// Create a new client builder.
    pub fn builder() -> FeedbinClientBuilder {
        FeedbinClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> FeedbinResult<Self> {
        if !config.credentials.is_complete() {
            return Err(FeedbinError::Config(
                "email and password must both be non-empty".to_string(),
            ));
        }

        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Get the subscriptions API.
    pub fn subscriptions(&self) -> SubscriptionsApi<'_> {
        SubscriptionsApi::new(self)
    }

    /// Get the feeds API.
    pub fn feeds(&self) -> FeedsApi<'_> {
        FeedsApi::new(self)
    }

    /// Get the entries API.
    pub fn entries(&self) -> EntriesApi<'_> {
        EntriesApi::new(self)
    }

    /// Get the unread entries API.
    pub fn unread_entries(&self) -> UnreadEntriesApi<'_> {
        UnreadEntriesApi::new(self)
    }

    /// Get the starred entries API.
    pub fn starred_entries(&self) -> StarredEntriesApi<'_> {
        StarredEntriesApi::new(self)
    }

    /// Get the tags API.
    pub fn tags(&self) -> TagsApi<'_> {
        TagsApi::new(self)
    }

    /// Get the taggings API.
    pub fn taggings(&self) -> TaggingsApi<'_> {
        TaggingsApi::new(self)
    }
}

/// Builder for creating a FeedbinClient.
pub struct FeedbinClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    timeout: Duration,
}

impl FeedbinClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            credentials: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the API base URL (defaults to the production v2 endpoint).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the account credentials.
    pub fn credentials(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::new(email, password));
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> FeedbinResult<FeedbinClient> {
        let credentials = self
            .credentials
            .ok_or_else(|| FeedbinError::Config("credentials are required".to_string()))?;

        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let mut config = ClientConfig::new(base_url, credentials);
        config.timeout = self.timeout;

        FeedbinClient::from_config(config)
    }
}

impl Default for FeedbinClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
