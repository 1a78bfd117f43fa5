//! Configuration types for the Feedbin SDK.

use std::fmt;
use std::time::Duration;
use url::Url;

/// Production endpoint of the Feedbin v2 API.
pub const DEFAULT_BASE_URL: &str = "https://api.feedbin.com/v2/";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Account credentials sent as HTTP Basic auth on every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub(crate) fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Configuration for the Feedbin client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API. Always ends with `/` so endpoint paths join under it.
    pub base_url: Url,
    /// Account credentials.
    pub credentials: Credentials,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration against the given base URL.
    pub fn new(base_url: Url, credentials: Credentials) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            credentials,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// `Url::join` drops the last path segment unless the base ends with `/`.
pub(crate) fn normalize_base_url(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
