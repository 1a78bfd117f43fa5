// Server configuration loaded from the environment

use feedbin_sdk::{ClientConfig, Credentials, FeedbinClient, FeedbinResult, DEFAULT_BASE_URL};
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const ENV_EMAIL: &str = "FEEDBIN_EMAIL";
pub const ENV_PASSWORD: &str = "FEEDBIN_PASSWORD";
pub const ENV_BASE_URL: &str = "FEEDBIN_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "FEEDBIN_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Settings the server needs before it can accept a session
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub credentials: Credentials,
    pub base_url: Url,
    pub timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the config from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let email = get(ENV_EMAIL).ok_or(ConfigError::Missing(ENV_EMAIL))?;
        let password = get(ENV_PASSWORD).ok_or(ConfigError::Missing(ENV_PASSWORD))?;

        let base_url = match get(ENV_BASE_URL) {
            Some(raw) => raw.trim().to_string(),
            None => DEFAULT_BASE_URL.to_string(),
        };
        let base_url = Url::parse(&base_url).map_err(|e| ConfigError::Invalid {
            var: ENV_BASE_URL,
            reason: e.to_string(),
        })?;

        let timeout = match get(ENV_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    var: ENV_TIMEOUT_SECS,
                    reason: format!("'{}' is not a whole number of seconds", raw),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        var: ENV_TIMEOUT_SECS,
                        reason: "must be greater than zero".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => feedbin_sdk::config::DEFAULT_TIMEOUT,
        };

        Ok(Self {
            credentials: Credentials::new(email, password),
            base_url,
            timeout,
        })
    }

    /// Build the Feedbin client this config describes.
    pub fn client(&self) -> FeedbinResult<FeedbinClient> {
        let mut config = ClientConfig::new(self.base_url.clone(), self.credentials.clone());
        config.timeout = self.timeout;
        FeedbinClient::from_config(config)
    }
}
