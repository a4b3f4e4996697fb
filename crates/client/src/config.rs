//! Client runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into [`crate::PatientorClient`].
//! The `*_from_env_value` helpers take the raw variable value so that callers decide where it
//! comes from and tests never touch the process environment.

use crate::{ClientError, ClientResult};
use reqwest::Url;
use std::time::Duration;

/// Base URL of the REST API when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";

/// Request timeout when nothing is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: Url,
    timeout: Duration,
}

impl ClientConfig {
    /// Create a new `ClientConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] if `base_url` is not an absolute `http`/`https`
    /// URL or `timeout` is zero.
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let base_url = Url::parse(base_url.trim()).map_err(|e| {
            ClientError::InvalidConfig(format!("invalid API base URL {base_url:?}: {e}"))
        })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidConfig(format!(
                "API base URL must use http or https, got {}",
                base_url.scheme()
            )));
        }
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidConfig(
                "API base URL cannot be used as a base".into(),
            ));
        }
        if timeout.is_zero() {
            return Err(ClientError::InvalidConfig(
                "HTTP timeout must be greater than zero".into(),
            ));
        }

        Ok(Self { base_url, timeout })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default base URL is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Resolve the API base URL from an optional raw value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_API_BASE_URL`].
pub fn base_url_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Parse the request timeout (whole seconds) from an optional raw value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_TIMEOUT_SECS`].
pub fn timeout_from_env_value(value: Option<String>) -> ClientResult<Duration> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let secs = value
        .map(|v| {
            v.parse::<u64>()
                .map_err(|e| ClientError::InvalidConfig(format!("invalid timeout {v:?}: {e}")))
        })
        .transpose()?;

    Ok(Duration::from_secs(secs.unwrap_or(DEFAULT_TIMEOUT_SECS)))
}
