use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_ENDPOINT, DEFAULT_RESULTS, DEFAULT_TIMEOUT_SECS,
    MAX_RESULTS, MAX_TIMEOUT_SECS, MIN_RESULTS, MIN_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the user API the list is fetched from
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Endpoint returning `{ "results": [...] }`
    pub endpoint: String,
    /// Number of users requested (`?results=N`)
    pub results: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_API_ENDPOINT),
            results: DEFAULT_RESULTS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "api.endpoint",
                format!("must be an http(s) URL, got '{}'", self.endpoint),
            ));
        }

        if !(MIN_RESULTS..=MAX_RESULTS).contains(&self.results) {
            return Err(ConfigError::invalid(
                "api.results",
                format!("must be {MIN_RESULTS}-{MAX_RESULTS}, got {}", self.results),
            ));
        }

        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::invalid(
                "api.timeout_secs",
                format!(
                    "must be {MIN_TIMEOUT_SECS}-{MAX_TIMEOUT_SECS}, got {}",
                    self.timeout_secs
                ),
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
