use crate::{CliClientResult, ClientError};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use serde_json::Value;
use ul_core::{UserRecord, UserSource};

/// Body returned by the user API
#[derive(Debug, Deserialize)]
struct UsersResponse {
    results: Vec<UserRecord>,
}

/// HTTP client for the random user API
pub struct Client {
    pub endpoint: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `endpoint` - API URL (e.g., "https://randomuser.me/api")
    /// * `timeout` - Per-request timeout
    pub fn new(endpoint: &str, timeout: Duration) -> CliClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::request(endpoint, e))?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// URL requesting `count` users
    pub fn users_url(&self, count: usize) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}results={}", self.endpoint, separator, count)
    }

    /// Fetch a batch of `count` users
    pub async fn list_users(&self, count: usize) -> CliClientResult<Vec<UserRecord>> {
        let url = self.users_url(count);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::request(&url, e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::request(&url, e))?;

        if !status.is_success() {
            return Err(ClientError::status(
                &url,
                status.as_u16(),
                error_message(&body),
            ));
        }

        let parsed: UsersResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::payload(&url, e))?;
        debug!("Received {} users", parsed.results.len());
        Ok(parsed.results)
    }
}

/// Pull `{"error": "..."}` out of an error body, falling back to the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("error").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                String::from("Unknown error")
            } else {
                body.trim().to_string()
            }
        })
}

#[async_trait]
impl UserSource for Client {
    type Error = ClientError;

    async fn fetch_users(&self, count: usize) -> CliClientResult<Vec<UserRecord>> {
        self.list_users(count).await
    }
}
