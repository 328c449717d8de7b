// Copyright (c) 2025 Online Roster Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::HttpSettings;
use crate::engines::traits::{BodyFetcher, FetchError};
use async_trait::async_trait;
use std::time::Duration;

/// Fetch engine
///
/// Basic HTTP body fetcher built on reqwest; one shared client with
/// connection pooling, a fixed user agent and a per-request timeout
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    pub fn new(settings: &HttpSettings) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client }
    }
}

#[async_trait]
impl BodyFetcher for ReqwestEngine {
    /// Execute one HTTP GET and return the body
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - the full response body
    /// * `Err(FetchError)` - transport failure or non-success status
    async fn fetch_body(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
