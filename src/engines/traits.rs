// Copyright (c) 2025 Online Roster Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// Fetch error type
#[derive(Error, Debug)]
pub enum FetchError {
    /// Request failed at the transport level
    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// Server answered with a non-success status
    #[error("unexpected status {status} for {url}")]
    BadStatus { status: u16, url: String },
}

/// Body-fetch primitive
///
/// The one network operation the collector depends on: fetch the response
/// body for a URL. Injected so tests and callers can substitute their own
/// transport; failures come back as a typed error, never as a process abort.
#[async_trait]
pub trait BodyFetcher: Send + Sync {
    /// Fetch the response body for one URL
    async fn fetch_body(&self, url: &str) -> Result<String, FetchError>;
}
