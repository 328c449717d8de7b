// Copyright (c) 2025 Online Roster Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration settings
///
/// Covers the listing endpoint, the categories to collect and the tuning
/// knobs for the collector and the HTTP client
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Listing URL template with `{category}` and `{page}` slots
    pub url_template: UrlTemplate,
    /// Categories to collect, processed in order
    pub categories: Vec<String>,
    /// Collector settings
    pub collector: CollectorSettings,
    /// HTTP client settings
    pub http: HttpSettings,
}

/// Collector configuration settings
#[derive(Debug, Clone, Deserialize)]
pub struct CollectorSettings {
    /// Wall-clock budget for one category run, in seconds
    pub deadline_secs: u64,
}

/// HTTP client configuration settings
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// User agent sent with every request
    pub user_agent: String,
    /// Per-request timeout, in seconds
    pub request_timeout_secs: u64,
}

/// Listing URL template
///
/// Every fetch the collector issues goes through this template; both the
/// `{category}` and the `{page}` slot must be present, which is enforced at
/// load time so a malformed fetch URL cannot be built later.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Build the listing URL for one (category, page) pair
    pub fn listing_url(&self, category: &str, page: u32) -> String {
        self.0
            .replace("{category}", category)
            .replace("{page}", &page.to_string())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for slot in ["{category}", "{page}"] {
            if !self.0.contains(slot) {
                return Err(ConfigError::Message(format!(
                    "url_template is missing the {} placeholder",
                    slot
                )));
            }
        }
        Ok(())
    }
}

impl Settings {
    /// Create a new settings instance
    ///
    /// Loads configuration from an optional `config/` file (any supported
    /// format) layered under environment variables, with defaults for the
    /// tuning knobs. The URL template and the category list have no default
    /// and must be provided.
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - validated settings
    /// * `Err(ConfigError)` - missing, unparsable or invalid configuration
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default Collector settings
            .set_default("collector.deadline_secs", 10)?
            // Default HTTP settings
            .set_default("http.user_agent", "Mozilla/5.0 (compatible; online-roster/0.1)")?
            .set_default("http.request_timeout_secs", 30)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("ROSTER").separator("__"));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.url_template.validate()?;
        if settings.categories.is_empty() {
            return Err(ConfigError::Message(
                "categories must not be empty".to_string(),
            ));
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_url_substitutes_both_slots() {
        let template = UrlTemplate::new("https://example.com/{category}/page/{page}");
        assert_eq!(
            template.listing_url("pepsi", 3),
            "https://example.com/pepsi/page/3"
        );
    }

    #[test]
    fn validate_rejects_missing_slots() {
        assert!(UrlTemplate::new("https://example.com/{category}/")
            .validate()
            .is_err());
        assert!(UrlTemplate::new("https://example.com/page/{page}")
            .validate()
            .is_err());
        assert!(UrlTemplate::new("https://example.com/{category}/page/{page}")
            .validate()
            .is_ok());
    }
}
