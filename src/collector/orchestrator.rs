// Copyright (c) 2025 Online Roster Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::collector::{collect_pages, CategoryRun};
use crate::config::settings::Settings;
use crate::engines::traits::{BodyFetcher, FetchError};
use crate::parsing::pagination::resolve_page_count;
use crate::parsing::scanner::TitleScanner;
use crate::parsing::ParseError;
use scraper::Html;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Category collection error type
#[derive(Error, Debug)]
pub enum CollectError {
    /// Page-count discovery fetch failed
    #[error("discovery fetch failed: {0}")]
    Fetch(#[from] FetchError),
    /// Pagination markup could not be resolved
    #[error("pagination parse failed: {0}")]
    Parse(#[from] ParseError),
}

/// Roster collector
///
/// Drives the whole run: for each configured category, strictly
/// sequentially, discovers the listing page count from page 1 and then
/// collects every page concurrently. A category whose discovery fails is
/// skipped with a warning; the remaining categories still run.
pub struct RosterCollector {
    fetcher: Arc<dyn BodyFetcher>,
    scanner: Arc<TitleScanner>,
    settings: Settings,
}

impl RosterCollector {
    pub fn new(fetcher: Arc<dyn BodyFetcher>, settings: Settings) -> Self {
        Self {
            fetcher,
            scanner: Arc::new(TitleScanner::new()),
            settings,
        }
    }

    /// Collect names across all configured categories, in category order
    ///
    /// Names within a category arrive in non-deterministic page order; the
    /// output is neither deduplicated nor sorted.
    pub async fn collect_all(&self) -> Vec<String> {
        let mut names = Vec::new();

        for category in &self.settings.categories {
            match self.collect_category(category).await {
                Ok(run) => {
                    info!(
                        category = %category,
                        names = run.names.len(),
                        completed = run.pages_completed,
                        failed = run.pages_failed,
                        launched = run.pages_launched,
                        timed_out = run.timed_out,
                        "category collected"
                    );
                    names.extend(run.names);
                }
                Err(error) => {
                    warn!(category = %category, error = %error, "skipping category");
                }
            }
        }

        names
    }

    /// Collect one category: resolve its page count, then fan out
    pub async fn collect_category(&self, category: &str) -> Result<CategoryRun, CollectError> {
        let pages = self.discover_page_count(category).await?;
        let deadline = Duration::from_secs(self.settings.collector.deadline_secs);

        Ok(collect_pages(
            self.fetcher.clone(),
            self.scanner.clone(),
            &self.settings.url_template,
            category,
            1,
            pages,
            deadline,
        )
        .await)
    }

    /// Fetch the first listing page and read the total page count from its
    /// pagination control
    async fn discover_page_count(&self, category: &str) -> Result<u32, CollectError> {
        let url = self.settings.url_template.listing_url(category, 1);
        let body = self.fetcher.fetch_body(&url).await?;
        let document = Html::parse_document(&body);
        Ok(resolve_page_count(&document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::{CollectorSettings, HttpSettings, UrlTemplate};
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// Serves canned bodies by URL; unknown URLs get a 404-style error
    struct MapFetcher {
        pages: HashMap<String, String>,
    }

    #[async_trait]
    impl BodyFetcher for MapFetcher {
        async fn fetch_body(&self, url: &str) -> Result<String, FetchError> {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::BadStatus {
                    status: 404,
                    url: url.to_string(),
                })
        }
    }

    fn settings(categories: Vec<&str>) -> Settings {
        Settings {
            url_template: UrlTemplate::new("http://test.local/{category}/page/{page}"),
            categories: categories.into_iter().map(String::from).collect(),
            collector: CollectorSettings { deadline_secs: 5 },
            http: HttpSettings {
                user_agent: "online-roster-test".to_string(),
                request_timeout_secs: 5,
            },
        }
    }

    fn titles(names: &[&str]) -> String {
        names
            .iter()
            .map(|n| format!(r#"<div><div class="title"><a href="/{}/">{}</a></div></div>"#, n, n))
            .collect()
    }

    fn pagination(last_page: u32) -> String {
        format!(
            r##"<ul class="paging">
<li><a href="#" class="prev">prev</a></li>
<li class="active"><a href="/">1</a></li>
<li><a href="/?page={last}">{last}</a></li>
<li><a href="/?page=2" class="next">next</a></li>
</ul>"##,
            last = last_page
        )
    }

    #[tokio::test]
    async fn discovers_page_count_and_collects_every_page() {
        let mut pages = HashMap::new();
        pages.insert(
            "http://test.local/cats/page/1".to_string(),
            format!("<body>{}{}</body>", titles(&["alpha"]), pagination(2)),
        );
        pages.insert(
            "http://test.local/cats/page/2".to_string(),
            format!("<body>{}</body>", titles(&["bravo", "charlie"])),
        );

        let collector =
            RosterCollector::new(Arc::new(MapFetcher { pages }), settings(vec!["cats"]));
        let run = collector.collect_category("cats").await.unwrap();

        assert_eq!(run.pages_launched, 2);
        assert_eq!(run.pages_completed, 2);

        let mut names = run.names;
        names.sort();
        assert_eq!(names, vec!["alpha", "bravo", "charlie"]);
    }

    #[tokio::test]
    async fn category_without_pagination_collects_nothing() {
        let mut pages = HashMap::new();
        pages.insert(
            "http://test.local/cats/page/1".to_string(),
            format!("<body>{}</body>", titles(&["alpha"])),
        );

        let collector =
            RosterCollector::new(Arc::new(MapFetcher { pages }), settings(vec!["cats"]));
        let run = collector.collect_category("cats").await.unwrap();

        assert_eq!(run.pages_launched, 0);
        assert!(run.names.is_empty());
    }

    #[tokio::test]
    async fn failing_category_is_skipped_without_affecting_others() {
        let mut pages = HashMap::new();
        pages.insert(
            "http://test.local/cats/page/1".to_string(),
            format!("<body>{}{}</body>", titles(&["alpha"]), pagination(1)),
        );
        // No body mounted for "dogs": its discovery fetch fails.

        let collector = RosterCollector::new(
            Arc::new(MapFetcher { pages }),
            settings(vec!["dogs", "cats"]),
        );
        let names = collector.collect_all().await;

        assert_eq!(names, vec!["alpha"]);
    }
}
