// Copyright (c) 2025 Online Roster Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod orchestrator;

use crate::config::settings::UrlTemplate;
use crate::engines::traits::{BodyFetcher, FetchError};
use crate::parsing::scanner::TitleScanner;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Outcome of one page-fetch task
enum PageOutcome {
    Completed(u32),
    Failed(u32, FetchError),
}

/// Result of one category collection run
#[derive(Debug, Default)]
pub struct CategoryRun {
    /// Names collected across all pages, in arrival order
    pub names: Vec<String>,
    /// Pages fetched and scanned to completion
    pub pages_completed: usize,
    /// Pages whose fetch failed
    pub pages_failed: usize,
    /// Page tasks launched
    pub pages_launched: usize,
    /// Whether the deadline expired before every task reported back
    pub timed_out: bool,
}

/// Fetch every page in `[first_page, last_page]` concurrently and collect
/// the names they yield, bounded by `deadline`
///
/// One task is spawned per page; all tasks share one name channel and one
/// outcome channel, and this loop is their only consumer, so the collection
/// needs no lock. Completion is counted against the number of tasks
/// actually launched. On deadline expiry outstanding tasks are cancelled
/// and whatever arrived so far is returned without error.
pub async fn collect_pages(
    fetcher: Arc<dyn BodyFetcher>,
    scanner: Arc<TitleScanner>,
    template: &UrlTemplate,
    category: &str,
    first_page: u32,
    last_page: u32,
    deadline: Duration,
) -> CategoryRun {
    let mut run = CategoryRun::default();

    let cancel = CancellationToken::new();
    let (name_tx, mut name_rx) = mpsc::channel::<String>(1);
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<PageOutcome>(1);

    for page in first_page..=last_page {
        let url = template.listing_url(category, page);
        tokio::spawn(fetch_page(
            fetcher.clone(),
            scanner.clone(),
            url,
            page,
            name_tx.clone(),
            outcome_tx.clone(),
            cancel.child_token(),
        ));
        run.pages_launched += 1;
    }

    // The spawned tasks now hold the only senders.
    drop(name_tx);
    drop(outcome_tx);

    if run.pages_launched == 0 {
        return run;
    }

    let expiry = Instant::now() + deadline;
    loop {
        tokio::select! {
            _ = tokio::time::sleep_until(expiry) => {
                run.timed_out = true;
                break;
            }
            Some(name) = name_rx.recv() => {
                run.names.push(name);
            }
            Some(outcome) = outcome_rx.recv() => {
                match outcome {
                    PageOutcome::Completed(page) => {
                        run.pages_completed += 1;
                        debug!(category, page, "page collected");
                    }
                    PageOutcome::Failed(page, error) => {
                        run.pages_failed += 1;
                        warn!(category, page, error = %error, "page fetch failed");
                    }
                }
                if run.pages_completed + run.pages_failed == run.pages_launched {
                    break;
                }
            }
        }
    }

    // Stop outstanding tasks and pick up names already in flight.
    cancel.cancel();
    while let Ok(name) = name_rx.try_recv() {
        run.names.push(name);
    }

    run
}

/// One page task: fetch the body, scan it, forward each name, then report
/// the page outcome
async fn fetch_page(
    fetcher: Arc<dyn BodyFetcher>,
    scanner: Arc<TitleScanner>,
    url: String,
    page: u32,
    name_tx: mpsc::Sender<String>,
    outcome_tx: mpsc::Sender<PageOutcome>,
    cancel: CancellationToken,
) {
    let body = tokio::select! {
        _ = cancel.cancelled() => return,
        fetched = fetcher.fetch_body(&url) => match fetched {
            Ok(body) => body,
            Err(error) => {
                let _ = outcome_tx.send(PageOutcome::Failed(page, error)).await;
                return;
            }
        },
    };

    for name in scanner.scan(&body) {
        // A closed channel means the collector already gave up on this run.
        if name_tx.send(name).await.is_err() {
            return;
        }
    }

    let _ = outcome_tx.send(PageOutcome::Completed(page)).await;
}
