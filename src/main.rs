// Copyright (c) 2025 Online Roster Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use online_roster::collector::orchestrator::RosterCollector;
use online_roster::config::settings::Settings;
use online_roster::engines::reqwest_engine::ReqwestEngine;
use online_roster::utils::telemetry;
use std::sync::Arc;
use tracing::info;

/// One-shot batch entry point
///
/// Loads configuration, collects the roster for every configured category
/// and prints one name per line to stdout.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting online-roster...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!(categories = settings.categories.len(), "Configuration loaded");

    // 3. Build the fetch engine and run the collector
    let fetcher = Arc::new(ReqwestEngine::new(&settings.http));
    let collector = RosterCollector::new(fetcher, settings);
    let names = collector.collect_all().await;
    info!(names = names.len(), "Collection finished");

    for name in &names {
        println!("{}", name);
    }

    Ok(())
}
