use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing::{info, warn};

mod config;
mod dataset;
mod error;
mod leagues;
mod natstat;
mod pipeline;

use config::Config;
use dataset::{sort_for_history, HistoryDataset};
use leagues::{query_date, LEAGUE_CODES};
use natstat::NatStatClient;
use pipeline::fetch_league_table;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let client = NatStatClient::new(
        &config.api_base_url,
        config.api_key.as_deref().unwrap_or_default(),
        Duration::from_secs(config.http_timeout_secs),
    )?;

    let today = chrono::Local::now().date_naive();
    let request_delay = Duration::from_secs(config.request_delay_secs);
    info!(
        "Screening {} leagues for {} (delay {:?} between requests)",
        LEAGUE_CODES.len(),
        today,
        request_delay
    );

    let mut day_rows = Vec::new();
    for (i, &sport) in LEAGUE_CODES.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(request_delay).await;
        }

        let game_date = query_date(sport, today);
        match fetch_league_table(&client, sport, game_date, today).await {
            Ok(table) => {
                info!("Done with sport {sport}: {} rows", table.len());
                day_rows.extend(table);
            }
            // A league whose fetch failed in transit contributes nothing;
            // upstream API errors and malformed payloads abort the run.
            Err(e) if e.is_transport() => {
                warn!("Skipping {sport}: {e}");
            }
            Err(e) => return Err(e.into()),
        }
    }

    sort_for_history(&mut day_rows);
    info!("Screened {} team rows today", day_rows.len());

    let dataset = HistoryDataset::new(&config.data_path);
    let total = dataset.prepend(day_rows)?;
    info!(
        "History file {} now holds {total} rows",
        dataset.path().display()
    );

    Ok(())
}
