//! League Stats CLI
//!
//! Runs every configured league group (or the one passed with `--group`) for the given
//! season year and week.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use league_stats::cli::Cli;
use league_stats::{initialize_logging, load_config, run_league_group, RunOptions};
use sheets_publisher::{GoogleSheetsClient, SpreadsheetSink};
use sleeper_client::SleeperClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    dotenv::dotenv().ok();
    initialize_logging(cli.log_format)?;

    info!("Starting League Stats v{} for week {} {}", env!("CARGO_PKG_VERSION"), cli.week, cli.year);

    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {:?}", cli.config))?;

    let provider = SleeperClient::new(config.sleeper.clone()).context("Failed to create Sleeper client")?;
    let sink = if cli.no_upload {
        None
    } else {
        Some(
            GoogleSheetsClient::new(config.sheets.clone())
                .context("Failed to create Google Sheets client")?,
        )
    };

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", config.output_dir))?;

    let options = RunOptions {
        current_week: cli.week,
        current_year: cli.year,
        output_dir: config.output_dir.clone(),
    };

    for group in config.groups_to_run(cli.group.as_deref())? {
        info!("Generating new {} league data files", group.name);

        let report = run_league_group(
            &provider,
            sink.as_ref().map(|sink| sink as &dyn SpreadsheetSink),
            group,
            &options,
        )
        .await
        .with_context(|| format!("League group {} failed", group.name))?;

        info!("{} league data successfully updated ({} rows)", group.name, report.rows);
    }

    Ok(())
}
