//! # Command Line Interface

use crate::logging::LogFormat;
use crate::schedule::FINAL_REGULAR_SEASON_WEEK;
use clap::Parser;
use std::path::PathBuf;

/// Pull Sleeper league data and publish weekly stats to CSV and Google Sheets
#[derive(Parser, Debug)]
#[command(name = "league-stats")]
#[command(about = "Publish weekly Sleeper league stats to CSV and Google Sheets")]
pub struct Cli {
    /// Current season year
    #[arg(long)]
    pub year: i32,

    /// Current week; only regular-season weeks 1-14 are supported
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=FINAL_REGULAR_SEASON_WEEK as i64))]
    pub week: u32,

    /// Path to the league configuration file
    #[arg(short, long, default_value = "league_stats.toml")]
    pub config: PathBuf,

    /// Only run the named league group
    #[arg(long)]
    pub group: Option<String>,

    /// Write the CSV files but skip the spreadsheet upload
    #[arg(long)]
    pub no_upload: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}
