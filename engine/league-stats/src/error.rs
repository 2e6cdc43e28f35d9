//! Error types for the league stats pipeline

use sheets_publisher::SheetsError;
use sleeper_client::SleeperError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    /// Every matchup id must pair exactly two rosters in a week
    #[error("Matchup {matchup_id} in week {week} has {entries} entries, expected 2")]
    MalformedMatchup { week: u32, matchup_id: String, entries: usize },

    #[error("No weekly data gathered for league {league_id} ({year})")]
    NoWeeklyData { league_id: String, year: i32 },

    #[error("Unknown league group: {name}")]
    UnknownGroup { name: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("League data provider error: {0}")]
    Provider(#[from] SleeperError),

    #[error("Spreadsheet error: {0}")]
    Sink(#[from] SheetsError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
