//! League Stats - weekly fantasy league reporting
//!
//! Pulls users, rosters and weekly matchups for each configured Sleeper league, reshapes them
//! into one row per team per week joined with current roster standings, and publishes the
//! result as CSV files and a Google Sheet.

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod identity;
pub mod logging;
pub mod pivot;
pub mod records;
pub mod roster;
pub mod schedule;
pub mod season;
pub mod table;
pub mod weekly;

#[cfg(test)]
mod test_support;

pub use crate::config::{load_config, LeagueGroup, LeagueRef, StatsConfig};
pub use driver::{run_league_group, GroupReport, RunOptions};
pub use error::StatsError;
pub use logging::{initialize_logging, LogFormat};
pub use records::{FinalRecord, RosterSummary, WeeklyTeamRecord};
pub use schedule::{WeekSchedule, WeekStatus};

// Result type alias
pub type Result<T> = std::result::Result<T, StatsError>;
