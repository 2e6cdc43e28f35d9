//! Sleeper league data client
//!
//! Read-only access to the three Sleeper endpoints the league stats pipeline needs:
//! league users, current rosters and per-week matchups.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;

pub use client::SleeperClient;
pub use config::SleeperConfig;
pub use error::SleeperError;
pub use models::{MatchupEntry, Roster, RosterMetadata, RosterSettings, User};
pub use provider::LeagueDataProvider;

// Result type alias
pub type Result<T> = std::result::Result<T, SleeperError>;
