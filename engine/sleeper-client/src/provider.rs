//! League data provider abstraction

use crate::models::{MatchupEntry, Roster, User};
use crate::Result;
use async_trait::async_trait;

/// Read-only source of league data keyed by league id
#[async_trait]
pub trait LeagueDataProvider: Send + Sync {
    async fn get_users(&self, league_id: &str) -> Result<Vec<User>>;

    async fn get_rosters(&self, league_id: &str) -> Result<Vec<Roster>>;

    /// Matchups for one week. Weeks that have not been scheduled yet come back empty.
    async fn get_matchups(&self, league_id: &str, week: u32) -> Result<Vec<MatchupEntry>>;
}
