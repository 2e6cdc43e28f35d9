//! Sleeper API integration

use crate::config::SleeperConfig;
use crate::models::{MatchupEntry, Roster, User};
use crate::provider::LeagueDataProvider;
use crate::{Result, SleeperError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Sleeper API client
#[derive(Debug)]
pub struct SleeperClient {
    config: SleeperConfig,
    client: reqwest::Client,
}

impl SleeperClient {
    /// Create a new Sleeper API client
    pub fn new(config: SleeperConfig) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { config, client })
    }

    pub fn users_url(&self, league_id: &str) -> String {
        format!("{}/league/{}/users", self.config.base_url(), league_id)
    }

    pub fn rosters_url(&self, league_id: &str) -> String {
        format!("{}/league/{}/rosters", self.config.base_url(), league_id)
    }

    pub fn matchups_url(&self, league_id: &str, week: u32) -> String {
        format!("{}/league/{}/matchups/{}", self.config.base_url(), league_id, week)
    }

    /// GET a JSON list, treating a `null` body as empty
    async fn get_list<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SleeperError::Api { status: status.as_u16(), message: error_text });
        }

        let body = response.text().await?;
        let items: Option<Vec<T>> = serde_json::from_str(&body)?;
        Ok(items.unwrap_or_default())
    }
}

#[async_trait]
impl LeagueDataProvider for SleeperClient {
    async fn get_users(&self, league_id: &str) -> Result<Vec<User>> {
        let users: Vec<User> = self.get_list(&self.users_url(league_id)).await?;
        debug!("Fetched {} users for league {}", users.len(), league_id);
        Ok(users)
    }

    async fn get_rosters(&self, league_id: &str) -> Result<Vec<Roster>> {
        let rosters: Vec<Roster> = self.get_list(&self.rosters_url(league_id)).await?;
        debug!("Fetched {} rosters for league {}", rosters.len(), league_id);
        Ok(rosters)
    }

    async fn get_matchups(&self, league_id: &str, week: u32) -> Result<Vec<MatchupEntry>> {
        let matchups: Vec<MatchupEntry> =
            self.get_list(&self.matchups_url(league_id, week)).await?;
        debug!("Fetched {} matchup entries for league {} week {}", matchups.len(), league_id, week);
        Ok(matchups)
    }
}
