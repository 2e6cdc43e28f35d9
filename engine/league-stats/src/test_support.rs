//! Fixtures and in-memory fakes shared by unit tests

use async_trait::async_trait;
use sheets_publisher::{CellValue, SheetsError, SpreadsheetSink};
use sleeper_client::{
    LeagueDataProvider, MatchupEntry, Roster, RosterMetadata, RosterSettings, SleeperError, User,
};
use std::collections::HashMap;
use std::sync::Mutex;

pub fn user(user_id: &str, display_name: &str) -> User {
    User { user_id: user_id.to_string(), display_name: display_name.to_string() }
}

pub fn roster(roster_id: &str, owner_id: &str) -> Roster {
    Roster {
        roster_id: roster_id.to_string(),
        owner_id: Some(owner_id.to_string()),
        settings: RosterSettings {
            waiver_budget_used: 35,
            division: "1".to_string(),
            wins: 3,
            losses: 1,
            ties: 0,
            ppts: Some(480),
            ppts_decimal: Some(12),
        },
        metadata: Some(RosterMetadata {
            streak: Some("2W".to_string()),
            record: Some("WLWW".to_string()),
        }),
    }
}

pub fn entry(matchup_id: &str, roster_id: &str, points: Option<f64>) -> MatchupEntry {
    MatchupEntry {
        matchup_id: Some(matchup_id.to_string()),
        roster_id: roster_id.to_string(),
        points,
    }
}

/// League data held in memory; records every fetch
#[derive(Default)]
pub struct FakeProvider {
    pub users: HashMap<String, Vec<User>>,
    pub rosters: HashMap<String, Vec<Roster>>,
    pub matchups: HashMap<(String, u32), Vec<MatchupEntry>>,
    pub user_fetches: Mutex<Vec<String>>,
    pub roster_fetches: Mutex<Vec<String>>,
    pub matchup_fetches: Mutex<Vec<(String, u32)>>,
}

impl FakeProvider {
    /// Two-team league where roster 1 beats roster 2 every listed week
    pub fn two_team_league(league_id: &str, weeks: &[u32]) -> Self {
        let mut provider = Self::default();
        provider.add_league(
            league_id,
            vec![user("u1", "alpha"), user("u2", "bravo")],
            vec![roster("1", "u1"), roster("2", "u2")],
        );
        for &week in weeks {
            provider.add_week(
                league_id,
                week,
                vec![entry("1", "1", Some(100.5)), entry("1", "2", Some(90.25))],
            );
        }
        provider
    }

    pub fn add_league(&mut self, league_id: &str, users: Vec<User>, rosters: Vec<Roster>) {
        self.users.insert(league_id.to_string(), users);
        self.rosters.insert(league_id.to_string(), rosters);
    }

    pub fn add_week(&mut self, league_id: &str, week: u32, entries: Vec<MatchupEntry>) {
        self.matchups.insert((league_id.to_string(), week), entries);
    }

    pub fn fetched_weeks(&self, league_id: &str) -> Vec<u32> {
        self.matchup_fetches
            .lock()
            .unwrap()
            .iter()
            .filter(|(league, _)| league == league_id)
            .map(|(_, week)| *week)
            .collect()
    }

    /// How many times users and rosters were fetched for `league_id`
    pub fn league_fetch_counts(&self, league_id: &str) -> (usize, usize) {
        let count = |log: &Mutex<Vec<String>>| {
            log.lock().unwrap().iter().filter(|league| league.as_str() == league_id).count()
        };
        (count(&self.user_fetches), count(&self.roster_fetches))
    }
}

#[async_trait]
impl LeagueDataProvider for FakeProvider {
    async fn get_users(&self, league_id: &str) -> sleeper_client::Result<Vec<User>> {
        self.user_fetches.lock().unwrap().push(league_id.to_string());
        self.users.get(league_id).cloned().ok_or_else(|| not_found(league_id))
    }

    async fn get_rosters(&self, league_id: &str) -> sleeper_client::Result<Vec<Roster>> {
        self.roster_fetches.lock().unwrap().push(league_id.to_string());
        self.rosters.get(league_id).cloned().ok_or_else(|| not_found(league_id))
    }

    async fn get_matchups(
        &self,
        league_id: &str,
        week: u32,
    ) -> sleeper_client::Result<Vec<MatchupEntry>> {
        self.matchup_fetches.lock().unwrap().push((league_id.to_string(), week));
        Ok(self.matchups.get(&(league_id.to_string(), week)).cloned().unwrap_or_default())
    }
}

fn not_found(league_id: &str) -> SleeperError {
    SleeperError::Api { status: 404, message: format!("league {} not found", league_id) }
}

/// Sink that keeps the last upload per sheet name
#[derive(Default)]
pub struct RecordingSink {
    pub uploads: Mutex<HashMap<String, Vec<Vec<CellValue>>>>,
}

#[async_trait]
impl SpreadsheetSink for RecordingSink {
    async fn replace_contents(
        &self,
        sheet_name: &str,
        rows: &[Vec<CellValue>],
    ) -> sheets_publisher::Result<()> {
        self.uploads.lock().unwrap().insert(sheet_name.to_string(), rows.to_vec());
        Ok(())
    }
}

/// Sink whose spreadsheet can never be found
pub struct MissingSheetSink;

#[async_trait]
impl SpreadsheetSink for MissingSheetSink {
    async fn replace_contents(
        &self,
        sheet_name: &str,
        _rows: &[Vec<CellValue>],
    ) -> sheets_publisher::Result<()> {
        Err(SheetsError::SpreadsheetNotFound { name: sheet_name.to_string() })
    }
}
