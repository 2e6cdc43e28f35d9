//! Weekly matchup transform
//!
//! Turns one week of matchup entries into two rows per matchup, one from each
//! team's side, so every team has a points-for / points-against line per week.

use crate::error::StatsError;
use crate::identity::{map_roster_id_to_owner_id, map_user_id_to_team_name};
use crate::records::{WeeklyTeamRecord, PLAYOFF_START_WEEK, UNKNOWN_USER_NAME, UNOWNED_USER_ID};
use crate::Result;
use sleeper_client::{MatchupEntry, Roster, User};
use std::collections::HashMap;

/// One side of a matchup after owner and name resolution
#[derive(Debug, Clone)]
struct TeamScore {
    user_id: String,
    user_name: String,
    points: f64,
}

/// Build the weekly rows for `week`.
///
/// Returns `Ok(None)` when the provider has no matchups for the week. Rows come out in order of
/// each matchup id's first appearance, team first then its mirror.
pub fn weekly_team_records(
    rosters: &[Roster],
    matchups: &[MatchupEntry],
    users: &[User],
    week: u32,
    current_period: bool,
) -> Result<Option<Vec<WeeklyTeamRecord>>> {
    if matchups.is_empty() {
        return Ok(None);
    }

    let owners = map_roster_id_to_owner_id(rosters);
    let team_names = map_user_id_to_team_name(users);

    let mut groups: Vec<(Option<&str>, Vec<TeamScore>)> = Vec::new();
    let mut group_index: HashMap<Option<&str>, usize> = HashMap::new();

    for entry in matchups {
        let owner_id = owners.get(&entry.roster_id).cloned().flatten();

        // Unowned rosters and owners missing from the user list fall back to a placeholder name
        let user_name = owner_id
            .as_ref()
            .and_then(|id| team_names.get(id))
            .cloned()
            .unwrap_or_else(|| UNKNOWN_USER_NAME.to_string());

        let score = TeamScore {
            user_id: owner_id.unwrap_or_else(|| UNOWNED_USER_ID.to_string()),
            user_name,
            points: entry.points_or_zero(),
        };

        let key = entry.matchup_id.as_deref();
        match group_index.get(&key) {
            Some(&index) => groups[index].1.push(score),
            None => {
                group_index.insert(key, groups.len());
                groups.push((key, vec![score]));
            }
        }
    }

    let mut records = Vec::with_capacity(groups.len() * 2);
    for (matchup_id, teams) in &groups {
        match teams.as_slice() {
            [home, away] => {
                records.push(team_record(home, away, week, current_period));
                records.push(team_record(away, home, week, current_period));
            }
            _ => {
                return Err(StatsError::MalformedMatchup {
                    week,
                    matchup_id: matchup_id.unwrap_or("null").to_string(),
                    entries: teams.len(),
                });
            }
        }
    }

    Ok(Some(records))
}

fn team_record(
    team: &TeamScore,
    opponent: &TeamScore,
    week: u32,
    current_period: bool,
) -> WeeklyTeamRecord {
    WeeklyTeamRecord {
        user_id: team.user_id.clone(),
        user_name: team.user_name.clone(),
        week,
        opponent_id: opponent.user_id.clone(),
        opponent_name: opponent.user_name.clone(),
        points_for: team.points,
        points_against: opponent.points,
        playoffs: week >= PLAYOFF_START_WEEK,
        current_period,
        points_spread: team.points - opponent.points,
    }
}
