//! Season aggregation for a single league

use crate::error::StatsError;
use crate::records::{FinalRecord, RosterSummary, WeeklyTeamRecord};
use crate::roster::roster_summaries;
use crate::schedule::WeekSchedule;
use crate::weekly::weekly_team_records;
use crate::Result;
use sleeper_client::LeagueDataProvider;
use tracing::{info, warn};

/// Gather every completed week of `league_id` and join the current roster summaries onto it.
///
/// Users and rosters are fetched once; matchups are fetched for every scheduled week, played or
/// not. Fails with [`StatsError::NoWeeklyData`] when no week produced any rows.
pub async fn season_records<P>(
    provider: &P,
    league_id: &str,
    schedule: &WeekSchedule,
    year: i32,
) -> Result<Vec<FinalRecord>>
where
    P: LeagueDataProvider + ?Sized,
{
    let users = provider.get_users(league_id).await?;
    let rosters = provider.get_rosters(league_id).await?;

    let mut all_weeks: Vec<WeeklyTeamRecord> = Vec::new();
    for (week, status) in schedule.iter() {
        let matchups = provider.get_matchups(league_id, week).await?;

        if !status.completed {
            warn!("Week {} {} has not been played yet. Skipping getting this data", week, year);
            continue;
        }

        info!("Gathering data for week {} {}", week, year);
        match weekly_team_records(&rosters, &matchups, &users, week, status.current)? {
            Some(records) => {
                all_weeks.extend(records);
                info!("Data successfully gathered for week {} {}", week, year);
            }
            None => warn!("No matchups returned for week {} {}", week, year),
        }
    }

    if all_weeks.is_empty() {
        return Err(StatsError::NoWeeklyData { league_id: league_id.to_string(), year });
    }

    let summaries = roster_summaries(&rosters);
    Ok(left_join(all_weeks, &summaries, league_id, year))
}

/// Left join on `(user_id, current_period)`. A weekly row matching several summaries is repeated
/// once per match; a row matching none keeps empty roster columns.
pub fn left_join(
    weekly: Vec<WeeklyTeamRecord>,
    summaries: &[RosterSummary],
    league_id: &str,
    year: i32,
) -> Vec<FinalRecord> {
    let mut joined = Vec::with_capacity(weekly.len());

    for record in weekly {
        let matches: Vec<&RosterSummary> = summaries
            .iter()
            .filter(|s| s.user_id == record.user_id && s.current_period == record.current_period)
            .collect();

        if matches.is_empty() {
            joined.push(FinalRecord {
                weekly: record,
                roster: None,
                league_id: league_id.to_string(),
                year,
            });
            continue;
        }

        for summary in matches {
            joined.push(FinalRecord {
                weekly: record.clone(),
                roster: Some(summary.clone()),
                league_id: league_id.to_string(),
                year,
            });
        }
    }

    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::WeekStatus;
    use crate::test_support::{entry, roster, user, FakeProvider};

    #[tokio::test]
    async fn test_single_week_end_to_end() {
        let provider = FakeProvider::two_team_league("784", &[1]);
        let mut schedule = WeekSchedule::default();
        schedule.insert(1, WeekStatus::CURRENT);

        let records = season_records(&provider, "784", &schedule, 2024).await.unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.weekly.points_for, 100.5);
        assert_eq!(first.weekly.points_against, 90.25);
        assert_eq!(first.weekly.points_spread, 10.25);
        assert_eq!(first.league_id, "784");
        assert_eq!(first.year, 2024);
        assert_eq!(first.roster.as_ref().unwrap().user_id, "u1");

        let second = &records[1];
        assert_eq!(second.weekly.points_for, 90.25);
        assert_eq!(second.weekly.points_against, 100.5);
        assert_eq!(second.weekly.points_spread, -10.25);
        assert_eq!(second.roster.as_ref().unwrap().user_id, "u2");
    }

    #[tokio::test]
    async fn test_only_current_period_rows_join_rosters() {
        let provider = FakeProvider::two_team_league("784", &[1, 2, 3]);
        let schedule = WeekSchedule::for_league(2024, 2024, 3);

        let records = season_records(&provider, "784", &schedule, 2024).await.unwrap();
        assert_eq!(records.len(), 6);

        for record in &records {
            assert_eq!(record.roster.is_some(), record.weekly.week == 3);
            assert_eq!(record.weekly.current_period, record.weekly.week == 3);
        }
    }

    #[tokio::test]
    async fn test_matchups_fetched_for_every_scheduled_week() {
        let provider = FakeProvider::two_team_league("784", &[1, 2]);
        let schedule = WeekSchedule::for_league(2024, 2024, 2);

        let records = season_records(&provider, "784", &schedule, 2024).await.unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(provider.fetched_weeks("784"), (1..=14).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_users_and_rosters_fetched_once_per_league() {
        let weeks: Vec<u32> = (1..=14).collect();
        let provider = FakeProvider::two_team_league("784", &weeks);
        let schedule = WeekSchedule::for_league(2023, 2024, 1);

        let records = season_records(&provider, "784", &schedule, 2023).await.unwrap();
        assert_eq!(records.len(), 28);
        assert_eq!(provider.fetched_weeks("784").len(), 14);
        assert_eq!(provider.league_fetch_counts("784"), (1, 1));
    }

    #[tokio::test]
    async fn test_empty_completed_week_is_skipped() {
        // Week 2 is marked completed but the provider has nothing for it
        let provider = FakeProvider::two_team_league("784", &[1, 3]);
        let schedule = WeekSchedule::for_league(2024, 2024, 3);

        let records = season_records(&provider, "784", &schedule, 2024).await.unwrap();
        let weeks: Vec<u32> = records.iter().map(|r| r.weekly.week).collect();
        assert_eq!(weeks, vec![1, 1, 3, 3]);
    }

    #[tokio::test]
    async fn test_no_completed_weeks_is_an_error() {
        let provider = FakeProvider::two_team_league("784", &[1]);
        let mut schedule = WeekSchedule::default();
        schedule.insert(1, WeekStatus::UPCOMING);

        let err = season_records(&provider, "784", &schedule, 2024).await.unwrap_err();
        assert!(matches!(err, StatsError::NoWeeklyData { year: 2024, .. }));
    }

    #[tokio::test]
    async fn test_malformed_week_fails_the_league() {
        let mut provider = FakeProvider::two_team_league("784", &[1]);
        provider.add_week("784", 2, vec![entry("1", "1", Some(50.0))]);
        let schedule = WeekSchedule::for_league(2024, 2024, 2);

        let err = season_records(&provider, "784", &schedule, 2024).await.unwrap_err();
        assert!(matches!(err, StatsError::MalformedMatchup { week: 2, .. }));
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let provider = FakeProvider::default();
        let schedule = WeekSchedule::for_league(2024, 2024, 1);

        let err = season_records(&provider, "missing", &schedule, 2024).await.unwrap_err();
        assert!(matches!(err, StatsError::Provider(_)));
    }

    #[test]
    fn test_left_join_repeats_rows_for_duplicate_keys() {
        let mut provider = FakeProvider::default();
        let mut first = roster("3", "x");
        first.owner_id = None;
        let mut second = roster("4", "x");
        second.owner_id = None;
        provider.add_league("1", vec![user("u1", "alpha")], vec![roster("1", "u1"), first, second]);

        let rosters = &provider.rosters["1"];
        let users = &provider.users["1"];
        let matchups = vec![entry("1", "1", Some(10.0)), entry("1", "3", Some(20.0))];
        let weekly = weekly_team_records(rosters, &matchups, users, 1, true).unwrap().unwrap();

        let joined = left_join(weekly, &roster_summaries(rosters), "1", 2024);
        // u1 matches once, the unowned side matches both unowned rosters
        assert_eq!(joined.len(), 3);
        assert_eq!(joined[0].weekly.user_id, "u1");
        assert_eq!(joined[1].weekly.user_id, "None");
        assert_eq!(joined[2].weekly.user_id, "None");
    }
}
