//! Current roster summary transform

use crate::records::{RosterSummary, UNOWNED_USER_ID};
use sleeper_client::{Roster, RosterSettings};

/// Every team starts the season with this much FAAB
pub const WAIVER_BUDGET: i64 = 100;

/// One summary per roster, in input order. Always describes the current period.
pub fn roster_summaries(rosters: &[Roster]) -> Vec<RosterSummary> {
    rosters.iter().map(roster_summary).collect()
}

fn roster_summary(roster: &Roster) -> RosterSummary {
    let settings = &roster.settings;

    // Before week one is scored any of these can be missing; blank all three together
    let (points_potential, win_streak, record) = match season_to_date(roster) {
        Some((points, streak, record)) => (Some(points), streak, record),
        None => (None, String::new(), String::new()),
    };

    RosterSummary {
        user_id: roster.owner_id.clone().unwrap_or_else(|| UNOWNED_USER_ID.to_string()),
        waiver_budget_left: WAIVER_BUDGET - settings.waiver_budget_used,
        division: settings.division.clone(),
        wins: settings.wins,
        losses: settings.losses,
        ties: settings.ties,
        points_potential,
        win_streak,
        record,
        current_period: true,
    }
}

fn season_to_date(roster: &Roster) -> Option<(f64, String, String)> {
    let points = points_potential(&roster.settings)?;
    let metadata = roster.metadata.as_ref()?;
    Some((points, metadata.streak.clone()?, metadata.record.clone()?))
}

/// Joins the whole and decimal parts as written, so `ppts_decimal = 5` reads as `.5`, not `.05`.
pub fn points_potential(settings: &RosterSettings) -> Option<f64> {
    let whole = settings.ppts?;
    let decimal = settings.ppts_decimal?;
    format!("{}.{}", whole, decimal).parse().ok()
}
