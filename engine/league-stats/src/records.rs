//! Typed rows produced by the pipeline

use sheets_publisher::CellValue;

/// Display name used when a roster has no owner or the owner is not a league user
pub const UNKNOWN_USER_NAME: &str = "User name not available";

/// `user_id` written for rosters without an owner. Downstream sheets and the
/// roster join both key on this literal.
pub const UNOWNED_USER_ID: &str = "None";

/// First playoff week; weeks before it are regular season
pub const PLAYOFF_START_WEEK: u32 = 15;

/// One team's result for one week, seen from that team's side
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyTeamRecord {
    pub user_id: String,
    pub user_name: String,
    pub week: u32,
    pub opponent_id: String,
    pub opponent_name: String,
    pub points_for: f64,
    pub points_against: f64,
    pub playoffs: bool,
    pub current_period: bool,
    pub points_spread: f64,
}

/// Season-to-date standing of one roster, as of now
#[derive(Debug, Clone, PartialEq)]
pub struct RosterSummary {
    pub user_id: String,
    pub waiver_budget_left: i64,
    pub division: String,
    pub wins: i64,
    pub losses: i64,
    pub ties: i64,
    /// `None` before the season has potential points; published as an empty string
    pub points_potential: Option<f64>,
    pub win_streak: String,
    pub record: String,
    pub current_period: bool,
}

/// A weekly record joined with the matching roster summary, tagged with its league
#[derive(Debug, Clone, PartialEq)]
pub struct FinalRecord {
    pub weekly: WeeklyTeamRecord,
    /// Only current-period rows pick up a roster summary
    pub roster: Option<RosterSummary>,
    pub league_id: String,
    pub year: i32,
}

impl FinalRecord {
    pub const COLUMNS: [&'static str; 20] = [
        "user_id",
        "user_name",
        "week",
        "opponent_id",
        "opponent_name",
        "points_for",
        "points_against",
        "playoffs",
        "current_period",
        "points_spread",
        "waiver_budget_left",
        "division",
        "wins",
        "losses",
        "ties",
        "points_potential",
        "win_streak",
        "record",
        "league_id",
        "year",
    ];

    /// Cells in `COLUMNS` order. Roster columns are null when the join found nothing.
    pub fn to_cells(&self) -> Vec<CellValue> {
        let weekly = &self.weekly;
        let mut cells = vec![
            CellValue::from(weekly.user_id.as_str()),
            CellValue::from(weekly.user_name.as_str()),
            CellValue::from(weekly.week),
            CellValue::from(weekly.opponent_id.as_str()),
            CellValue::from(weekly.opponent_name.as_str()),
            CellValue::from(weekly.points_for),
            CellValue::from(weekly.points_against),
            CellValue::from(weekly.playoffs),
            CellValue::from(weekly.current_period),
            CellValue::from(weekly.points_spread),
        ];

        match &self.roster {
            Some(roster) => cells.extend([
                CellValue::from(roster.waiver_budget_left),
                division_cell(&roster.division),
                CellValue::from(roster.wins),
                CellValue::from(roster.losses),
                CellValue::from(roster.ties),
                roster.points_potential.map(CellValue::Float).unwrap_or_else(|| CellValue::from("")),
                CellValue::from(roster.win_streak.as_str()),
                CellValue::from(roster.record.as_str()),
            ]),
            None => cells.extend(std::iter::repeat(CellValue::Null).take(8)),
        }

        cells.push(CellValue::from(self.league_id.as_str()));
        cells.push(CellValue::from(self.year));
        cells
    }
}

/// Sleeper sends divisions as numbers; keep them numeric in the published table
fn division_cell(division: &str) -> CellValue {
    division.parse::<i64>().map(CellValue::Int).unwrap_or_else(|_| CellValue::from(division))
}
