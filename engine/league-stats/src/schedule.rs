//! Which weeks to gather for a league

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

pub const REGULAR_SEASON_WEEKS: RangeInclusive<u32> = 1..=14;
pub const FINAL_REGULAR_SEASON_WEEK: u32 = 14;

/// Inclusion flags for one week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekStatus {
    /// Played, so its matchups are transformed
    pub completed: bool,
    /// The week roster summaries are joined onto
    pub current: bool,
}

impl WeekStatus {
    pub const PAST: WeekStatus = WeekStatus { completed: true, current: false };
    pub const CURRENT: WeekStatus = WeekStatus { completed: true, current: true };
    pub const UPCOMING: WeekStatus = WeekStatus { completed: false, current: false };
}

/// Week number -> status, iterated in week order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekSchedule {
    weeks: BTreeMap<u32, WeekStatus>,
}

impl WeekSchedule {
    /// Past seasons are complete with the final regular-season week as current. The running
    /// season is complete up to and including `current_week`.
    pub fn for_league(league_year: i32, current_year: i32, current_week: u32) -> Self {
        let weeks = REGULAR_SEASON_WEEKS
            .map(|week| {
                let status = if league_year != current_year {
                    if week == FINAL_REGULAR_SEASON_WEEK {
                        WeekStatus::CURRENT
                    } else {
                        WeekStatus::PAST
                    }
                } else if week == current_week {
                    WeekStatus::CURRENT
                } else if week > current_week {
                    WeekStatus::UPCOMING
                } else {
                    WeekStatus::PAST
                };
                (week, status)
            })
            .collect();

        Self { weeks }
    }

    pub fn insert(&mut self, week: u32, status: WeekStatus) {
        self.weeks.insert(week, status);
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, WeekStatus)> + '_ {
        self.weeks.iter().map(|(&week, &status)| (week, status))
    }
}
