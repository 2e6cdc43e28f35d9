//! Week by team points pivot used for power rankings

use crate::records::FinalRecord;
use crate::table::Table;
use sheets_publisher::CellValue;
use std::collections::{BTreeMap, BTreeSet};

/// Mean `points_for` per (week, user name), restricted to one season
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PivotView {
    weeks: BTreeSet<u32>,
    user_names: BTreeSet<String>,
    /// (week, user name) -> (sum, count)
    cells: BTreeMap<(u32, String), (f64, usize)>,
}

impl PivotView {
    pub fn from_records(records: &[FinalRecord], year: i32) -> Self {
        let mut pivot = Self::default();

        for record in records.iter().filter(|record| record.year == year) {
            let weekly = &record.weekly;
            pivot.weeks.insert(weekly.week);
            pivot.user_names.insert(weekly.user_name.clone());

            let cell = pivot.cells.entry((weekly.week, weekly.user_name.clone())).or_insert((0.0, 0));
            cell.0 += weekly.points_for;
            cell.1 += 1;
        }

        pivot
    }

    pub fn weeks(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks.iter().copied()
    }

    pub fn user_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.user_names.iter().map(String::as_str)
    }

    pub fn value(&self, week: u32, user_name: &str) -> Option<f64> {
        self.cells
            .get(&(week, user_name.to_string()))
            .map(|(sum, count)| sum / *count as f64)
    }

    /// Header `week, <user names...>`; one row per week, empty where a user has no score
    pub fn to_table(&self) -> Table {
        let mut header = vec!["week".to_string()];
        header.extend(self.user_names.iter().cloned());

        let mut table = Table::new(header);
        for week in self.weeks() {
            let mut row = vec![CellValue::from(week)];
            row.extend(self.user_names().map(|name| CellValue::from(self.value(week, name))));
            table.rows.push(row);
        }
        table
    }
}
