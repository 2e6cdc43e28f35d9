//! Multi-league driver
//!
//! Runs the season aggregation for every league in a group, writes the combined table and the
//! points pivot to CSV, then replaces the group's spreadsheet with the combined table.

use crate::config::LeagueGroup;
use crate::pivot::PivotView;
use crate::records::FinalRecord;
use crate::schedule::WeekSchedule;
use crate::season::season_records;
use crate::table::Table;
use crate::Result;
use sheets_publisher::{CellValue, SpreadsheetSink};
use sleeper_client::LeagueDataProvider;
use std::path::{Path, PathBuf};
use tracing::info;

/// Settings shared by every group in one run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub current_week: u32,
    pub current_year: i32,
    pub output_dir: PathBuf,
}

/// What a group run produced
#[derive(Debug, Clone)]
pub struct GroupReport {
    pub rows: usize,
    pub csv_path: PathBuf,
    pub pivot_path: PathBuf,
    pub uploaded: bool,
}

/// Gather, join and concatenate every league in `group`, in configured order
pub async fn combined_records<P>(
    provider: &P,
    group: &LeagueGroup,
    options: &RunOptions,
) -> Result<Vec<FinalRecord>>
where
    P: LeagueDataProvider + ?Sized,
{
    let mut combined = Vec::new();

    for league in &group.leagues {
        let schedule =
            WeekSchedule::for_league(league.year, options.current_year, options.current_week);
        let records = season_records(provider, &league.league_id, &schedule, league.year).await?;
        info!("League {} ({}) produced {} rows", league.league_id, league.year, records.len());
        combined.extend(records);
    }

    Ok(combined)
}

/// Run one league group end to end. With no sink the spreadsheet upload is skipped.
pub async fn run_league_group<P>(
    provider: &P,
    sink: Option<&dyn SpreadsheetSink>,
    group: &LeagueGroup,
    options: &RunOptions,
) -> Result<GroupReport>
where
    P: LeagueDataProvider + ?Sized,
{
    let records = combined_records(provider, group, options).await?;

    let mut table = Table::from_records(&records);
    let pivot = PivotView::from_records(&records, options.current_year).to_table();

    let csv_path = output_path(&options.output_dir, &group.file_stem, "");
    let pivot_path = output_path(&options.output_dir, &group.file_stem, "_pivot");
    table.write_csv(&csv_path)?;
    pivot.write_csv(&pivot_path)?;
    info!("Wrote {} rows to {:?} and pivot to {:?}", table.len(), csv_path, pivot_path);

    // The sheet gets zeros where the CSV kept empty cells
    table.fill_nulls(CellValue::Int(0));

    let uploaded = match sink {
        Some(sink) => {
            info!("Updating Google sheet {} with new data", group.sheet_name);
            sink.replace_contents(&group.sheet_name, &table.to_rows()).await?;
            info!("Google sheet data updated successfully");
            true
        }
        None => {
            info!("Upload disabled, leaving sheet {} untouched", group.sheet_name);
            false
        }
    };

    Ok(GroupReport { rows: table.len(), csv_path, pivot_path, uploaded })
}

fn output_path(output_dir: &Path, file_stem: &str, suffix: &str) -> PathBuf {
    output_dir.join(format!("{}{}.csv", file_stem, suffix))
}
