//! Run configuration
//!
//! League groups, output locations and client settings are read from a TOML file, with any
//! value overridable through `LEAGUE_STATS__<SECTION>__<KEY>` environment variables.

use crate::error::StatsError;
use crate::Result;
use serde::{Deserialize, Serialize};
use sheets_publisher::SheetsConfig;
use sleeper_client::SleeperConfig;
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "LEAGUE_STATS";

/// A league and the season it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueRef {
    pub league_id: String,
    pub year: i32,
}

/// Leagues published together to one sheet and one pair of CSV files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueGroup {
    pub name: String,
    pub leagues: Vec<LeagueRef>,
    /// Spreadsheet to overwrite
    pub sheet_name: String,
    /// Output file name without extension
    pub file_stem: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    #[serde(default)]
    pub sleeper: SleeperConfig,

    #[serde(default)]
    pub sheets: SheetsConfig,

    /// Directory the CSV files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub league_groups: Vec<LeagueGroup>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            sleeper: SleeperConfig::default(),
            sheets: SheetsConfig::default(),
            output_dir: default_output_dir(),
            league_groups: Vec::new(),
        }
    }
}

impl StatsConfig {
    /// Groups to run: all of them, or only the one named
    pub fn groups_to_run(&self, only: Option<&str>) -> Result<Vec<&LeagueGroup>> {
        match only {
            None => Ok(self.league_groups.iter().collect()),
            Some(name) => self
                .league_groups
                .iter()
                .find(|group| group.name == name)
                .map(|group| vec![group])
                .ok_or_else(|| StatsError::UnknownGroup { name: name.to_string() }),
        }
    }
}

/// Load configuration from a TOML file and environment overrides
pub fn load_config(path: &Path) -> Result<StatsConfig> {
    tracing::debug!("Loading configuration from file: {:?}", path);

    let settings = config::Config::builder()
        .add_source(config::File::from(path.to_path_buf()).format(config::FileFormat::Toml))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__"),
        )
        .build()?;

    let config: StatsConfig = settings.try_deserialize()?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate configuration
pub fn validate_config(config: &StatsConfig) -> Result<()> {
    if config.league_groups.is_empty() {
        return Err(invalid("no league groups configured"));
    }

    for group in &config.league_groups {
        if group.name.trim().is_empty() {
            return Err(invalid("league group with an empty name"));
        }
        if group.leagues.is_empty() {
            return Err(invalid(&format!("league group {} has no leagues", group.name)));
        }
        if group.sheet_name.trim().is_empty() {
            return Err(invalid(&format!("league group {} has no sheet_name", group.name)));
        }
        if group.file_stem.trim().is_empty() {
            return Err(invalid(&format!("league group {} has no file_stem", group.name)));
        }
        if let Some(league) = group.leagues.iter().find(|league| league.league_id.trim().is_empty()) {
            return Err(invalid(&format!(
                "league group {} has a league with an empty id ({})",
                group.name, league.year
            )));
        }
    }

    let mut names: Vec<&str> = config.league_groups.iter().map(|g| g.name.as_str()).collect();
    names.sort_unstable();
    if let Some(pair) = names.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(invalid(&format!("duplicate league group {}", pair[0])));
    }

    Ok(())
}

fn invalid(message: &str) -> StatsError {
    StatsError::InvalidConfig { message: message.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
output_dir = "out"

[sleeper]
timeout_secs = 10

[[league_groups]]
name = "work"
sheet_name = "Work League Stats"
file_stem = "work_league"
leagues = [
    { league_id = "916000000000000001", year = 2023 },
    { league_id = "1048000000000000002", year = 2024 },
]

[[league_groups]]
name = "friends"
sheet_name = "Friends League Stats"
file_stem = "friend_league"
leagues = [{ league_id = "1048000000000000003", year = 2024 }]
"#;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn group(name: &str) -> LeagueGroup {
        LeagueGroup {
            name: name.to_string(),
            leagues: vec![LeagueRef { league_id: "1".to_string(), year: 2024 }],
            sheet_name: format!("{} sheet", name),
            file_stem: name.to_string(),
        }
    }

    #[test]
    fn test_load_config_file() {
        let file = write_config(SAMPLE);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.sleeper.timeout_secs, 10);
        assert_eq!(config.sleeper.api_base_url, "https://api.sleeper.app/v1");
        assert_eq!(config.sheets.access_token_env, "GOOGLE_SHEETS_ACCESS_TOKEN");
        assert_eq!(config.league_groups.len(), 2);

        let work = &config.league_groups[0];
        assert_eq!(work.name, "work");
        assert_eq!(work.file_stem, "work_league");
        assert_eq!(
            work.leagues[1],
            LeagueRef { league_id: "1048000000000000002".to_string(), year: 2024 }
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_config(Path::new("/nonexistent/league_stats.toml"));
        assert!(matches!(result, Err(StatsError::Config(_))));
    }

    #[test]
    fn test_no_groups_is_invalid() {
        let file = write_config("output_dir = \".\"\n");
        let result = load_config(file.path());
        assert!(matches!(result, Err(StatsError::InvalidConfig { .. })));
    }

    #[test]
    fn test_validation_rules() {
        let mut config = StatsConfig { league_groups: vec![group("work")], ..Default::default() };
        assert!(validate_config(&config).is_ok());

        config.league_groups[0].leagues.clear();
        assert!(validate_config(&config).is_err());

        config.league_groups = vec![group("work")];
        config.league_groups[0].sheet_name = " ".to_string();
        assert!(validate_config(&config).is_err());

        config.league_groups = vec![group("work"), group("work")];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_groups_to_run() {
        let config = StatsConfig {
            league_groups: vec![group("work"), group("friends")],
            ..Default::default()
        };

        assert_eq!(config.groups_to_run(None).unwrap().len(), 2);

        let only = config.groups_to_run(Some("friends")).unwrap();
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].name, "friends");

        assert!(matches!(
            config.groups_to_run(Some("office")),
            Err(StatsError::UnknownGroup { .. })
        ));
    }
}
