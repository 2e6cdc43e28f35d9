//! Sleeper API response models
//!
//! Only the fields the stats pipeline reads are modelled; everything else in the
//! provider payloads is ignored. Sleeper returns several identifiers as JSON numbers,
//! so ids are normalised to strings on the way in.

use serde::{Deserialize, Deserializer, Serialize};
use serde_aux::field_attributes::deserialize_string_from_number;

/// League member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub display_name: String,
}

/// A team in the league, as of the time of the fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub roster_id: String,
    /// Unclaimed rosters have no owner
    #[serde(default)]
    pub owner_id: Option<String>,
    pub settings: RosterSettings,
    /// Absent until the first week of the season is scored
    #[serde(default)]
    pub metadata: Option<RosterMetadata>,
}

/// Season-to-date roster settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSettings {
    pub waiver_budget_used: i64,
    #[serde(default, deserialize_with = "deserialize_string_from_number")]
    pub division: String,
    pub wins: i64,
    pub losses: i64,
    pub ties: i64,
    /// Whole part of potential points
    #[serde(default)]
    pub ppts: Option<i64>,
    /// Fractional digits of potential points
    #[serde(default)]
    pub ppts_decimal: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterMetadata {
    #[serde(default)]
    pub streak: Option<String>,
    #[serde(default)]
    pub record: Option<String>,
}

/// One team's side of a weekly matchup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupEntry {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub matchup_id: Option<String>,
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub roster_id: String,
    #[serde(default)]
    pub points: Option<f64>,
}

impl MatchupEntry {
    /// Points scored, with a missing score counted as zero
    pub fn points_or_zero(&self) -> f64 {
        self.points.unwrap_or(0.0)
    }
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|id| match id {
        RawId::Text(text) => text,
        RawId::Integer(value) => value.to_string(),
    }))
}
