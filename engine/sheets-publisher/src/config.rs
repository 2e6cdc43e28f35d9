//! Configuration for the Google Sheets client

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Google Sheets configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetsConfig {
    /// Sheets API v4 base URL
    pub sheets_api_base_url: String,

    /// Drive API v3 base URL, used to look spreadsheets up by name
    pub drive_api_base_url: String,

    /// Environment variable holding the OAuth bearer token
    pub access_token_env: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            sheets_api_base_url: "https://sheets.googleapis.com/v4".to_string(),
            drive_api_base_url: "https://www.googleapis.com/drive/v3".to_string(),
            access_token_env: "GOOGLE_SHEETS_ACCESS_TOKEN".to_string(),
            timeout_secs: 30,
        }
    }
}

impl SheetsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
