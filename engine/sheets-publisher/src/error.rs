//! Error types for the sheets publisher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetsError {
    #[error("Spreadsheet not found: {name}")]
    SpreadsheetNotFound { name: String },

    #[error("Spreadsheet {name} has no worksheets")]
    NoWorksheets { name: String },

    #[error("Access token not set in environment variable {env}")]
    MissingToken { env: String },

    #[error("Sheets API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
