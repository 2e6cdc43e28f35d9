//! Error types for the Sleeper client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SleeperError {
    #[error("Sleeper API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
