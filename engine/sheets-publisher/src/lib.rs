//! Spreadsheet publishing
//!
//! Pushes a header row plus data rows to the first worksheet of a Google spreadsheet,
//! replacing whatever was there before.

pub mod client;
pub mod config;
pub mod error;
pub mod sink;
pub mod values;

pub use client::GoogleSheetsClient;
pub use config::SheetsConfig;
pub use error::SheetsError;
pub use sink::SpreadsheetSink;
pub use values::CellValue;

// Result type alias
pub type Result<T> = std::result::Result<T, SheetsError>;
