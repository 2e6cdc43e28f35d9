//! Spreadsheet sink abstraction

use crate::values::CellValue;
use crate::Result;
use async_trait::async_trait;

/// Destination that accepts a whole table at once
#[async_trait]
pub trait SpreadsheetSink: Send + Sync {
    /// Open the spreadsheet called `sheet_name`, clear it and write `rows` from the top-left cell.
    /// The first row is the header.
    async fn replace_contents(&self, sheet_name: &str, rows: &[Vec<CellValue>]) -> Result<()>;
}
