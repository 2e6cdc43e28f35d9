//! Rectangular tables for CSV export and spreadsheet upload

use crate::records::FinalRecord;
use crate::Result;
use sheets_publisher::CellValue;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(header: Vec<String>) -> Self {
        Self { header, rows: Vec::new() }
    }

    pub fn from_records(records: &[FinalRecord]) -> Self {
        Self {
            header: FinalRecord::COLUMNS.iter().map(|column| column.to_string()).collect(),
            rows: records.iter().map(FinalRecord::to_cells).collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    /// Replace every null cell with `value`
    pub fn fill_nulls(&mut self, value: CellValue) {
        for cell in self.rows.iter_mut().flatten() {
            if cell.is_null() {
                *cell = value.clone();
            }
        }
    }

    /// Write the header and rows as CSV. Null cells become empty fields.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.header)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(CellValue::to_csv_field))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Header followed by data rows, as the spreadsheet sink expects
    pub fn to_rows(&self) -> Vec<Vec<CellValue>> {
        let header = self.header.iter().map(|column| CellValue::from(column.as_str())).collect();
        std::iter::once(header).chain(self.rows.iter().cloned()).collect()
    }
}
