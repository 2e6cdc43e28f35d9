//! Cell values shared by CSV export and spreadsheet upload

use serde_json::Value;

/// A single table cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Missing value, e.g. a column a left join found nothing for
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Render for a CSV field. Nulls become empty fields, booleans are `True`/`False` and
    /// whole floats keep a trailing `.0`, so the file reads the same as a pandas export.
    pub fn to_csv_field(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(true) => "True".to_string(),
            CellValue::Bool(false) => "False".to_string(),
            CellValue::Int(value) => value.to_string(),
            CellValue::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                format!("{:.1}", value)
            }
            CellValue::Float(value) => value.to_string(),
            CellValue::Text(value) => value.clone(),
        }
    }

    /// Render as a Sheets API value
    pub fn to_json(&self) -> Value {
        match self {
            CellValue::Null => Value::String(String::new()),
            CellValue::Bool(value) => Value::Bool(*value),
            CellValue::Int(value) => Value::from(*value),
            // Non-finite floats have no JSON form
            CellValue::Float(value) => serde_json::Number::from_f64(*value)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(value.to_string())),
            CellValue::Text(value) => Value::String(value.clone()),
        }
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Int(i64::from(value))
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Null)
    }
}
