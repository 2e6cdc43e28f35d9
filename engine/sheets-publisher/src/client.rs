//! Google Sheets API integration

use crate::config::SheetsConfig;
use crate::sink::SpreadsheetSink;
use crate::values::CellValue;
use crate::{Result, SheetsError};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

const SPREADSHEET_MIME_TYPE: &str = "application/vnd.google-apps.spreadsheet";

/// Google Sheets client authenticated with a pre-issued bearer token
#[derive(Debug)]
pub struct GoogleSheetsClient {
    config: SheetsConfig,
    client: reqwest::Client,
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct DriveFileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMetadata {
    #[serde(default)]
    sheets: Vec<Worksheet>,
}

#[derive(Debug, Deserialize)]
struct Worksheet {
    properties: WorksheetProperties,
}

#[derive(Debug, Deserialize)]
struct WorksheetProperties {
    title: String,
}

impl GoogleSheetsClient {
    /// Create a client, reading the access token from the configured environment variable
    pub fn new(config: SheetsConfig) -> Result<Self> {
        let access_token = std::env::var(&config.access_token_env)
            .map_err(|_| SheetsError::MissingToken { env: config.access_token_env.clone() })?;
        Self::with_token(config, access_token)
    }

    pub fn with_token(config: SheetsConfig, access_token: String) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { config, client, access_token })
    }

    /// Find a spreadsheet id by its exact name
    pub async fn open_by_name(&self, name: &str) -> Result<String> {
        let url = format!("{}/files", self.config.drive_api_base_url.trim_end_matches('/'));
        let query = drive_name_query(name);
        let request =
            self.client.get(&url).query(&[("q", query.as_str()), ("fields", "files(id,name)")]);

        let files: DriveFileList = serde_json::from_value(self.send(request).await?)?;
        files
            .files
            .into_iter()
            .next()
            .map(|file| file.id)
            .ok_or_else(|| SheetsError::SpreadsheetNotFound { name: name.to_string() })
    }

    /// Title of the first worksheet in the spreadsheet
    pub async fn first_worksheet(&self, spreadsheet_id: &str, name: &str) -> Result<String> {
        let url = format!("{}?fields=sheets.properties.title", self.spreadsheet_url(spreadsheet_id));
        let metadata: SpreadsheetMetadata =
            serde_json::from_value(self.send(self.client.get(&url)).await?)?;

        metadata
            .sheets
            .into_iter()
            .next()
            .map(|sheet| sheet.properties.title)
            .ok_or_else(|| SheetsError::NoWorksheets { name: name.to_string() })
    }

    pub async fn clear(&self, spreadsheet_id: &str, worksheet: &str) -> Result<()> {
        let url = format!("{}/values:batchClear", self.spreadsheet_url(spreadsheet_id));
        let body = json!({ "ranges": [quote_worksheet(worksheet)] });
        self.send(self.client.post(&url).json(&body)).await?;
        Ok(())
    }

    pub async fn write_rows(
        &self,
        spreadsheet_id: &str,
        worksheet: &str,
        rows: &[Vec<CellValue>],
    ) -> Result<()> {
        let url = format!("{}/values:batchUpdate", self.spreadsheet_url(spreadsheet_id));
        let body = update_body(worksheet, rows);
        self.send(self.client.post(&url).json(&body)).await?;
        Ok(())
    }

    fn spreadsheet_url(&self, spreadsheet_id: &str) -> String {
        format!(
            "{}/spreadsheets/{}",
            self.config.sheets_api_base_url.trim_end_matches('/'),
            spreadsheet_id
        )
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let response = request.bearer_auth(&self.access_token).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SheetsError::Api { status: status.as_u16(), message: error_text });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SpreadsheetSink for GoogleSheetsClient {
    async fn replace_contents(&self, sheet_name: &str, rows: &[Vec<CellValue>]) -> Result<()> {
        let spreadsheet_id = self.open_by_name(sheet_name).await?;
        let worksheet = self.first_worksheet(&spreadsheet_id, sheet_name).await?;
        debug!("Resolved spreadsheet {} to id {} worksheet {}", sheet_name, spreadsheet_id, worksheet);

        self.clear(&spreadsheet_id, &worksheet).await?;
        self.write_rows(&spreadsheet_id, &worksheet, rows).await?;

        info!("Wrote {} rows to spreadsheet {}", rows.len(), sheet_name);
        Ok(())
    }
}

fn drive_name_query(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('\'', "\\'");
    format!("name = '{}' and mimeType = '{}' and trashed = false", escaped, SPREADSHEET_MIME_TYPE)
}

fn quote_worksheet(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

fn update_body(worksheet: &str, rows: &[Vec<CellValue>]) -> Value {
    let values: Vec<Vec<Value>> =
        rows.iter().map(|row| row.iter().map(CellValue::to_json).collect()).collect();

    json!({
        "valueInputOption": "RAW",
        "data": [{
            "range": format!("{}!A1", quote_worksheet(worksheet)),
            "majorDimension": "ROWS",
            "values": values,
        }],
    })
}
