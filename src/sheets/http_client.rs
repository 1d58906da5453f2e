//! Blocking HTTP client for the hosted spreadsheet service.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::Secrets;
use crate::domain::{EntryRecord, EntryRow};
use crate::errors::SheetError;
use crate::sheets::{records_from_rows, Result, SheetStore};

const BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Tab holding one expense per row, columns A through G.
const ENTRY_TAB: &str = "Entries";
/// Numeric id of the entry tab, needed by the sort request.
const ENTRY_SHEET_GID: i64 = 0;
/// Tab holding the monthly budget summary.
const BUDGET_TAB: &str = "Budget";
/// Fixed summary range: three rows of category, spent, limit, progress.
const BUDGET_SUMMARY_RANGE: &str = "A6:D8";

/// Thin wrapper over the spreadsheet service's values API.
///
/// All calls are synchronous and block the current interaction; there
/// is no retry policy. Token refresh is the credential layer's concern
/// and is not handled here.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: Client,
    spreadsheet_id: String,
}

impl SheetsClient {
    pub fn new(secrets: &Secrets) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let bearer = HeaderValue::from_str(&format!("Bearer {}", secrets.token))
            .map_err(|_| SheetError::Api("token is not a valid header value".into()))?;
        headers.insert(AUTHORIZATION, bearer);

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            spreadsheet_id: secrets.spreadsheet_id.clone(),
        })
    }

    /// Browser link to the backing spreadsheet.
    pub fn spreadsheet_url(spreadsheet_id: &str) -> String {
        format!("https://docs.google.com/spreadsheets/d/{spreadsheet_id}/edit")
    }

    fn values_url(&self, range: &str) -> String {
        format!("{BASE_URL}/{}/values/{range}", self.spreadsheet_id)
    }

    fn get_values(&self, range: &str) -> Result<Vec<Vec<String>>> {
        let url = self.values_url(range);
        debug!(%range, "reading sheet range");
        let response: ValueRange = self
            .http
            .get(&url)
            .send()?
            .error_for_status()?
            .json()?;
        let rows = response
            .values
            .unwrap_or_default()
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect();
        Ok(rows)
    }
}

impl SheetStore for SheetsClient {
    fn key_column(&self) -> Result<Vec<String>> {
        let rows = self.get_values(&format!("{ENTRY_TAB}!A:A"))?;
        Ok(rows
            .into_iter()
            .map(|row| row.into_iter().next().unwrap_or_default())
            .collect())
    }

    fn entry_records(&self) -> Result<Vec<EntryRecord>> {
        let rows = self.get_values(&format!("{ENTRY_TAB}!A1:G"))?;
        records_from_rows(rows)
    }

    fn append_entry(&self, row: &EntryRow) -> Result<usize> {
        let url = format!(
            "{}:append?valueInputOption=USER_ENTERED",
            self.values_url(&format!("{ENTRY_TAB}!A1:G1"))
        );
        let body = json!({
            "values": [[
                row.what,
                row.where_at,
                row.main_cat,
                row.sub_cat,
                row.payment,
                row.amount,
                row.date_text,
            ]],
        });
        debug!("appending entry row");
        let response: AppendResponse = self
            .http
            .post(&url)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;
        let range = response
            .updates
            .and_then(|updates| updates.updated_range)
            .ok_or_else(|| SheetError::Api("append response missing updated range".into()))?;
        parse_row_index(&range)
    }

    fn sort_entries_by_date(&self) -> Result<()> {
        let url = format!("{BASE_URL}/{}:batchUpdate", self.spreadsheet_id);
        let body = json!({
            "requests": [{
                "sortRange": {
                    "range": {
                        "sheetId": ENTRY_SHEET_GID,
                        "startRowIndex": 1,
                        "startColumnIndex": 0,
                        "endColumnIndex": 7,
                    },
                    "sortSpecs": [{
                        "dimensionIndex": 6,
                        "sortOrder": "ASCENDING",
                    }],
                }
            }],
        });
        debug!("sorting entry tab by date");
        self.http
            .post(&url)
            .json(&body)
            .send()?
            .error_for_status()?;
        Ok(())
    }

    fn budget_range(&self) -> Result<Vec<Vec<String>>> {
        self.get_values(&format!("{BUDGET_TAB}!{BUDGET_SUMMARY_RANGE}"))
    }
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    values: Option<Vec<Vec<Value>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendResponse {
    updates: Option<AppendUpdates>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendUpdates {
    updated_range: Option<String>,
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Extracts the 1-based row index from a range like `Entries!A11:G11`.
fn parse_row_index(range: &str) -> Result<usize> {
    let cells = range.split_once('!').map(|(_, rest)| rest).unwrap_or(range);
    let first = cells.split(':').next().unwrap_or(cells);
    let digits: String = first.chars().filter(char::is_ascii_digit).collect();
    digits
        .parse()
        .map_err(|_| SheetError::MalformedCell(format!("unparseable range `{range}`")))
}
