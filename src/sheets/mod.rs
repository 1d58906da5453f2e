pub mod http_client;
pub mod memory;

use crate::{
    domain::{EntryRecord, EntryRow},
    errors::SheetError,
};

pub use http_client::SheetsClient;
pub use memory::MemorySheet;

pub type Result<T> = std::result::Result<T, SheetError>;

/// Header row of the entry tab, columns A through G in order.
pub(crate) const ENTRY_HEADERS: [&str; 7] = [
    "What",
    "Where",
    "Main Category",
    "Sub-Category",
    "Payment Method",
    "Amount",
    "Date",
];

/// Abstraction over the two tabs of the shared spreadsheet.
///
/// The entry tab holds one expense per row in columns A through G with
/// a header row on top; the budget tab exposes a fixed summary range.
pub trait SheetStore: Send + Sync {
    /// Values of the entry tab's key column (column A), from the top
    /// of the sheet through the last non-empty cell.
    fn key_column(&self) -> Result<Vec<String>>;

    /// All entry rows below the header, keyed by the header names.
    fn entry_records(&self) -> Result<Vec<EntryRecord>>;

    /// Appends the row at the first empty row of the entry tab and
    /// returns the 1-based row index it landed on. The write covers
    /// columns A through G in one operation, letting the service parse
    /// dates and numbers the way a typed-in value would be.
    fn append_entry(&self, row: &EntryRow) -> Result<usize>;

    /// Re-sorts the entry tab ascending by the date column, leaving
    /// the header row in place.
    fn sort_entries_by_date(&self) -> Result<()>;

    /// Raw cells of the budget tab's fixed summary range.
    fn budget_range(&self) -> Result<Vec<Vec<String>>>;
}

/// Maps raw rows (header first) onto records keyed by header names.
pub(crate) fn records_from_rows(rows: Vec<Vec<String>>) -> Result<Vec<EntryRecord>> {
    let mut rows = rows.into_iter();
    let header = match rows.next() {
        Some(header) => header,
        None => return Ok(Vec::new()),
    };

    let index_of = |name: &str| -> Result<usize> {
        header
            .iter()
            .position(|cell| cell == name)
            .ok_or_else(|| SheetError::MissingColumn(name.to_string()))
    };
    let what = index_of(ENTRY_HEADERS[0])?;
    let where_at = index_of(ENTRY_HEADERS[1])?;
    let main_cat = index_of(ENTRY_HEADERS[2])?;
    let sub_cat = index_of(ENTRY_HEADERS[3])?;
    let payment = index_of(ENTRY_HEADERS[4])?;
    let amount = index_of(ENTRY_HEADERS[5])?;
    let date = index_of(ENTRY_HEADERS[6])?;

    let cell = |row: &[String], idx: usize| row.get(idx).cloned().unwrap_or_default();
    Ok(rows
        .map(|row| EntryRecord {
            what: cell(&row, what),
            where_at: cell(&row, where_at),
            main_cat: cell(&row, main_cat),
            sub_cat: cell(&row, sub_cat),
            payment: cell(&row, payment),
            amount: cell(&row, amount),
            date: cell(&row, date),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Vec<String> {
        ENTRY_HEADERS.iter().map(|h| h.to_string()).collect()
    }

    #[test]
    fn records_require_known_headers() {
        let rows = vec![
            vec!["What".to_string(), "Where".to_string()],
            vec!["Coffee".to_string(), "Cafe".to_string()],
        ];
        let err = records_from_rows(rows).expect_err("missing headers must fail");
        assert!(matches!(err, SheetError::MissingColumn(_)));
    }

    #[test]
    fn records_map_by_header_position() {
        let rows = vec![
            header(),
            vec![
                "Coffee".to_string(),
                "Cafe X".to_string(),
                "General Spending".to_string(),
                "Food".to_string(),
                "Credit Card".to_string(),
                "4.5".to_string(),
                "06/01/24".to_string(),
            ],
        ];
        let records = records_from_rows(rows).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].main_cat, "General Spending");
        assert_eq!(records[0].payment, "Credit Card");
    }

    #[test]
    fn short_rows_pad_with_empty_cells() {
        let rows = vec![header(), vec!["Coffee".to_string()]];
        let records = records_from_rows(rows).unwrap();
        assert_eq!(records[0].what, "Coffee");
        assert_eq!(records[0].date, "");
    }
}
