//! In-process sheet store backing tests and offline runs.

use std::sync::Mutex;

use chrono::NaiveDate;

use crate::domain::{EntryRecord, EntryRow, DATE_FORMAT};
use crate::errors::SheetError;
use crate::sheets::{records_from_rows, Result, SheetStore, ENTRY_HEADERS};

/// Mirror of the spreadsheet service's append and sort semantics,
/// with switches to simulate an unreachable service and to count
/// full-table reads.
pub struct MemorySheet {
    inner: Mutex<Inner>,
}

struct Inner {
    entries: Vec<Vec<String>>,
    budget: Vec<Vec<String>>,
    offline: bool,
    records_reads: usize,
}

impl MemorySheet {
    /// An entry tab containing only the header row, and an empty
    /// budget range.
    pub fn new() -> Self {
        let header = ENTRY_HEADERS.iter().map(|h| h.to_string()).collect();
        Self {
            inner: Mutex::new(Inner {
                entries: vec![header],
                budget: Vec::new(),
                offline: false,
                records_reads: 0,
            }),
        }
    }

    /// Seeds one raw entry row below whatever is already present.
    pub fn push_row(&self, cells: [&str; 7]) {
        let mut inner = self.lock();
        inner.entries.push(cells.iter().map(|c| c.to_string()).collect());
    }

    /// Replaces the budget summary range.
    pub fn set_budget_rows(&self, rows: Vec<Vec<String>>) {
        self.lock().budget = rows;
    }

    /// When set, every operation fails the way an unreachable service
    /// would.
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// Number of full-table reads served so far.
    pub fn records_reads(&self) -> usize {
        self.lock().records_reads
    }

    /// Snapshot of the entry tab, header row included.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.lock().entries.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemorySheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn check_online(&self) -> Result<()> {
        if self.offline {
            Err(SheetError::Api("service unreachable".into()))
        } else {
            Ok(())
        }
    }

    /// Index (0-based) of the first row whose key column is empty,
    /// scanning past the last non-empty cell.
    fn first_empty_row(&self) -> usize {
        self.entries
            .iter()
            .rposition(|row| row.first().map_or(false, |cell| !cell.trim().is_empty()))
            .map_or(0, |idx| idx + 1)
    }
}

impl SheetStore for MemorySheet {
    fn key_column(&self) -> Result<Vec<String>> {
        let inner = self.lock();
        inner.check_online()?;
        let mut column: Vec<String> = inner
            .entries
            .iter()
            .map(|row| row.first().cloned().unwrap_or_default())
            .collect();
        while column.last().is_some_and(|cell| cell.trim().is_empty()) {
            column.pop();
        }
        Ok(column)
    }

    fn entry_records(&self) -> Result<Vec<EntryRecord>> {
        let mut inner = self.lock();
        inner.check_online()?;
        inner.records_reads += 1;
        records_from_rows(inner.entries.clone())
    }

    fn append_entry(&self, row: &EntryRow) -> Result<usize> {
        let mut inner = self.lock();
        inner.check_online()?;
        let cells = vec![
            row.what.clone(),
            row.where_at.clone(),
            row.main_cat.clone(),
            row.sub_cat.clone(),
            row.payment.clone(),
            row.amount.to_string(),
            row.date_text.clone(),
        ];
        let target = inner.first_empty_row();
        if target < inner.entries.len() {
            inner.entries[target] = cells;
        } else {
            inner.entries.push(cells);
        }
        Ok(target + 1)
    }

    fn sort_entries_by_date(&self) -> Result<()> {
        let mut inner = self.lock();
        inner.check_online()?;
        if inner.entries.len() > 2 {
            inner.entries[1..].sort_by_key(|row| {
                row.get(6)
                    .and_then(|cell| NaiveDate::parse_from_str(cell, DATE_FORMAT).ok())
                    .unwrap_or(NaiveDate::MAX)
            });
        }
        Ok(())
    }

    fn budget_range(&self) -> Result<Vec<Vec<String>>> {
        let inner = self.lock();
        inner.check_online()?;
        Ok(inner.budget.clone())
    }
}
