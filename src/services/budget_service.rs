//! Read-only budget summary over the budget tab's fixed range.

use tracing::debug;

use crate::domain::{BudgetRow, BudgetStatus};
use crate::errors::SheetError;
use crate::sheets::{self, SheetStore};

/// Reader for the monthly budget panel.
pub struct BudgetService;

impl BudgetService {
    /// Returns at most the three summary rows, or an empty list when
    /// anything goes wrong. An unreachable sheet and a malformed cell
    /// collapse to the same fallback; the panel shows a generic
    /// refresh prompt either way.
    pub fn read_budget(store: &dyn SheetStore) -> Vec<BudgetRow> {
        match Self::fetch(store) {
            Ok(rows) => rows,
            Err(err) => {
                debug!(%err, "budget read failed, falling back to refresh prompt");
                Vec::new()
            }
        }
    }

    fn fetch(store: &dyn SheetStore) -> sheets::Result<Vec<BudgetRow>> {
        store
            .budget_range()?
            .into_iter()
            .map(parse_row)
            .collect()
    }
}

fn parse_row(cells: Vec<String>) -> sheets::Result<BudgetRow> {
    if cells.len() < 4 {
        return Err(SheetError::MalformedCell(format!(
            "budget row has {} cells, expected 4",
            cells.len()
        )));
    }
    let raw = cells[3].replace('%', "");
    let ratio = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| SheetError::MalformedCell(format!("progress `{}`", cells[3])))?
        / 100.0;

    Ok(BudgetRow {
        category: cells[0].clone(),
        spent: cells[1].clone(),
        limit: cells[2].clone(),
        ratio,
        status: BudgetStatus::classify(ratio),
    })
}
