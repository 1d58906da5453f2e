//! Read-only budget summary types.

use std::fmt;

/// Spending status for one budget category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Normal,
    Approaching,
    Exceeded,
}

impl BudgetStatus {
    /// Classifies a progress ratio (spent divided by limit).
    pub fn classify(ratio: f64) -> Self {
        if ratio >= 1.0 {
            BudgetStatus::Exceeded
        } else if ratio >= 0.8 {
            BudgetStatus::Approaching
        } else {
            BudgetStatus::Normal
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetStatus::Normal => "Normal",
            BudgetStatus::Approaching => "Approaching",
            BudgetStatus::Exceeded => "Exceeded",
        };
        f.write_str(label)
    }
}

/// One category from the budget tab. Presentational only; spent and
/// limit stay as the currency text the sheet renders.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRow {
    pub category: String,
    pub spent: String,
    pub limit: String,
    pub ratio: f64,
    pub status: BudgetStatus,
}

impl BudgetRow {
    /// Fraction of the progress bar to fill, clamped to a full bar.
    pub fn bar_fraction(&self) -> f64 {
        self.ratio.min(1.0)
    }

    /// Unclamped percentage caption, truncated toward zero.
    pub fn percent_text(&self) -> String {
        format!("{}%", (self.ratio * 100.0) as i64)
    }
}
