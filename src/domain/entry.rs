//! Domain types for a single expense entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used in the entry sheet's date column.
pub const DATE_FORMAT: &str = "%m/%d/%y";

/// Category preselected for a draft before the user picks one.
pub const DEFAULT_MAIN_CATEGORY: &str = "General Spending";

/// Payment method preselected for a draft before the user picks one.
pub const DEFAULT_PAYMENT: &str = "Credit Card";

/// Accumulated wizard input for one expense.
///
/// Owned exclusively by the active session; one field is filled in per
/// wizard step and the whole draft is reset after a successful
/// submission or an explicit restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub amount: f64,
    pub what: String,
    pub where_at: String,
    pub main_cat: String,
    pub sub_cat: String,
    pub payment: String,
    pub date: NaiveDate,
}

impl EntryDraft {
    /// A fresh draft at its documented defaults, dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            amount: 0.0,
            what: String::new(),
            where_at: String::new(),
            main_cat: DEFAULT_MAIN_CATEGORY.to_string(),
            sub_cat: String::new(),
            payment: DEFAULT_PAYMENT.to_string(),
            date: today,
        }
    }
}

/// One row of the entry sheet, columns A through G, ready to write.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRow {
    pub what: String,
    pub where_at: String,
    pub main_cat: String,
    pub sub_cat: String,
    pub payment: String,
    pub amount: f64,
    pub date_text: String,
}

impl EntryRow {
    /// Composes the row from the draft's free-text fields plus the
    /// categorical fields and date chosen on the final step.
    pub fn compose(
        draft: &EntryDraft,
        main_cat: &str,
        sub_cat: &str,
        payment: &str,
        date: NaiveDate,
    ) -> Self {
        Self {
            what: draft.what.clone(),
            where_at: draft.where_at.clone(),
            main_cat: main_cat.to_string(),
            sub_cat: sub_cat.to_string(),
            payment: payment.to_string(),
            amount: draft.amount,
            date_text: date.format(DATE_FORMAT).to_string(),
        }
    }
}

/// A row read back from the entry sheet, keyed by its header names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryRecord {
    pub what: String,
    pub where_at: String,
    pub main_cat: String,
    pub sub_cat: String,
    pub payment: String,
    pub amount: String,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn new_draft_uses_documented_defaults() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let draft = EntryDraft::new(today);
        assert_eq!(draft.amount, 0.0);
        assert_eq!(draft.what, "");
        assert_eq!(draft.where_at, "");
        assert_eq!(draft.main_cat, "General Spending");
        assert_eq!(draft.sub_cat, "");
        assert_eq!(draft.payment, "Credit Card");
        assert_eq!(draft.date, today);
    }

    #[test]
    fn compose_formats_date_as_mm_dd_yy() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut draft = EntryDraft::new(today);
        draft.amount = 45.0;
        draft.what = "Groceries".into();
        draft.where_at = "Market".into();

        let row = EntryRow::compose(
            &draft,
            "General Spending",
            "Food",
            "Credit Card",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        );
        assert_eq!(row.date_text, "06/01/24");
        assert_eq!(row.amount, 45.0);
        assert_eq!(row.what, "Groceries");
    }
}
