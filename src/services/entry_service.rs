//! Finalizes a wizard draft into an appended sheet row.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::domain::EntryRow;
use crate::services::{ServiceError, ServiceResult};
use crate::session::{Session, WizardStep};
use crate::sheets::SheetStore;

/// What the front-end reports after a successful submission.
///
/// The row index is the append position computed before the write;
/// the re-sort that follows can move the row, so the index may be
/// stale by the time it is shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmissionReceipt {
    pub row_index: usize,
    pub amount: f64,
}

/// Submission flow for completed wizard drafts.
pub struct EntryService;

impl EntryService {
    /// Writes the draft with the categorical fields chosen on the
    /// Details step, re-sorts the sheet by date, and resets the
    /// session. Any store failure propagates and leaves the draft
    /// intact so the user can retry.
    pub fn finalize(
        session: &mut Session,
        store: &dyn SheetStore,
        main_cat: &str,
        sub_cat: &str,
        payment: &str,
        date: NaiveDate,
    ) -> ServiceResult<SubmissionReceipt> {
        if session.step() != WizardStep::Details {
            return Err(ServiceError::Invalid(
                "finalize is only available on the details step".into(),
            ));
        }
        Self::submit(session, store, main_cat, sub_cat, payment, date)
    }

    /// Quick-save shortcut from the Where step: merges the pending
    /// merchant text and submits immediately with the draft's
    /// remaining defaults, dated today.
    pub fn quick_save(
        session: &mut Session,
        store: &dyn SheetStore,
        where_at: String,
    ) -> ServiceResult<SubmissionReceipt> {
        if session.step() != WizardStep::Where {
            return Err(ServiceError::Invalid(
                "quick save is only available on the where step".into(),
            ));
        }
        session.stage_where(where_at);
        let draft = session.draft().clone();
        let today = session.today();
        Self::submit(
            session,
            store,
            &draft.main_cat,
            &draft.sub_cat,
            &draft.payment,
            today,
        )
    }

    fn submit(
        session: &mut Session,
        store: &dyn SheetStore,
        main_cat: &str,
        sub_cat: &str,
        payment: &str,
        date: NaiveDate,
    ) -> ServiceResult<SubmissionReceipt> {
        let row = EntryRow::compose(session.draft(), main_cat, sub_cat, payment, date);

        let key_column = store.key_column()?;
        let next_row = key_column
            .iter()
            .filter(|cell| !cell.trim().is_empty())
            .count()
            + 1;

        let landed = store.append_entry(&row)?;
        if landed != next_row {
            debug!(landed, next_row, "append landed away from the computed row");
        }
        store.sort_entries_by_date()?;

        info!(row = next_row, amount = row.amount, "expense logged");
        session.restart();
        Ok(SubmissionReceipt {
            row_index: next_row,
            amount: row.amount,
        })
    }
}
