//! Per-session wizard state.

use chrono::NaiveDate;
use tracing::debug;

use crate::cache::{DropdownOptions, OptionCache};
use crate::domain::EntryDraft;
use crate::sheets::{Result, SheetStore};

/// The four screens of the entry wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Amount,
    What,
    Where,
    Details,
}

/// Explicit context object for one interactive session.
///
/// Holds the wizard step, the accumulated draft, the password flag and
/// the dropdown cache. Handlers mutate the session directly; rendering
/// is a projection of this state. Transitions only move forward one
/// step at a time, or reset to the first step via [`Session::restart`].
pub struct Session {
    step: WizardStep,
    draft: EntryDraft,
    today: NaiveDate,
    authenticated: bool,
    options: OptionCache,
}

impl Session {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_cache(today, OptionCache::new())
    }

    /// Builds a session around a preconfigured cache (tests shorten
    /// the TTL through this).
    pub fn with_cache(today: NaiveDate, options: OptionCache) -> Self {
        Self {
            step: WizardStep::Amount,
            draft: EntryDraft::new(today),
            today,
            authenticated: false,
            options,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &EntryDraft {
        &self.draft
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Compares the entered password against the shared secret and
    /// remembers the outcome for the rest of the session. The entered
    /// text is not retained.
    pub fn authenticate(&mut self, entered: &str, expected: &str) -> bool {
        self.authenticated = entered == expected;
        self.authenticated
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Amount-step handler: stores the amount and advances.
    pub fn save_amount(&mut self, amount: f64) {
        if self.step == WizardStep::Amount {
            self.draft.amount = amount;
            self.step = WizardStep::What;
        }
    }

    /// What-step handler: stores the description and advances. Empty
    /// text is accepted.
    pub fn save_what(&mut self, what: String) {
        if self.step == WizardStep::What {
            self.draft.what = what;
            self.step = WizardStep::Where;
        }
    }

    /// Where-step handler: stores the merchant and advances. Empty
    /// text is accepted.
    pub fn save_where(&mut self, where_at: String) {
        if self.step == WizardStep::Where {
            self.draft.where_at = where_at;
            self.step = WizardStep::Details;
        }
    }

    /// Merchant text merged without advancing; the quick-save path
    /// finalizes straight from the Where step.
    pub fn stage_where(&mut self, where_at: String) {
        self.draft.where_at = where_at;
    }

    /// Dropdown lists for the Details step, served from the
    /// session-owned cache.
    pub fn dropdown_options(&mut self, store: &dyn SheetStore) -> Result<DropdownOptions> {
        self.options.options(store)
    }

    /// Unconditionally resets the wizard: step back to Amount, draft
    /// to its defaults, dropdown cache invalidated so new categories
    /// show up on the next read. The password flag survives.
    pub fn restart(&mut self) {
        debug!("wizard restart");
        self.step = WizardStep::Amount;
        self.draft = EntryDraft::new(self.today);
        self.options.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn session() -> Session {
        Session::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn steps_accumulate_the_entered_values() {
        let mut session = session();
        session.save_amount(12.5);
        session.save_what("Coffee".into());
        session.save_where("Cafe X".into());

        assert_eq!(session.step(), WizardStep::Details);
        assert_eq!(session.draft().amount, 12.5);
        assert_eq!(session.draft().what, "Coffee");
        assert_eq!(session.draft().where_at, "Cafe X");
    }

    #[test]
    fn handlers_only_fire_on_their_own_step() {
        let mut session = session();
        session.save_what("too early".into());
        assert_eq!(session.step(), WizardStep::Amount);
        assert_eq!(session.draft().what, "");

        session.save_amount(1.0);
        session.save_amount(99.0);
        assert_eq!(session.draft().amount, 1.0);
        assert_eq!(session.step(), WizardStep::What);
    }

    #[test]
    fn empty_text_still_advances() {
        let mut session = session();
        session.save_amount(0.0);
        session.save_what(String::new());
        session.save_where(String::new());
        assert_eq!(session.step(), WizardStep::Details);
    }

    #[test]
    fn restart_resets_step_and_draft_but_not_the_password_flag() {
        let mut session = session();
        assert!(session.authenticate("hunter2", "hunter2"));
        session.save_amount(12.5);
        session.save_what("Coffee".into());

        session.restart();
        assert_eq!(session.step(), WizardStep::Amount);
        assert_eq!(
            *session.draft(),
            crate::domain::EntryDraft::new(session.today())
        );
        assert!(session.is_authenticated());
    }

    #[test]
    fn authenticate_rejects_a_wrong_password() {
        let mut session = session();
        assert!(!session.authenticate("guess", "hunter2"));
        assert!(!session.is_authenticated());
    }
}
