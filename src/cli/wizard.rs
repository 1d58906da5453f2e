//! The four-screen entry wizard.

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::{budget_panel, output, CliError};
use crate::services::{EntryService, SubmissionReceipt};
use crate::session::{Session, WizardStep};
use crate::sheets::SheetStore;

/// Drives the session through its steps, submitting on finalize or
/// quick-save, until the user stops logging expenses.
pub fn run(
    session: &mut Session,
    store: &dyn SheetStore,
    spreadsheet_id: &str,
) -> Result<(), CliError> {
    let theme = ColorfulTheme::default();
    loop {
        match session.step() {
            WizardStep::Amount => {
                let amount: f64 = Input::with_theme(&theme)
                    .with_prompt("How much?")
                    .default(0.0)
                    .validate_with(|value: &f64| {
                        if *value < 0.0 {
                            Err("Enter an amount of zero or more")
                        } else {
                            Ok(())
                        }
                    })
                    .interact_text()?;
                // Amounts are entered to the cent.
                session.save_amount((amount * 100.0).round() / 100.0);
            }
            WizardStep::What => {
                let what: String = Input::with_theme(&theme)
                    .with_prompt("What was it?")
                    .allow_empty(true)
                    .interact_text()?;
                session.save_what(what);
            }
            WizardStep::Where => {
                let where_at: String = Input::with_theme(&theme)
                    .with_prompt("Where at?")
                    .allow_empty(true)
                    .interact_text()?;
                let action = Select::with_theme(&theme)
                    .with_prompt("Continue or save right away?")
                    .items(&["Next", "⚡ Quick Save"])
                    .default(0)
                    .interact()?;
                if action == 1 {
                    match EntryService::quick_save(session, store, where_at) {
                        Ok(receipt) => {
                            if !after_submission(&receipt, store, spreadsheet_id)? {
                                return Ok(());
                            }
                        }
                        Err(err) => output::error(err),
                    }
                } else {
                    session.save_where(where_at);
                }
            }
            WizardStep::Details => {
                let options = session.dropdown_options(store)?;
                let draft = session.draft().clone();

                let main_cat = pick(&theme, "Main Category", &options.main_cats, &draft.main_cat)?;
                let sub_cat = pick(&theme, "Sub-Category", &options.sub_cats, &draft.sub_cat)?;
                let payment = pick(&theme, "Payment Method", &options.payments, &draft.payment)?;
                let date: NaiveDate = Input::with_theme(&theme)
                    .with_prompt("Date")
                    .default(session.today())
                    .interact_text()?;

                let finalize = Confirm::with_theme(&theme)
                    .with_prompt("Finalize & Save?")
                    .default(true)
                    .interact()?;
                if !finalize {
                    continue;
                }

                match EntryService::finalize(session, store, &main_cat, &sub_cat, &payment, date) {
                    Ok(receipt) => {
                        if !after_submission(&receipt, store, spreadsheet_id)? {
                            return Ok(());
                        }
                    }
                    // Draft stays intact; the loop lands back on this
                    // step so the user can retry.
                    Err(err) => output::error(err),
                }
            }
        }
    }
}

/// Choice prompt backed by the dropdown lists; falls back to free text
/// while the sheet has no values yet for the column.
fn pick(
    theme: &ColorfulTheme,
    label: &str,
    options: &[String],
    current: &str,
) -> Result<String, CliError> {
    if options.is_empty() {
        let value: String = Input::with_theme(theme)
            .with_prompt(label)
            .default(current.to_string())
            .allow_empty(true)
            .interact_text()?;
        return Ok(value);
    }
    let default = options.iter().position(|option| option == current).unwrap_or(0);
    let index = Select::with_theme(theme)
        .with_prompt(label)
        .items(options)
        .default(default)
        .interact()?;
    Ok(options[index].clone())
}

/// Reports the write, refreshes the budget panel, and asks whether to
/// log another expense.
fn after_submission(
    receipt: &SubmissionReceipt,
    store: &dyn SheetStore,
    spreadsheet_id: &str,
) -> Result<bool, CliError> {
    output::success(format!(
        "Logged ${} to row {}!",
        output::fmt_usd(receipt.amount),
        receipt.row_index
    ));
    budget_panel::render(store, spreadsheet_id)?;
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Log another expense?")
        .default(true)
        .interact()?)
}
