mod budget_panel;
mod gate;
pub mod output;
mod wizard;

use crate::config::Secrets;
use crate::errors::SheetError;
use crate::services::ServiceError;
use crate::session::Session;
use crate::sheets::SheetStore;

/// Errors surfaced by the interactive front-end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Prompt error: {0}")]
    Dialog(#[from] dialoguer::Error),
    #[error(transparent)]
    Sheet(#[from] SheetError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs the password gate, the budget panel, and the entry wizard
/// until the user chooses to stop.
pub fn run(
    secrets: &Secrets,
    store: &dyn SheetStore,
    session: &mut Session,
) -> Result<(), CliError> {
    output::section("Quickspend");
    gate::check_password(session, &secrets.password)?;
    budget_panel::render(store, &secrets.spreadsheet_id)?;
    wizard::run(session, store, &secrets.spreadsheet_id)
}
