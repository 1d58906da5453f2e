//! Shared-password gate shown before anything else.

use dialoguer::{theme::ColorfulTheme, Password};

use crate::cli::{output, CliError};
use crate::session::Session;

/// Prompts until the entered password matches the shared secret. A
/// wrong guess shows an inline error and re-prompts; there is no
/// lockout or rate limiting. The entered text is dropped right after
/// the comparison.
pub fn check_password(session: &mut Session, expected: &str) -> Result<(), CliError> {
    while !session.is_authenticated() {
        let entered = Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Please enter the password")
            .interact()?;
        if !session.authenticate(&entered, expected) {
            output::error("Password incorrect");
        }
    }
    Ok(())
}
