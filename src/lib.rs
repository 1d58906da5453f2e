//! Quickspend collects a single expense through a short step-by-step
//! wizard, appends it to a shared spreadsheet, and renders a read-only
//! monthly budget summary pulled from a second tab of the same sheet.

pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod session;
pub mod sheets;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("quickspend=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("Quickspend tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
