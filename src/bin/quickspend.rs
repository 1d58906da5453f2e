use std::process::ExitCode;

use chrono::Local;

use quickspend::cli::{self, output};
use quickspend::config::Secrets;
use quickspend::session::Session;
use quickspend::sheets::SheetsClient;

fn main() -> ExitCode {
    quickspend::init();

    let secrets = match Secrets::load() {
        Ok(secrets) => secrets,
        Err(err) => {
            output::error(err);
            return ExitCode::FAILURE;
        }
    };
    let store = match SheetsClient::new(&secrets) {
        Ok(store) => store,
        Err(err) => {
            output::error(err);
            return ExitCode::FAILURE;
        }
    };
    let mut session = Session::new(Local::now().date_naive());

    match cli::run(&secrets, &store, &mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(err);
            ExitCode::FAILURE
        }
    }
}
