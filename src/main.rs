// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use multab::{app, cli, logging};
use multab_shared_kernel::MultabError;

fn main() -> ExitCode {
    let config = match cli::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };
    logging::init(config.verbosity);
    log::debug!("config: {config:?}");

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<MultabError>().and_then(MultabError::as_validation) {
                Some(validation) => eprintln!("error: {validation}"),
                None => eprintln!("error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
