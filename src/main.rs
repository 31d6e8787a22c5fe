//! `biq` binary entry point.

use std::process::ExitCode;

use benefits_iq_engine::cli_app::{self, Cli};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli_app::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("biq: {error}");
            ExitCode::FAILURE
        }
    }
}
