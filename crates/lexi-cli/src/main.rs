#![warn(clippy::all, rust_2018_idioms)]

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = lexi_cli::cli::Cli::parse();

    if let Err(e) = lexi_cli::tracing::init(&args) {
        eprintln!("Failed to start tracing: {e}");
    }

    let rt = match lexi_cli::runtime::create_runtime() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(lexi_cli::run(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
