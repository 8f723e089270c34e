use std::process::ExitCode;

use clap::Parser;
use pace_splits::cli::{self, CliArgs};
use pace_splits::logging;

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();
    logging::init("warn");

    let args = match CliArgs::try_parse_from(cli::normalize_args(std::env::args())) {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => {
            // --help / --version
            print!("{}", e);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            println!("{}", e);
            println!("{}", cli::usage());
            return ExitCode::FAILURE;
        }
    };

    match cli::run(&args) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "pace calculation failed");
            println!("Error: {}", e);
            println!("{}", cli::usage());
            ExitCode::FAILURE
        }
    }
}
