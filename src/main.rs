//! Thin binary entry point — parses CLI args and delegates to `degree::run()`.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use console::style;

use degree::cli::Cli;
use degree::error::ConvertError;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap renders its own message, usage block included; help and
            // version land here too and are not failures
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match degree::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(ConvertError::Unexpected(e)) => {
            eprintln!(
                "{} {e:#}",
                style("An unexpected error occurred:").red().bold()
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{} {e}", style("Error:").red().bold());
            if matches!(e, ConvertError::Argument(_)) {
                eprintln!();
                eprintln!("{}", Cli::command().render_usage());
            }
            ExitCode::FAILURE
        }
    }
}
