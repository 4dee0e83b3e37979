//! Degree — convert a temperature between Celsius and Fahrenheit.
//! Exposes the modules and contains the core `run()` pipeline: validate,
//! build the reading, convert, print.

pub mod cli;
pub mod convert;
pub mod error;
pub mod report;

use cli::Cli;
use error::Result;

/// Run the CLI with parsed arguments.
pub fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    let reading = cli.input.reading()?;
    let converted = convert::convert(reading);
    report::print(&reading, &converted, cli.precision)
}
