//! CLI argument parsing with clap. Defines the `Cli` struct and the mutually
//! exclusive pair of temperature flags.

use clap::{Args, Parser};

use crate::convert::{Reading, Scale};
use crate::error::{ConvertError, Result};

/// Highest number of decimal places the formatter will print.
pub const MAX_PRECISION: u8 = 5;

#[derive(Parser, Debug)]
#[command(
    name = "degree",
    version,
    about = "Convert a temperature between Celsius and Fahrenheit",
    after_help = "Examples:\n  degree -c 25\n  degree --celsius 25\n  degree -f 77\n  degree --fahrenheit 77\n  degree -c 100 --precision 0"
)]
pub struct Cli {
    #[command(flatten)]
    pub input: InputArgs,

    /// Decimal places for the converted value (0-5)
    #[arg(short, long, default_value_t = 2, value_name = "DIGITS")]
    pub precision: u8,
}

/// The temperature to convert — the flag used carries the scale.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Temperature in Celsius to convert to Fahrenheit
    #[arg(short, long, value_name = "TEMP", allow_negative_numbers = true)]
    pub celsius: Option<f64>,

    /// Temperature in Fahrenheit to convert to Celsius
    #[arg(short, long, value_name = "TEMP", allow_negative_numbers = true)]
    pub fahrenheit: Option<f64>,
}

impl Cli {
    /// Range-check settings that token parsing does not cover.
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(ConvertError::Argument(format!(
                "precision must be between 0 and {MAX_PRECISION}, got {}",
                self.precision
            )));
        }
        Ok(())
    }
}

impl InputArgs {
    /// Build the reading from whichever flag was supplied. The argument
    /// group guarantees exactly one flag for parsed invocations; hand-built
    /// values go through the same checks.
    pub fn reading(&self) -> Result<Reading> {
        match (self.celsius, self.fahrenheit) {
            (Some(value), None) => Ok(Reading::new(value, Scale::Celsius)),
            (None, Some(value)) => Ok(Reading::new(value, Scale::Fahrenheit)),
            (Some(_), Some(_)) => Err(ConvertError::Argument(
                "--celsius and --fahrenheit cannot be combined; give exactly one".to_string(),
            )),
            (None, None) => Err(ConvertError::Argument(
                "one of --celsius or --fahrenheit is required".to_string(),
            )),
        }
    }
}
