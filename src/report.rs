//! Renders and prints the single result line:
//! `<input>°<scale> = <converted>°<scale>`.

use std::io::{self, Write};

use anyhow::Context;

use crate::convert::Reading;
use crate::error::Result;

/// Format the input value the way it was given. Finite integral values keep
/// one trailing decimal (`25` renders as `25.0`); everything else uses the
/// shortest display form (`36.6`, `inf`).
fn display_value(value: f64) -> String {
    if value.fract() == 0.0 {
        // fract() is NaN for NaN and the infinities, so only finite
        // whole numbers take this branch
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Render the result line. The converted value is rounded to `precision`
/// decimal places by the formatter (ties to even); the input value is never
/// rounded.
pub fn render(input: &Reading, converted: &Reading, precision: u8) -> String {
    let precision = usize::from(precision);
    format!(
        "{}°{} = {:.precision$}°{}",
        display_value(input.value),
        input.scale,
        converted.value,
        converted.scale,
    )
}

/// Print the result line to stdout.
pub fn print(input: &Reading, converted: &Reading, precision: u8) -> Result<()> {
    let line = render(input, converted, precision);
    writeln!(io::stdout(), "{line}").context("failed to write the result line")?;
    Ok(())
}
