//! Shared input parsing and output helpers for the cambio CLI.

use anyhow::{Context, Result};
use cambio_lib::prelude::*;
use chrono::NaiveDate;
use std::io;

/// Parses a `YYYY-MM-DD` date argument.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("Invalid date: {s}"))
}

/// Validates the base and target symbols against the supported set.
pub(crate) fn validate_symbols<'a>(
    currencies: &Currencies,
    base: &'a str,
    symbols: impl IntoIterator<Item = &'a str>,
) -> Result<(), CurrencyError> {
    currencies.validate(base)?;
    for symbol in symbols {
        currencies.validate(symbol)?;
    }
    Ok(())
}

/// Prints each record as one JSON line on stdout.
pub(crate) fn print_records(records: &[RateRecord]) -> Result<()> {
    write_records(records, io::stdout().lock())?;
    Ok(())
}
