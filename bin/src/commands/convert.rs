//! Convert command implementation.
//!
//! Converts an amount from one currency to another on a given date and
//! prints the resulting value.

use anyhow::{Context, Result};
use cambio_lib::prelude::*;
use chrono::NaiveDate;

use crate::display::{parse_date, validate_symbols};

pub(crate) async fn convert(
    date: Option<&str>,
    base: &str,
    symbol: &str,
    amount: f64,
    today: NaiveDate,
) -> Result<()> {
    let date = match date {
        Some(s) => parse_date(s)?,
        None => today,
    };
    validate_date(date, today)?;

    let client = ApiClient::with_defaults()?;
    let currencies = client
        .currencies()
        .await
        .context("Cannot get currency list")?;
    validate_symbols(&currencies, base, [symbol])?;

    let path = url::conversion_path(date, base, symbol, amount);
    // A conversion has no empty outcome; an unpublished date is an error.
    let value = client
        .fetch(&path)
        .await?
        .with_context(|| format!("No exchange rates published for {date}"))?;
    let payload = RatesPayload::from_value(value)
        .context("Malformed API response")?
        .with_context(|| format!("No exchange rates published for {date}"))?;
    let rate = normalize_conversion(payload, symbol)?;

    println!("{rate}");
    Ok(())
}
