//! History command implementation.
//!
//! Retrieves historical exchange rates for a base currency against one or
//! more other currencies and emits them as JSONL, on stdout and
//! optionally to a file.

use anyhow::{Context, Result};
use cambio_lib::prelude::*;
use chrono::NaiveDate;
use log::info;
use std::path::PathBuf;

use crate::display::{parse_date, print_records, validate_symbols};

#[allow(clippy::too_many_arguments)]
pub(crate) async fn history(
    start: Option<&str>,
    end: Option<&str>,
    base: &str,
    symbols: &[String],
    output: Option<PathBuf>,
    today: NaiveDate,
    quiet: bool,
) -> Result<()> {
    let start = match start {
        Some(s) => parse_date(s)?,
        None => today,
    };
    let end = match end {
        Some(s) => parse_date(s)?,
        None => today,
    };
    let window = DateWindow::new(start, end, today)?;

    let client = ApiClient::with_defaults()?;
    let currencies = client
        .currencies()
        .await
        .context("Cannot get currency list")?;
    validate_symbols(&currencies, base, symbols.iter().map(String::as_str))?;

    let path = url::history_path(&window, base, symbols);
    info!("Requesting {} ({} days)", window, window.total_days());

    let raw = client.fetch(&path).await?;
    let payload = match raw {
        Some(value) => RatesPayload::from_value(value).context("Malformed API response")?,
        None => None,
    };
    let records = normalize_history(payload, &window)?;

    print_records(&records)?;

    if let Some(stem) = output {
        let written = write_records_file(&records, &stem)?;
        if !quiet {
            println!("Output written to: {}", written.display());
        }
    }

    Ok(())
}
