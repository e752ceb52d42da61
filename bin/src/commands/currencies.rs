//! Currencies command implementation.
//!
//! Lists the currency codes the API currently supports.

use anyhow::{Context, Result};
use cambio_lib::prelude::*;

pub(crate) async fn currencies() -> Result<()> {
    let client = ApiClient::with_defaults()?;
    let currencies = client
        .currencies()
        .await
        .context("Cannot get currency list")?;

    println!("{:<8} {}", "CODE", "NAME");
    println!("{}", "-".repeat(40));

    for (code, name) in currencies.iter() {
        println!("{code:<8} {name}");
    }

    println!("\nTotal: {} currencies", currencies.len());
    Ok(())
}
