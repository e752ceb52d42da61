//! Normalized rate record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single exchange-rate observation: one (date, target currency) pair.
///
/// This is the unified output unit both upstream payload shapes are
/// flattened into. Serializes as
/// `{"date":"2021-02-01","base":"USD","symbol":"EUR","rate":0.82754}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    /// The date the rate applies to.
    pub date: NaiveDate,
    /// The currency the rate is expressed from.
    pub base: String,
    /// The currency the rate converts to.
    pub symbol: String,
    /// The exchange rate.
    pub rate: f64,
}

impl RateRecord {
    /// Creates a new rate record.
    #[must_use]
    pub const fn new(date: NaiveDate, base: String, symbol: String, rate: f64) -> Self {
        Self {
            date,
            base,
            symbol,
            rate,
        }
    }
}
