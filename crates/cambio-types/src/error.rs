//! Error types for cambio input validation.

use chrono::NaiveDate;
use thiserror::Error;

/// Error for invalid date windows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateWindowError {
    /// Start date is after end date.
    #[error("Invalid date window: {start} > {end}")]
    InvalidWindow {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },

    /// Date is on or before the first date the API has data for.
    #[error("Date {date} is earlier than the minimum supported date: 1999-01-04")]
    BeforeMinimum {
        /// The rejected date.
        date: NaiveDate,
    },

    /// Date is after today's date.
    #[error("Date {date} is later than today's date ({today})")]
    InFuture {
        /// The rejected date.
        date: NaiveDate,
        /// Today's date, as observed at process start.
        today: NaiveDate,
    },
}

/// Error for currency codes outside the supported set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// The code is not in the supported-currency set.
    #[error("Unsupported currency code: {code}")]
    Unsupported {
        /// The rejected code.
        code: String,
    },
}
