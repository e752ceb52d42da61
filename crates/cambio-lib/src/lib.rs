//! Client library for the Frankfurter exchange-rate API.
//!
//! This is a facade crate that re-exports functionality from the cambio
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use cambio_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let today = chrono::Local::now().date_naive();
//!     let window = DateWindow::new(
//!         chrono::NaiveDate::from_ymd_opt(2021, 2, 1).unwrap(),
//!         chrono::NaiveDate::from_ymd_opt(2021, 2, 2).unwrap(),
//!         today,
//!     )?;
//!
//!     let client = ApiClient::with_defaults()?;
//!     let raw = client
//!         .fetch(&url::history_path(&window, "USD", &["EUR".to_string()]))
//!         .await?;
//!     let payload = raw.map(RatesPayload::from_value).transpose()?.flatten();
//!     for record in normalize_history(payload, &window)? {
//!         println!("{} {} {}", record.date, record.symbol, record.rate);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/cambio-cli/cambio/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use cambio_types::*;

// Re-export query paths and transport
pub use cambio_fetch::{ApiClient, ClientConfig, FetchError, url};

// Re-export normalization
pub use cambio_normalize::{NormalizeError, normalize_conversion, normalize_history};

// Re-export output
pub use cambio_format::{FormatError, jsonl_path, write_records, write_records_file};

/// Prelude module for convenient imports.
///
/// ```
/// use cambio_lib::prelude::*;
/// ```
pub mod prelude {
    pub use cambio_types::{
        Currencies, CurrencyError, DateWindow, DateWindowError, MIN_DATE, RateRecord,
        RatesPayload, validate_date,
    };

    pub use cambio_fetch::{ApiClient, ClientConfig, FetchError, url};

    pub use cambio_normalize::{NormalizeError, normalize_conversion, normalize_history};

    pub use cambio_format::{FormatError, write_records, write_records_file};
}
