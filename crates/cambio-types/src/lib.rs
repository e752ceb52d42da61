//! Core types for the cambio exchange-rate client.
//!
//! This crate provides the fundamental data structures used throughout cambio:
//!
//! - [`DateWindow`] - The inclusive date range a history query requests
//! - [`Currencies`] - Supported-currency set fetched from the API
//! - [`RatesPayload`] - Raw API payload in either of its two shapes
//! - [`RateRecord`] - A single flat, normalized rate observation

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/cambio-cli/cambio/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod currency;
mod date_window;
mod error;
mod payload;
mod record;

pub use currency::Currencies;
pub use date_window::{DateWindow, MIN_DATE, validate_date};
pub use error::{CurrencyError, DateWindowError};
pub use payload::{RangedPayload, RatesPayload, SingleDayPayload};
pub use record::RateRecord;
