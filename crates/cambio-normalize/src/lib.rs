//! Response normalization and date-window reconciliation for cambio.
//!
//! The API returns differently shaped payloads depending on whether a
//! single date or a date range was requested, and may substitute an
//! earlier date than the one asked for. This crate reconciles both
//! shapes against the originally requested window:
//!
//! - [`normalize_history`] - Flattens a payload into ordered [`cambio_types::RateRecord`]s,
//!   discarding anything outside the window
//! - [`normalize_conversion`] - Extracts a single conversion result
//!
//! Both functions are pure: no network, no state across calls.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/cambio-cli/cambio/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod normalize;

pub use normalize::{NormalizeError, normalize_conversion, normalize_history};
