//! Query paths and HTTP transport for the cambio exchange-rate client.
//!
//! This crate covers the network-facing half of a query:
//!
//! - [`url::history_path`] / [`url::conversion_path`] - Canonical query paths
//! - [`ApiClient`] - Serial, retry-free HTTP transport adapter
//!
//! The client reports "no data published yet" as an `Ok(None)` sentinel
//! rather than an error, so the normalization layer can treat it
//! uniformly with an empty payload.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/cambio-cli/cambio/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod url;

pub use client::{ApiClient, ClientConfig, FetchError};
