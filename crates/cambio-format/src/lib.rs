//! JSONL record output for the cambio exchange-rate client.
//!
//! - [`write_records`] - One compact JSON object per line to any writer
//! - [`write_records_file`] - The `.jsonl` file artifact, parent directory
//!   checked before anything is created

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/cambio-cli/cambio/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod jsonl;

pub use jsonl::{FormatError, jsonl_path, write_records, write_records_file};
