//! Raw API payload shapes.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Raw payload returned by the rates endpoint.
///
/// The API answers with one of two shapes depending on whether a single
/// date or a date range was requested. The shapes are told apart by the
/// presence of the `start_date`/`end_date` bound fields, resolved once at
/// deserialization so no shape checks leak into the filtering logic.
///
/// Payloads are ephemeral: produced by the transport, consumed immediately
/// by normalization, never persisted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RatesPayload {
    /// Multi-date shape: `rates` maps each date to a symbol table.
    Ranged(RangedPayload),
    /// Single-date shape: `rates` maps symbols directly to rates.
    Single(SingleDayPayload),
}

impl RatesPayload {
    /// Resolves a raw JSON value into a payload.
    ///
    /// Returns `Ok(None)` for an empty object, the shape the transport
    /// produces when the API has no data for the requested query.
    ///
    /// # Errors
    ///
    /// Returns an error if the value matches neither payload shape.
    pub fn from_value(value: Value) -> Result<Option<Self>, serde_json::Error> {
        if value.as_object().is_some_and(Map::is_empty) {
            return Ok(None);
        }
        serde_json::from_value(value).map(Some)
    }
}

/// The ranged payload shape, covering one or more dates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RangedPayload {
    /// The currency the rates are expressed from.
    pub base: String,
    /// First date covered by the payload.
    pub start_date: NaiveDate,
    /// Last date covered by the payload.
    pub end_date: NaiveDate,
    /// `YYYY-MM-DD` date keys to symbol tables, in upstream order.
    pub rates: Map<String, Value>,
}

/// The single-date payload shape.
///
/// The date it carries may be earlier than the one requested: when the
/// requested date has no published data yet (weekend, holiday, or today
/// before publication) the API substitutes the latest date that does.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SingleDayPayload {
    /// The currency the rates are expressed from.
    pub base: String,
    /// The date the rates actually apply to.
    pub date: NaiveDate,
    /// Symbol to rate, in upstream order.
    pub rates: Map<String, Value>,
}
