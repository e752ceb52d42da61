//! Payload flattening and window reconciliation.

use cambio_types::{DateWindow, RangedPayload, RateRecord, RatesPayload};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur during payload normalization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// A date key inside a ranged payload did not parse.
    #[error("Unparseable date in response: {0}")]
    BadDate(String),

    /// A symbol table was not a JSON object.
    #[error("Malformed symbol table for {date}")]
    BadSymbolTable {
        /// The date whose symbol table is malformed.
        date: NaiveDate,
    },

    /// A rate value was not numeric.
    #[error("Non-numeric rate for {symbol} on {date}")]
    BadRate {
        /// The date of the malformed rate.
        date: NaiveDate,
        /// The symbol of the malformed rate.
        symbol: String,
    },

    /// The requested symbol is absent from a conversion payload.
    #[error("No rate for {symbol} in response")]
    MissingRate {
        /// The symbol that has no rate.
        symbol: String,
    },

    /// A conversion request produced a multi-date payload.
    #[error("Expected a single-date payload for conversion")]
    NotSingleDate,
}

/// Flattens a raw history payload into records, keeping only dates
/// inside `window`.
///
/// `None` (no data published for the query) yields an empty sequence;
/// that is a valid outcome, not a failure. A single-date payload whose
/// date falls outside the window also yields an empty sequence: the API
/// substitutes the latest published date when the requested one has no
/// data yet, and a substitute from before the window matches nothing the
/// caller asked for.
///
/// Records are ordered by date ascending; within one date, symbols keep
/// the order the API presented them in. No deduplication is performed.
/// The same payload and window always produce identical output.
///
/// # Errors
///
/// Returns an error if the payload carries unparseable dates or
/// non-numeric rates.
pub fn normalize_history(
    payload: Option<RatesPayload>,
    window: &DateWindow,
) -> Result<Vec<RateRecord>, NormalizeError> {
    let Some(payload) = payload else {
        return Ok(Vec::new());
    };
    match payload {
        RatesPayload::Ranged(ranged) => normalize_ranged(ranged, window),
        RatesPayload::Single(single) => {
            if window.contains(single.date) {
                day_records(single.date, &single.base, single.rates)
            } else {
                Ok(Vec::new())
            }
        }
    }
}

/// Extracts the conversion result for `symbol` from a single-date payload.
///
/// Unlike history, a conversion has no sensible empty outcome: a missing
/// symbol in an otherwise successful response is an upstream contract
/// break and surfaces as a hard error.
///
/// # Errors
///
/// Returns an error if the payload is not single-date, the symbol is
/// absent, or its rate is not numeric.
pub fn normalize_conversion(payload: RatesPayload, symbol: &str) -> Result<f64, NormalizeError> {
    let RatesPayload::Single(single) = payload else {
        return Err(NormalizeError::NotSingleDate);
    };
    single
        .rates
        .get(symbol)
        .ok_or_else(|| NormalizeError::MissingRate {
            symbol: symbol.to_string(),
        })?
        .as_f64()
        .ok_or_else(|| NormalizeError::BadRate {
            date: single.date,
            symbol: symbol.to_string(),
        })
}

fn normalize_ranged(
    ranged: RangedPayload,
    window: &DateWindow,
) -> Result<Vec<RateRecord>, NormalizeError> {
    let mut records = Vec::new();
    for (key, symbols) in ranged.rates {
        let date = parse_date(&key)?;
        if !window.contains(date) {
            continue;
        }
        let Value::Object(symbols) = symbols else {
            return Err(NormalizeError::BadSymbolTable { date });
        };
        records.extend(day_records(date, &ranged.base, symbols)?);
    }
    // Stable sort: within one date, upstream symbol order survives.
    records.sort_by_key(|record| record.date);
    Ok(records)
}

fn day_records(
    date: NaiveDate,
    base: &str,
    rates: Map<String, Value>,
) -> Result<Vec<RateRecord>, NormalizeError> {
    rates
        .into_iter()
        .map(|(symbol, rate)| {
            let rate = rate.as_f64().ok_or_else(|| NormalizeError::BadRate {
                date,
                symbol: symbol.clone(),
            })?;
            Ok(RateRecord::new(date, base.to_string(), symbol, rate))
        })
        .collect()
}

fn parse_date(s: &str) -> Result<NaiveDate, NormalizeError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| NormalizeError::BadDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window(start: NaiveDate, end: NaiveDate) -> DateWindow {
        DateWindow::new(start, end, date(2025, 1, 1)).unwrap()
    }

    fn payload(value: Value) -> Option<RatesPayload> {
        RatesPayload::from_value(value).unwrap()
    }

    fn record(d: NaiveDate, symbol: &str, rate: f64) -> RateRecord {
        RateRecord::new(d, "USD".to_string(), symbol.to_string(), rate)
    }

    #[test]
    fn test_ranged_payload_flattens_in_window() {
        let raw = payload(json!({
            "base": "USD",
            "start_date": "2021-02-01",
            "end_date": "2021-02-02",
            "rates": {
                "2021-02-01": {"EUR": 0.82754},
                "2021-02-02": {"EUR": 0.83029}
            }
        }));
        let window = window(date(2021, 2, 1), date(2021, 2, 2));
        let records = normalize_history(raw, &window).unwrap();
        assert_eq!(
            records,
            [
                record(date(2021, 2, 1), "EUR", 0.82754),
                record(date(2021, 2, 2), "EUR", 0.83029),
            ]
        );
    }

    #[test]
    fn test_ranged_payload_drops_out_of_window_dates() {
        let raw = payload(json!({
            "base": "USD",
            "start_date": "2021-01-29",
            "end_date": "2021-02-03",
            "rates": {
                "2021-01-29": {"EUR": 0.81},
                "2021-02-01": {"EUR": 0.82754},
                "2021-02-02": {"EUR": 0.83029},
                "2021-02-03": {"EUR": 0.83164}
            }
        }));
        let window = window(date(2021, 2, 1), date(2021, 2, 2));
        let records = normalize_history(raw, &window).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| window.contains(r.date)));
    }

    #[test]
    fn test_ranged_payload_orders_dates_keeps_symbol_order() {
        // Dates arrive out of order; symbols are not alphabetical.
        let raw = payload(json!({
            "base": "USD",
            "start_date": "2021-02-01",
            "end_date": "2021-02-02",
            "rates": {
                "2021-02-02": {"JPY": 105.02, "EUR": 0.83029},
                "2021-02-01": {"JPY": 104.87, "EUR": 0.82754}
            }
        }));
        let window = window(date(2021, 2, 1), date(2021, 2, 2));
        let records = normalize_history(raw, &window).unwrap();
        let flat: Vec<_> = records
            .iter()
            .map(|r| (r.date, r.symbol.as_str()))
            .collect();
        assert_eq!(
            flat,
            [
                (date(2021, 2, 1), "JPY"),
                (date(2021, 2, 1), "EUR"),
                (date(2021, 2, 2), "JPY"),
                (date(2021, 2, 2), "EUR"),
            ]
        );
    }

    #[test]
    fn test_single_payload_in_window() {
        let raw = payload(json!({
            "base": "USD",
            "date": "2021-02-01",
            "rates": {"EUR": 0.82754}
        }));
        let window = window(date(2021, 2, 1), date(2021, 2, 1));
        let records = normalize_history(raw, &window).unwrap();
        assert_eq!(records, [record(date(2021, 2, 1), "EUR", 0.82754)]);
    }

    #[test]
    fn test_single_payload_substituted_before_window() {
        // Asking for a date with no published data returns the latest
        // earlier date instead; nothing in the window matches.
        let raw = payload(json!({
            "base": "USD",
            "date": "2021-01-29",
            "rates": {"EUR": 0.81}
        }));
        let window = window(date(2021, 2, 1), date(2021, 2, 1));
        let records = normalize_history(raw, &window).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_single_payload_after_window_is_dropped() {
        let raw = payload(json!({
            "base": "USD",
            "date": "2021-02-05",
            "rates": {"EUR": 0.83}
        }));
        let window = window(date(2021, 2, 1), date(2021, 2, 1));
        assert!(normalize_history(raw, &window).unwrap().is_empty());
    }

    #[test]
    fn test_no_payload_is_empty_not_an_error() {
        let window = window(date(2021, 2, 1), date(2021, 2, 2));
        assert!(normalize_history(None, &window).unwrap().is_empty());
        assert!(normalize_history(payload(json!({})), &window).unwrap().is_empty());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let value = json!({
            "base": "USD",
            "start_date": "2021-02-01",
            "end_date": "2021-02-02",
            "rates": {
                "2021-02-01": {"JPY": 104.87, "EUR": 0.82754},
                "2021-02-02": {"JPY": 105.02, "EUR": 0.83029}
            }
        });
        let window = window(date(2021, 2, 1), date(2021, 2, 2));
        let first = normalize_history(payload(value.clone()), &window).unwrap();
        let second = normalize_history(payload(value), &window).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bad_date_key() {
        let raw = payload(json!({
            "base": "USD",
            "start_date": "2021-02-01",
            "end_date": "2021-02-02",
            "rates": {"02/01/2021": {"EUR": 0.82754}}
        }));
        let window = window(date(2021, 2, 1), date(2021, 2, 2));
        assert_eq!(
            normalize_history(raw, &window),
            Err(NormalizeError::BadDate("02/01/2021".to_string()))
        );
    }

    #[test]
    fn test_non_numeric_rate() {
        let raw = payload(json!({
            "base": "USD",
            "date": "2021-02-01",
            "rates": {"EUR": "0.82754"}
        }));
        let window = window(date(2021, 2, 1), date(2021, 2, 1));
        assert_eq!(
            normalize_history(raw, &window),
            Err(NormalizeError::BadRate {
                date: date(2021, 2, 1),
                symbol: "EUR".to_string(),
            })
        );
    }

    #[test]
    fn test_conversion() {
        let raw = payload(json!({
            "base": "USD",
            "date": "2023-02-14",
            "rates": {"EUR": 46.473}
        }))
        .unwrap();
        assert_eq!(normalize_conversion(raw, "EUR").unwrap(), 46.473);
    }

    #[test]
    fn test_conversion_missing_symbol_is_hard_error() {
        let raw = payload(json!({
            "base": "USD",
            "date": "2023-02-14",
            "rates": {"EUR": 46.473}
        }))
        .unwrap();
        assert_eq!(
            normalize_conversion(raw, "JPY"),
            Err(NormalizeError::MissingRate {
                symbol: "JPY".to_string(),
            })
        );
    }

    #[test]
    fn test_conversion_rejects_ranged_payload() {
        let raw = payload(json!({
            "base": "USD",
            "start_date": "2023-02-14",
            "end_date": "2023-02-15",
            "rates": {"2023-02-14": {"EUR": 46.473}}
        }))
        .unwrap();
        assert_eq!(
            normalize_conversion(raw, "EUR"),
            Err(NormalizeError::NotSingleDate)
        );
    }
}
