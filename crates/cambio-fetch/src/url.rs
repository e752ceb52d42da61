//! Frankfurter query path construction.

use cambio_types::DateWindow;
use chrono::NaiveDate;

/// Base URL for the Frankfurter API.
pub const BASE_URL: &str = "https://api.frankfurter.app";

/// Path of the supported-currencies listing.
pub const CURRENCIES_PATH: &str = "currencies";

/// Builds the query path for a history request.
///
/// A window covering a single day always uses the single-date form
/// `{date}?from={base}&to={symbols}`. The ranged form with equal bounds
/// makes the API abort the response body when the bound is the current
/// day, and for one day both forms return the same data, so the
/// single-date form is used whenever `start == end`. Wider windows use
/// the ranged form `{start}..{end}?from={base}&to={symbols}`.
///
/// Symbols are joined in caller order, without deduplication.
///
/// # Example
///
/// ```
/// use cambio_fetch::url::history_path;
/// use cambio_types::DateWindow;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
/// let start = NaiveDate::from_ymd_opt(2021, 2, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2021, 2, 2).unwrap();
/// let window = DateWindow::new(start, end, today).unwrap();
/// let path = history_path(&window, "USD", &["EUR".to_string()]);
/// assert_eq!(path, "2021-02-01..2021-02-02?from=USD&to=EUR");
/// ```
#[must_use]
pub fn history_path(window: &DateWindow, base: &str, symbols: &[String]) -> String {
    let symbols = symbols.join(",");
    if window.is_single_day() {
        format!("{}?from={}&to={}", window.start, base, symbols)
    } else {
        format!("{}..{}?from={}&to={}", window.start, window.end, base, symbols)
    }
}

/// Builds the query path for a conversion request.
///
/// Always the single-date form, with the amount carried as a query
/// parameter at full precision.
#[must_use]
pub fn conversion_path(date: NaiveDate, base: &str, symbol: &str, amount: f64) -> String {
    format!("{date}?from={base}&to={symbol}&amount={amount}")
}
