//! Date window validation and containment.

use chrono::NaiveDate;

use crate::DateWindowError;

/// First date the API has data for.
///
/// Valid query dates are strictly after this floor.
pub const MIN_DATE: NaiveDate = NaiveDate::from_ymd_opt(1999, 1, 4).unwrap();

/// Checks that a date lies inside the supported bounds.
///
/// A date is valid iff it is strictly after [`MIN_DATE`] and not after
/// `today`. Callers observe `today` once at process start and thread it
/// through explicitly so validation never reads the clock itself.
///
/// # Errors
///
/// Returns an error if the date falls outside the supported bounds.
pub fn validate_date(date: NaiveDate, today: NaiveDate) -> Result<(), DateWindowError> {
    if date <= MIN_DATE {
        return Err(DateWindowError::BeforeMinimum { date });
    }
    if date > today {
        return Err(DateWindowError::InFuture { date, today });
    }
    Ok(())
}

/// The inclusive date range a history query requests.
///
/// Immutable once constructed; both bounds are validated against the
/// supported date range at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateWindow {
    /// Creates a new date window, validating both bounds and that
    /// start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is outside the supported date
    /// range or if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Result<Self, DateWindowError> {
        validate_date(start, today)?;
        validate_date(end, today)?;
        if start > end {
            return Err(DateWindowError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a window covering a single day.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is outside the supported date range.
    pub fn single_day(date: NaiveDate, today: NaiveDate) -> Result<Self, DateWindowError> {
        Self::new(date, date, today)
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns true if the window covers exactly one day.
    #[must_use]
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Returns the total number of days in the window.
    #[must_use]
    pub fn total_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
