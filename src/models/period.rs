//! Monday-anchored calendar weeks
//!
//! Both historical aggregation and forecast weeks use the same anchor weekday,
//! so a week is fully identified by its start date.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weekday on which every week starts
pub const ANCHOR_WEEKDAY: Weekday = Weekday::Mon;

/// A seven-day week starting on the anchor weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Week {
    start: NaiveDate,
}

impl Week {
    /// The week containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        let offset = date.weekday().num_days_from_monday() as i64;
        Self {
            start: date - Duration::days(offset),
        }
    }

    /// The first forecast week relative to `today`
    ///
    /// Offset is `(7 - weekday) mod 7` days with Monday = 0, so when `today`
    /// is itself a Monday the forecast starts today rather than a week later.
    pub fn first_on_or_after(today: NaiveDate) -> Self {
        let weekday = today.weekday().num_days_from_monday() as i64;
        let offset = (7 - weekday) % 7;
        Self {
            start: today + Duration::days(offset),
        }
    }

    /// Get the start date of this week
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Get the end date of this week (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    /// Check if a date falls within this week
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// Get the following week
    pub fn next(&self) -> Self {
        self.offset(1)
    }

    /// Get the week `weeks` after this one
    pub fn offset(&self, weeks: i64) -> Self {
        Self {
            start: self.start + Duration::weeks(weeks),
        }
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start_date().format("%Y-%m-%d"),
            self.end_date().format("%Y-%m-%d")
        )
    }
}
