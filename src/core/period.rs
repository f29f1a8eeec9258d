use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{AppError, Result};

/// Reporting period for one settlement run
///
/// Both bounds are inclusive calendar dates. The default period is the
/// month preceding the reference date (the run date in production, an
/// explicit date in tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// Start of the reporting period (inclusive)
    pub from: NaiveDate,
    /// End of the reporting period (inclusive)
    pub to: NaiveDate,
}

impl ReportingPeriod {
    /// Create a period from explicit bounds, rejecting inverted ranges
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(AppError::invalid_range(format!(
                "from ({}) must be before or equal to to ({})",
                from, to
            )));
        }
        Ok(Self { from, to })
    }

    /// First through last calendar day of the month preceding `reference`
    pub fn preceding_month(reference: NaiveDate) -> Self {
        let first_of_current = NaiveDate::from_ymd_opt(reference.year(), reference.month(), 1)
            .expect("first day of month is a valid date");
        let to = first_of_current
            .pred_opt()
            .expect("date before the first of a month exists");
        let from = NaiveDate::from_ymd_opt(to.year(), to.month(), 1)
            .expect("first day of month is a valid date");
        Self { from, to }
    }

    /// Filter predicate for the booked-invoice list endpoint
    ///
    /// The syntax (`date$gte:YYYY-MM-DD$and:date$lte:YYYY-MM-DD`) is a
    /// boundary contract of the e-conomic REST API and is passed through
    /// verbatim as the `filter` query parameter.
    pub fn query_predicate(&self) -> String {
        format!("date$gte:{}$and:date$lte:{}", self.from, self.to)
    }

    /// Human-readable period label used in notifications and PDF headers
    pub fn label(&self) -> String {
        format!("{} - {}", self.from, self.to)
    }

    /// Number of calendar days covered, bounds inclusive
    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}
