use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TrackerError};

/// Input format accepted by [`Record::with_date`], e.g. `01.02.2024`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// One dated expense or consumption entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    amount: i64,
    comment: String,
    date: NaiveDate,
}

impl Record {
    /// Creates a record dated today in the local timezone.
    pub fn new(amount: i64, comment: impl Into<String>) -> Self {
        Self::on(amount, comment, today())
    }

    /// Creates a record dated by a `DD.MM.YYYY` literal.
    pub fn with_date(amount: i64, comment: impl Into<String>, date: &str) -> Result<Self> {
        let parsed = parse_date(date)?;
        Ok(Self::on(amount, comment, parsed))
    }

    pub fn on(amount: i64, comment: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            comment: comment.into(),
            date,
        }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Parses a `DD.MM.YYYY` date literal.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| {
        tracing::warn!(input, "rejected malformed record date");
        TrackerError::InvalidDate {
            input: input.to_string(),
            source,
        }
    })
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
