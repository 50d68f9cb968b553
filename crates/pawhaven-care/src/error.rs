use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur during care-reminder operations.
#[derive(Debug, Error)]
pub enum CareError {
    /// The reminder's end date precedes its start date.
    #[error("invalid date range: reminder ends {end} before it starts {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// The date is not an occurrence of the reminder under its frequency.
    #[error("no occurrence of reminder {id} falls on {date}")]
    InvalidOccurrence { id: String, date: NaiveDate },
}

impl CareError {
    /// Short error code string surfaced to API clients.
    pub fn code(&self) -> &'static str {
        match self {
            CareError::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            CareError::InvalidOccurrence { .. } => "INVALID_OCCURRENCE",
        }
    }
}

pub type Result<T> = std::result::Result<T, CareError>;
