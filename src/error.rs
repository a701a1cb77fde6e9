use std::fmt::Display;
use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Error {
    /// Calendar specification doesn't match `OnCalendar=` grammar.
    #[error("invalid calendar specification: {0:?}")]
    InvalidCalendarSpec(String),
    /// Cron expression is empty or contains whitespaces only.
    #[error("cron expression cannot be empty")]
    EmptyExpression,
    /// Cron macro has no calendar counterpart.
    #[error("{0} cannot be expressed as an OnCalendar value")]
    UnsupportedMacro(String),
    /// Cron expression has wrong number of fields.
    #[error("cron expression must contain exactly 5 fields (minute hour day-of-month month day-of-week), received {0}")]
    InvalidFieldCount(usize),
    /// Cron field is empty.
    #[error("missing {0} field")]
    MissingField(CronField),
    /// Comma separated segment of the field is empty or malformed.
    #[error("invalid {field} segment: {segment:?}")]
    InvalidSegment {
        /// Field containing the segment.
        field: CronField,
        /// Offending segment.
        segment: String,
    },
    /// Step isn't a positive integer.
    #[error("step value {step:?} inside {field} must be positive integer")]
    InvalidStep {
        /// Field containing the step.
        field: CronField,
        /// Offending step.
        step: String,
    },
    /// Step is zero.
    #[error("step value inside {0} must be greater than zero")]
    ZeroStep(CronField),
    /// Range has wrong number of bounds or an empty bound.
    #[error("malformed range {range:?} inside {field} field")]
    InvalidRange {
        /// Field containing the range.
        field: CronField,
        /// Offending range.
        range: String,
    },
    /// Token isn't a number and isn't a known name.
    #[error("unsupported token {token:?} in {field} field")]
    UnsupportedToken {
        /// Field containing the token.
        field: CronField,
        /// Offending token.
        token: String,
    },
    /// Numeric value is outside the field's bounds.
    #[error("{field} value {value:?} is outside the allowed range {min}-{max}")]
    ValueOutOfRange {
        /// Field containing the value.
        field: CronField,
        /// Offending value.
        value: String,
        /// Lower bound of the field.
        min: u8,
        /// Upper bound of the field.
        max: u8,
    },
    /// Month name isn't known.
    #[error("unknown month token {0:?}")]
    UnknownMonth(String),
    /// Day of week name isn't known.
    #[error("unknown day-of-week token {0:?}")]
    UnknownDayOfWeek(String),
}

/// Fields of the classic 5-fields cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CronField {
    /// Minutes, `0-59`.
    Minute,
    /// Hours, `0-23`.
    Hour,
    /// Day of month, `1-31`.
    DayOfMonth,
    /// Month, `1-12` or `JAN-DEC`.
    Month,
    /// Day of week, `0-7` or `SUN-SAT`.
    DayOfWeek,
}

impl Display for CronField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CronField::Minute => "minute",
            CronField::Hour => "hour",
            CronField::DayOfMonth => "day-of-month",
            CronField::Month => "month",
            CronField::DayOfWeek => "day-of-week",
        };
        write!(f, "{name}")
    }
}
