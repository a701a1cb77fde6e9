//! Lightweight validator of systemd `OnCalendar=` calendar expressions and cron-to-calendar converter.
#![deny(unsafe_code, warnings, missing_docs)]

//! This is a tiny crate, intended to:
//! - check whether a text is an acceptable `OnCalendar=` value before it's written into a timer unit;
//! - convert traditional 5-fields cron expressions (as used by Kubernetes CronJob) into calendar expressions.
//!
//! It doesn't compute trigger times and doesn't check timezones against any database,
//! the whole job is a purely syntactic check.
//!
//! ## Calendar expression format
//!
//! A value is a list of expressions, separated by `;` or newlines. A newline right after
//! a trailing `,` or `.` doesn't split, so long weekday lists may be wrapped. Every expression
//! must be valid.
//!
//! Each expression has the form:
//!
//! ```text
//! [TZ=<zone>] [<weekdays>] [<date>] [<time>] [<zone>] [ ~ <time span>]
//! ```
//!
//! or a named shortcut: `minutely`, `hourly`, `daily`, `weekly`, `monthly`, `quarterly`,
//! `semiannually` (`semiannual`, `semi-annually`, `semi-annual`), `yearly`, `annually`;
//! optionally followed by a timezone.
//!
//! | Component   | Examples                                       | Notes                                    |
//! |-------------|------------------------------------------------|------------------------------------------|
//! | Weekdays    | `Mon`, `Sat,Sun`, `Mon..Fri`, `Tuesday`        | must come first                          |
//! | Date        | `2024-12-25`, `*-*-1,15`, `*-02~03`, `2024-W01`| year 0-9999, month 1-12, day 1-31        |
//! | Time        | `09:00:00`, `*:0/15:00`, `9..17:00`, `12:00`   | hour 0-23, minute 0-59, second 0-59      |
//! | Timezone    | `UTC`, `UTC+2`, `Europe/Paris`, `EST`          | after the time, or as `TZ=` prefix       |
//! | Time span   | `30m`, `1h 30min`, `2.5`                       | randomization after ` ~ `                |
//!
//! Field values may be:
//! - `*` - any value;
//! - `,` - list of values, i.e. `1,15`;
//! - `..` - range, i.e. `9..17`;
//! - `/` - repetition, i.e. `*/15`, `0/5`, `1..31/2`;
//! - `~` - day counted from the end of the month, i.e. `~1` is the last day;
//! - seconds may be fractional, i.e. `30.5`.
//!
//! A time without seconds is accepted if the minute is a fixed value or list, and when the time is
//! the single component of the expression it must be a whole hour: `12:00` is valid,
//! `14:30` isn't, but `Mon 14:30` is.
//!
//! ## How to use
//!
//! The simplest way is [`validate()`] function:
//! ```rust
//! use oncalendar_lite::validate;
//!
//! assert!(validate("Mon..Fri *-*-* 09:00:00"));
//! assert!(validate("Mon,\nFri 10:00:00"));
//! assert!(validate("TZ=Europe/Paris daily ~ 30m"));
//! assert!(!validate("*-*-* 00:00:00 Mon"));
//! assert!(!validate(""));
//! ```
//!
//! [`CalendarSpec`] is a validated owned value with access to every [`Expression`] and its components:
//! ```rust
//! use oncalendar_lite::{CalendarSpec, Result};
//!
//! fn components() -> Result<()> {
//!     let spec = CalendarSpec::new("Sat,Sun 10:00:00 UTC; *-*-1 00:00:00")?;
//!
//!     for expression in &spec {
//!         println!("days: {:?}, time: {:?}", expression.day_spec(), expression.time());
//!     }
//!     assert_eq!(spec.len(), 2);
//!
//!     Ok(())
//! }
//! # components().unwrap();
//! ```
//!
//! Cron expressions are converted with [`convert_from_cron()`] or [`CalendarSpec::from_cron()`]:
//! ```rust
//! use oncalendar_lite::{convert_from_cron, validate, Result};
//!
//! fn convert() -> Result<()> {
//!     let calendar = convert_from_cron("*/30 6 * JAN-MAR SUN")?;
//!     assert_eq!(calendar, "Sun *-1..3-* 06:*/30:00");
//!     assert!(validate(&calendar));
//!
//!     Ok(())
//! }
//! # convert().unwrap();
//! ```
//!
//! Rejected expressions are reported with `debug` level messages via the [log](https://crates.io/crates/log) facade.
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementation for [`CalendarSpec`].

/// Validated multi-expression calendar value.
pub mod calendar;
/// Cron to calendar expression converter.
pub mod convert;
mod date;
mod day;
/// Crate specific Error implementation.
pub mod error;
/// Single calendar expression validator and splitter.
pub mod expression;
/// Numeric field grammar shared by date and time components.
pub mod field;
mod time;
mod timespan;
mod timezone;
mod utils;

// Re-export of public entities.
pub use calendar::CalendarSpec;
pub use convert::convert_from_cron;
pub use error::{CronField, Error};
pub use expression::{split_expressions, Expression, TimezoneSource};
pub use field::{FieldRules, FieldType};

/// Convenient alias for `Result`.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `true` if `spec` is an acceptable `OnCalendar=` value.
///
/// Empty input (or input of separators only) is invalid.
pub fn validate(spec: &str) -> bool {
    let expressions = split_expressions(spec);
    !expressions.is_empty() && expressions.into_iter().all(|e| expression::classify(e).is_some())
}

/// Same as [`validate()`], but absent value is invalid.
pub fn validate_opt(spec: Option<&str>) -> bool {
    spec.is_some_and(validate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("daily"), true)]
    #[case(Some("Mon 10:00"), true)]
    #[case(Some(""), false)]
    #[case(Some("nonsense"), false)]
    #[case(None, false)]
    fn test_validate_opt(#[case] spec: Option<&str>, #[case] expected: bool) {
        assert_eq!(validate_opt(spec), expected, "spec = {spec:?}");
    }

    #[test]
    fn test_validate_agrees_with_calendar_spec() {
        for spec in ["daily", "Mon..Fri 09:00", "14:30", "*-*-* 00:00:00 ~ 1h", ";", "Mon,\nFri 12:00"] {
            assert_eq!(validate(spec), CalendarSpec::new(spec).is_ok(), "spec = {spec:?}");
        }
    }
}
