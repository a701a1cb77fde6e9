//! Date component: `2024-12-25`, `*-*-1,15`, `*-02~03`, `2024-W01-1`.
use crate::{
    field::FieldType,
    utils::{is_digits, strip_sign},
};
use std::fmt::Display;

/// Date spec split into its (still textual) fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum DateSpec<'a> {
    /// ISO week date, components aren't range checked.
    Week(&'a str),
    /// Right-aligned `[[year-]month-]day`, missing components are `*`.
    Calendar { year: &'a str, month: &'a str, day: &'a str },
}

impl<'a> DateSpec<'a> {
    pub(crate) fn parse(token: &'a str) -> Option<Self> {
        if token.is_empty() {
            return None;
        }
        if is_iso_week(token) {
            return Some(Self::Week(token));
        }

        let parts: Vec<&str> = token.split('-').collect();
        let (year, month, day) = match parts.as_slice() {
            [day] => ("*", "*", *day),
            [month, day] => ("*", *month, *day),
            [year, month, day] => (*year, *month, *day),
            _ => return None,
        };
        let (month, day) = anchor_tilde(month, day);

        (FieldType::Year.validate(year) && FieldType::Month.validate(month) && FieldType::Day.validate(day))
            .then_some(Self::Calendar { year, month, day })
    }
}

impl Display for DateSpec<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateSpec::Week(week) => write!(f, "{week}"),
            DateSpec::Calendar { year, month, day } => write!(f, "{year}-{month}-{day}"),
        }
    }
}

/// Returns `true` if `token` is a valid date spec.
#[inline]
pub(crate) fn is_valid_date_spec(token: &str) -> bool {
    match DateSpec::parse(token) {
        Some(date) => {
            log::trace!("date spec {token:?} parsed as {date}");
            true
        }
        None => false,
    }
}

/// Rewrites `<prefix>~<suffix>` day into `~<suffix>`.
///
/// When the month is a wildcard, the prefix becomes the month: `*-02~03` is the 3rd day
/// before the end of February.
fn anchor_tilde<'a>(month: &'a str, day: &'a str) -> (&'a str, &'a str) {
    let Some(idx) = day.find('~') else {
        return (month, day);
    };
    let (prefix, anchored) = day.split_at(idx);
    if anchored.len() == 1 {
        return (month, day);
    }

    if month == "*" && !prefix.is_empty() && prefix != "*" {
        (prefix, anchored)
    } else {
        (month, anchored)
    }
}

/// `[*|[+-]YYYY]-W[*|w|ww](-[*|d])?`, case-insensitive `W`.
fn is_iso_week(token: &str) -> bool {
    let rest = match token.strip_prefix('*') {
        Some(rest) => rest,
        None => {
            let unsigned = strip_sign(token);
            match unsigned.get(..4) {
                Some(year) if is_digits(year) => &unsigned[4..],
                _ => return false,
            }
        }
    };

    let Some(rest) = rest.strip_prefix("-W").or_else(|| rest.strip_prefix("-w")) else {
        return false;
    };
    let (week, weekday) = match rest.split_once('-') {
        Some((week, weekday)) => (week, Some(weekday)),
        None => (rest, None),
    };

    let week_ok = week == "*" || (is_digits(week) && week.len() <= 2);
    let weekday_ok = weekday.map_or(true, |weekday| weekday == "*" || (is_digits(weekday) && weekday.len() == 1));

    week_ok && weekday_ok
}
