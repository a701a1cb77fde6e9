use crate::{
    date::is_valid_date_spec,
    day::consume_day_spec,
    time::is_valid_time_spec,
    timespan::is_valid_timespan,
    timezone::is_valid_timezone,
    utils::{is_shortcut, prefix_chars},
};
use std::{fmt::Display, str::FromStr};

/// Where the timezone of an expression comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimezoneSource {
    /// Leading `TZ=<zone>` directive.
    Directive,
    /// Trailing timezone literal after the time.
    Suffix,
}

/// Single accepted calendar expression with its components.
///
/// Components are kept exactly as they were written, nothing is normalized.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Expression {
    source: String,
    shortcut: Option<String>,
    day_spec: Option<String>,
    date: Option<String>,
    time: Option<String>,
    timezone: Option<(String, TimezoneSource)>,
    randomization: Option<String>,
}

impl Expression {
    /// Validates a single calendar expression (no `;` or newline separators) and returns its components.
    ///
    /// Returns `None` if the expression is invalid.
    pub fn parse(text: &str) -> Option<Self> {
        classify(text).map(Self::from)
    }

    /// Trimmed source text of the expression.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Named shortcut, like `daily` or `semi-annually`.
    pub fn shortcut(&self) -> Option<&str> {
        self.shortcut.as_deref()
    }

    /// Leading weekday list, like `Mon..Fri` or `Sat, Sun`.
    pub fn day_spec(&self) -> Option<&str> {
        self.day_spec.as_deref()
    }

    /// Date component, like `*-*-1,15` or `2024-W01`.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Time component, like `09:00:00` or `*:0/15`.
    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    /// Timezone of the expression, either from the `TZ=` directive or the trailing literal.
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_ref().map(|(tz, _)| tz.as_str())
    }

    /// Returns how the timezone was specified.
    pub fn timezone_source(&self) -> Option<TimezoneSource> {
        self.timezone.as_ref().map(|(_, source)| *source)
    }

    /// Randomization time span after ` ~ `.
    pub fn randomization(&self) -> Option<&str> {
        self.randomization.as_deref()
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl FromStr for Expression {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::parse(s).ok_or_else(|| crate::Error::InvalidCalendarSpec(s.to_owned()))
    }
}

/// Splits input into trimmed non-empty expressions.
///
/// Expressions are separated by `;` or newlines, but newline right after
/// a trailing `,` or `.` continues the same expression.
pub fn split_expressions(input: &str) -> Vec<&str> {
    let mut expressions = Vec::new();
    let mut start = 0;

    for (idx, c) in input.char_indices() {
        let is_separator = match c {
            ';' => true,
            '\n' => !is_continuation(&input[..idx]),
            _ => false,
        };
        if is_separator {
            push_expression(&mut expressions, &input[start..idx]);
            start = idx + 1;
        }
    }
    push_expression(&mut expressions, &input[start..]);

    expressions
}

#[inline]
fn is_continuation(before: &str) -> bool {
    before.trim_end().ends_with([',', '.'])
}

#[inline]
fn push_expression<'a>(expressions: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        expressions.push(piece);
    }
}

/// Components of the expression being validated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Classification<'a> {
    source: &'a str,
    shortcut: Option<&'a str>,
    day_spec: Option<&'a str>,
    date: Option<&'a str>,
    time: Option<&'a str>,
    tz_directive: Option<&'a str>,
    tz_suffix: Option<(usize, &'a str)>,
    randomization: Option<&'a str>,
}

/// Role of the whitespace separated token after the day spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Date,
    Time,
    Timezone,
}

/// First matching role wins.
const ROLES: [Role; 3] = [Role::Date, Role::Time, Role::Timezone];

impl<'a> Classification<'a> {
    fn accepts(&self, role: Role, token: &str) -> bool {
        match role {
            Role::Date => self.date.is_none() && self.time.is_none() && is_valid_date_spec(token),
            Role::Time => self.time.is_none() && token.contains(':'),
            Role::Timezone => self.tz_suffix.is_none() && is_valid_timezone(token),
        }
    }

    fn assign(&mut self, role: Role, position: usize, token: &'a str) {
        match role {
            Role::Date => self.date = Some(token),
            Role::Time => self.time = Some(token),
            Role::Timezone => self.tz_suffix = Some((position, token)),
        }
    }

    /// Time is the single component, without day, date or timezone.
    fn is_time_only(&self) -> bool {
        self.time.is_some()
            && self.day_spec.is_none()
            && self.date.is_none()
            && self.tz_suffix.is_none()
            && self.tz_directive.is_none()
    }
}

impl From<Classification<'_>> for Expression {
    fn from(value: Classification<'_>) -> Self {
        let timezone = match (value.tz_directive, value.tz_suffix) {
            (Some(tz), _) => Some((tz.to_owned(), TimezoneSource::Directive)),
            (None, Some((_, tz))) => Some((tz.to_owned(), TimezoneSource::Suffix)),
            (None, None) => None,
        };

        Self {
            source: value.source.to_owned(),
            shortcut: value.shortcut.map(str::to_owned),
            day_spec: value.day_spec.map(str::to_owned),
            date: value.date.map(str::to_owned),
            time: value.time.map(str::to_owned),
            timezone,
            randomization: value.randomization.map(str::to_owned),
        }
    }
}

#[inline]
fn rejected<T>(expression: &str, reason: &str) -> Option<T> {
    log::debug!("calendar expression {expression:?} rejected: {reason}");
    None
}

/// Validates a single expression and splits it into components.
pub(crate) fn classify(text: &str) -> Option<Classification<'_>> {
    let source = text.trim();
    if source.is_empty() {
        return rejected(text, "empty expression");
    }
    let mut outcome = Classification {
        source,
        ..Default::default()
    };

    // Randomization suffix
    let Some((base, randomization)) = split_randomization(source) else {
        return rejected(source, "more than one randomization suffix");
    };
    if let Some(span) = randomization {
        if !is_valid_timespan(span) {
            return rejected(source, "invalid randomization time span");
        }
        outcome.randomization = Some(span.trim());
    }
    let mut working = base.trim();
    if working.is_empty() {
        return rejected(source, "nothing before randomization suffix");
    }

    // TZ= directive
    if let Some((tz, rest)) = split_tz_directive(working) {
        if !is_valid_timezone(tz) {
            return rejected(source, "invalid TZ= directive");
        }
        outcome.tz_directive = Some(tz);
        working = rest;
    }
    if working.is_empty() {
        return rejected(source, "nothing after TZ= directive");
    }

    // Shortcuts
    if let Some((shortcut, rest)) = split_shortcut(working) {
        if !rest.is_empty() {
            if outcome.tz_directive.is_some() {
                return rejected(source, "timezone specified twice");
            }
            if !is_valid_timezone(rest) {
                return rejected(source, "invalid timezone after shortcut");
            }
            outcome.tz_suffix = Some((0, rest));
        }
        outcome.shortcut = Some(shortcut);
        return Some(outcome);
    }

    // Day spec
    let (day_spec, rest) = consume_day_spec(working);
    outcome.day_spec = day_spec;
    let rest = rest.trim();
    if rest.is_empty() {
        return match day_spec {
            Some(_) => Some(outcome),
            None => rejected(source, "no components"),
        };
    }

    // Date, time and timezone
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    for (position, &token) in tokens.iter().enumerate() {
        let Some(role) = ROLES.into_iter().find(|role| outcome.accepts(*role, token)) else {
            return rejected(source, "token doesn't fit any component");
        };
        log::trace!("token {token:?} is {role:?}");
        outcome.assign(role, position, token);
    }

    if let Some((position, _)) = outcome.tz_suffix {
        if outcome.tz_directive.is_some() {
            return rejected(source, "timezone specified twice");
        }
        if outcome.time.is_none() {
            return rejected(source, "timezone without time");
        }
        if position + 1 != tokens.len() {
            return rejected(source, "timezone isn't the last component");
        }
    }
    if outcome.date.is_some() && outcome.time.is_none() {
        return rejected(source, "date without time");
    }
    if let Some(time) = outcome.time {
        if !is_valid_time_spec(time, outcome.is_time_only()) {
            return rejected(source, "invalid time");
        }
    }
    if outcome.time.is_none() && outcome.day_spec.is_none() {
        return rejected(source, "neither time nor day spec");
    }

    Some(outcome)
}

/// Splits `<spec> ~ <time span>`.
///
/// Separator is a `~` with whitespace on both sides. Returns `None` if there are several separators.
fn split_randomization(input: &str) -> Option<(&str, Option<&str>)> {
    let mut pieces = Vec::with_capacity(2);
    let mut last = 0;

    for (idx, c) in input.char_indices() {
        if c != '~' || idx < last {
            continue;
        }
        let leading = input[last..idx].len() - input[last..idx].trim_end().len();
        let after = &input[idx + 1..];
        let trailing = after.len() - after.trim_start().len();
        if leading == 0 || trailing == 0 {
            continue;
        }

        pieces.push(&input[last..idx - leading]);
        last = idx + 1 + trailing;
    }
    pieces.push(&input[last..]);

    match pieces.as_slice() {
        [base] => Some((*base, None)),
        [base, span] => Some((*base, Some(*span))),
        _ => None,
    }
}

/// Splits leading `TZ=<zone>` (case-insensitive) off the input.
fn split_tz_directive(input: &str) -> Option<(&str, &str)> {
    let prefix = prefix_chars(input, 3)?;
    if !prefix.eq_ignore_ascii_case("TZ=") {
        return None;
    }

    let value = &input[prefix.len()..];
    let end = value.find(char::is_whitespace).unwrap_or(value.len());
    if end == 0 {
        return None;
    }
    let (tz, rest) = value.split_at(end);

    Some((tz, rest.trim_start()))
}

/// Splits leading shortcut keyword, with the trimmed rest of the input.
fn split_shortcut(input: &str) -> Option<(&str, &str)> {
    let end = input
        .find(|c: char| !(c.is_ascii_alphabetic() || c == '-'))
        .unwrap_or(input.len());
    if end == 0 {
        return None;
    }

    let (keyword, rest) = input.split_at(end);
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }

    is_shortcut(keyword).then(|| (keyword, rest.trim()))
}
