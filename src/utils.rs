//! Common lookup tables and small lexical helpers.

/// Every accepted weekday spelling with its canonical 3-letter key.
const DAY_NAME_ALIASES: [(&str, &str); 18] = [
    ("mon", "mon"),
    ("monday", "mon"),
    ("tue", "tue"),
    ("tues", "tue"),
    ("tuesday", "tue"),
    ("wed", "wed"),
    ("weds", "wed"),
    ("wednesday", "wed"),
    ("thu", "thu"),
    ("thur", "thu"),
    ("thurs", "thu"),
    ("thursday", "thu"),
    ("fri", "fri"),
    ("friday", "fri"),
    ("sat", "sat"),
    ("saturday", "sat"),
    ("sun", "sun"),
    ("sunday", "sun"),
];

/// Canonical weekday keys, Monday first.
const CANONICAL_DAYS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// Named shortcuts accepted in place of a full calendar expression.
const SHORTCUTS: [&str; 12] = [
    "minutely",
    "hourly",
    "daily",
    "weekly",
    "monthly",
    "quarterly",
    "semiannually",
    "semiannual",
    "semi-annually",
    "semi-annual",
    "yearly",
    "annually",
];

/// Returns canonical 3-letter key of the weekday alias (case-insensitive).
pub(crate) fn canonical_day(input: &str) -> Option<&'static str> {
    DAY_NAME_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(input))
        .map(|(_, key)| *key)
}

/// Returns `true` if the input is one of the canonical weekday keys (case-insensitive).
pub(crate) fn is_canonical_day(input: &str) -> bool {
    CANONICAL_DAYS.iter().any(|day| day.eq_ignore_ascii_case(input))
}

/// Returns `true` if the input is a named shortcut (case-insensitive).
pub(crate) fn is_shortcut(input: &str) -> bool {
    SHORTCUTS.iter().any(|shortcut| shortcut.eq_ignore_ascii_case(input))
}

/// Returns the first `n` characters of the input, or `None` if it's shorter.
pub(crate) fn prefix_chars(input: &str, n: usize) -> Option<&str> {
    match input.char_indices().nth(n) {
        Some((idx, _)) => Some(&input[..idx]),
        None if input.chars().count() == n => Some(input),
        None => None,
    }
}

/// Returns `true` if the input is a non-empty sequence of ASCII digits.
#[inline]
pub(crate) fn is_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if the input looks like `digits[.digits]`.
pub(crate) fn is_decimal(input: &str) -> bool {
    match input.split_once('.') {
        Some((int, frac)) => is_digits(int) && is_digits(frac),
        None => is_digits(input),
    }
}

/// Strips a single leading `+` or `-`, if present.
#[inline]
pub(crate) fn strip_sign(input: &str) -> &str {
    input.strip_prefix(['+', '-']).unwrap_or(input)
}
