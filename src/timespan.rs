//! Time spans of the randomization suffix, like `5m`, `1h 30min` or `2.5`.

/// Duration unit spellings, matched case-insensitively.
const UNITS: [&str; 34] = [
    "nsec", "ns", "usec", "us", "µs", "μs", "msec", "ms", "seconds", "second", "sec", "s", "minutes", "minute", "min",
    "m", "hours", "hour", "hr", "h", "days", "day", "d", "weeks", "week", "w", "months", "month", "M", "years", "year",
    "y", "µsec", "μsec",
];

/// Returns `true` if the whole `input` is a sequence of `amount[unit]` segments
/// separated by optional whitespace.
pub(crate) fn is_valid_timespan(input: &str) -> bool {
    let mut rest = input.trim();
    if rest.is_empty() {
        return false;
    }

    while !rest.is_empty() {
        let Some(after_amount) = strip_amount(rest) else {
            return false;
        };
        rest = strip_unit(after_amount).trim_start();
    }

    true
}

/// Strips leading `digits[.digits]`.
fn strip_amount(input: &str) -> Option<&str> {
    let int_len = input.bytes().take_while(u8::is_ascii_digit).count();
    if int_len == 0 {
        return None;
    }

    let rest = &input[int_len..];
    let frac_len = rest
        .strip_prefix('.')
        .map(|frac| frac.bytes().take_while(u8::is_ascii_digit).count())
        .unwrap_or_default();

    if frac_len > 0 {
        Some(&rest[frac_len + 1..])
    } else {
        Some(rest)
    }
}

/// Strips the longest leading unit spelling, if any.
fn strip_unit(input: &str) -> &str {
    UNITS
        .iter()
        .filter(|unit| input.get(..unit.len()).is_some_and(|prefix| prefix.eq_ignore_ascii_case(unit)))
        .map(|unit| unit.len())
        .max()
        .map_or(input, |len| &input[len..])
}
