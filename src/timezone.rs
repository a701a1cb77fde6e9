//! Timezone literals: `UTC`/`GMT`/`Z` with optional offset, `Area/Location` paths and bare abbreviations.
use crate::utils::{is_canonical_day, is_digits, prefix_chars};

const UTC_NAMES: [&str; 3] = ["UTC", "GMT", "Z"];

/// Returns `true` if `token` is a timezone literal.
///
/// Token with `TZ=` prefix is never a literal, the prefix belongs to the directive form.
pub(crate) fn is_valid_timezone(token: &str) -> bool {
    if token.is_empty() || prefix_chars(token, 3).is_some_and(|prefix| prefix.eq_ignore_ascii_case("TZ=")) {
        return false;
    }

    is_utc_offset(token) || is_area_path(token) || is_abbreviation(token)
}

/// `UTC`, `GMT+2`, `z-05:30`, `utc+0530`.
fn is_utc_offset(token: &str) -> bool {
    let Some(offset) = UTC_NAMES.iter().find_map(|name| {
        prefix_chars(token, name.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(name))
            .map(|prefix| &token[prefix.len()..])
    }) else {
        return false;
    };

    if offset.is_empty() {
        return true;
    }

    let Some(offset) = offset.strip_prefix(['+', '-']) else {
        return false;
    };
    match offset.split_once(':') {
        Some((hours, minutes)) => is_digits(hours) && hours.len() <= 2 && is_digits(minutes) && minutes.len() == 2,
        // H, HH, HMM or HHMM
        None => is_digits(offset) && offset.len() <= 4,
    }
}

/// `Europe/Paris`, `America/Argentina/Buenos_Aires`, `Etc/GMT-3`.
fn is_area_path(token: &str) -> bool {
    let mut segments = token.split('/');
    let area = segments.next().unwrap_or_default();
    let mut locations = segments.peekable();

    !area.is_empty()
        && area.bytes().all(|b| b.is_ascii_alphabetic())
        && locations.peek().is_some()
        && locations.all(|location| !location.is_empty() && location.bytes().all(is_name_byte))
}

/// `EST`, `CET`, `PST8PDT`, but never something starting with a weekday key like `Mon` or `Sunday`.
fn is_abbreviation(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() >= 3
        && bytes[..3].iter().all(u8::is_ascii_alphabetic)
        && bytes.iter().all(|b| is_name_byte(*b))
        && !is_canonical_day(&token[..3])
}

#[inline]
fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("UTC")]
    #[case("utc")]
    #[case("GMT")]
    #[case("Z")]
    #[case("z")]
    #[case("UTC+2")]
    #[case("UTC-11")]
    #[case("GMT+05:30")]
    #[case("UTC+0530")]
    #[case("UTC+130")]
    #[case("Z-3:00")]
    #[case("Europe/Paris")]
    #[case("America/New_York")]
    #[case("America/Argentina/Buenos_Aires")]
    #[case("Etc/GMT-3")]
    #[case("EST")]
    #[case("CET")]
    #[case("PST8PDT")]
    #[case("Asia")]
    fn test_valid_timezone(#[case] token: &str) {
        assert!(is_valid_timezone(token), "token = {token}");
    }

    #[rstest]
    #[case("")]
    #[case("TZ=UTC")]
    #[case("tz=Europe/Paris")]
    #[case("UTC+")]
    #[case("UTC+12345")]
    #[case("UTC+1:2")]
    #[case("UTC*2")]
    #[case("GMT+05:300")]
    #[case("Europe/")]
    #[case("/Paris")]
    #[case("Europe//Paris")]
    #[case("Euro9/Paris")]
    #[case("Europe/Pa ris")]
    #[case("ES")]
    #[case("E5T")]
    #[case("Mon")]
    #[case("monday")]
    #[case("SAT")]
    #[case("Sunny")]
    #[case("Thursday")]
    #[case("12:00")]
    #[case("*-*-*")]
    #[case("Sat,Sun")]
    fn test_invalid_timezone(#[case] token: &str) {
        assert!(!is_valid_timezone(token), "token = {token}");
    }
}
