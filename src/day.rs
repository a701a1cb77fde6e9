//! Weekday component: `Mon`, `Sat,Sun`, `Mon..Fri`, `Mon, Wed, Fri`.
use crate::utils::{canonical_day, is_digits, prefix_chars};

/// Tries to take the leading weekday list off the `input`.
///
/// The longest run of letters, dots, commas and whitespace is validated as a whole.
/// On success returns the day spec and the rest of the input, otherwise the input is
/// returned untouched and no part of the run is consumed.
pub(crate) fn consume_day_spec(input: &str) -> (Option<&str>, &str) {
    let input = input.trim_start();
    if !input.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return (None, input);
    }

    let run_len = input
        .find(|c: char| !(c.is_ascii_alphabetic() || c == '.' || c == ',' || c.is_whitespace()))
        .unwrap_or(input.len());
    let (run, rest) = input.split_at(run_len);

    let candidate = run.trim();
    if is_valid_day_spec(candidate) {
        log::trace!("day spec {candidate:?} consumed");
        (Some(candidate), rest.trim_start())
    } else {
        log::trace!("{candidate:?} isn't a day spec, rewinding");
        (None, input)
    }
}

/// Returns `true` if `spec` is a comma separated list of weekday atoms:
/// `*`, `name`, `name..name`, each with optional `/step`.
///
/// Whitespace is ignored, trailing commas are dropped.
pub(crate) fn is_valid_day_spec(spec: &str) -> bool {
    let cleaned: String = spec.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned = cleaned.trim_end_matches(',');
    if cleaned.is_empty() {
        return false;
    }

    cleaned.split(',').all(is_valid_day_atom)
}

fn is_valid_day_atom(atom: &str) -> bool {
    if atom.is_empty() {
        return false;
    }

    let atom = match atom.split_once('/') {
        Some((atom, step)) => {
            if !is_digits(step) || step.bytes().all(|b| b == b'0') {
                return false;
            }
            atom
        }
        None => atom,
    };

    if atom == "*" {
        return true;
    }
    if atom.is_empty() {
        return false;
    }

    match atom.split_once("..") {
        Some((start, end)) => {
            !start.is_empty() && !end.is_empty() && !end.contains("..") && is_day_name(start) && is_day_name(end)
        }
        None => is_day_name(atom),
    }
}

/// Weekday digit `0`-`7`, any alias, or anything starting with a 3-letter alias.
fn is_day_name(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    if value.len() == 1 && matches!(value.as_bytes()[0], b'0'..=b'7') {
        return true;
    }

    canonical_day(value).is_some() || prefix_chars(value, 3).and_then(canonical_day).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Mon")]
    #[case("mon")]
    #[case("MONDAY")]
    #[case("Tues")]
    #[case("weds")]
    #[case("Thurs")]
    #[case("Sat,Sun")]
    #[case("Mon, Fri")]
    #[case("Mon , Wed ,Fri")]
    #[case("Mon..Fri")]
    #[case("Sat..Mon")]
    #[case("Mon..Wed,Fri")]
    #[case("Mon,")]
    #[case("Mon,,")]
    #[case("*")]
    #[case("*/2")]
    #[case("Mon..Fri/2")]
    #[case("Mon/1")]
    #[case("0")]
    #[case("7")]
    #[case("1..5")]
    #[case("Monkey")]
    fn test_valid_day_spec(#[case] spec: &str) {
        assert!(is_valid_day_spec(spec), "spec = {spec}");
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case(",")]
    #[case(",Mon")]
    #[case("Mon,,Tue")]
    #[case("Mon..")]
    #[case("..Fri")]
    #[case("Mon..Tue..Wed")]
    #[case("Something")]
    #[case("Mo")]
    #[case("8")]
    #[case("10")]
    #[case("Mon/0")]
    #[case("Mon/00")]
    #[case("Mon/")]
    #[case("Mon/x")]
    #[case("/2")]
    #[case("**")]
    #[case("today")]
    fn test_invalid_day_spec(#[case] spec: &str) {
        assert!(!is_valid_day_spec(spec), "spec = {spec}");
    }

    #[rstest]
    #[case("Mon *-*-* 09:00:00", Some("Mon"), "*-*-* 09:00:00")]
    #[case("Sat,Sun 20:00:00", Some("Sat,Sun"), "20:00:00")]
    #[case("Mon, Fri *-*-* 09:00:00", Some("Mon, Fri"), "*-*-* 09:00:00")]
    #[case("Mon..Fri", Some("Mon..Fri"), "")]
    #[case("  Mon   12:00", Some("Mon"), "12:00")]
    #[case("Mon,-*-* 09:00:00", Some("Mon,"), "-*-* 09:00:00")]
    #[case("Mon.. 09:00:00", None, "Mon.. 09:00:00")]
    #[case("today 14:00:00", None, "today 14:00:00")]
    #[case("Mon UTC", Some("Mon UTC"), "")]
    #[case("Mon 2024-01-01", Some("Mon"), "2024-01-01")]
    #[case("*-*-* 00:00:00", None, "*-*-* 00:00:00")]
    #[case("12:00", None, "12:00")]
    #[case("", None, "")]
    fn test_consume_day_spec(#[case] input: &str, #[case] spec: Option<&str>, #[case] rest: &str) {
        assert_eq!(consume_day_spec(input), (spec, rest), "input = {input}");
    }
}
