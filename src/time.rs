//! Time component: `09:00:00`, `*:*/15:00`, `9..17:00`, `09:00,15:00,21:00`.
use crate::{field::FieldType, utils::is_digits};

/// Returns `true` if `token` is a valid time spec.
///
/// `time_only` must be set when the time is the single component of the expression,
/// in this case hour and minute without seconds are accepted at whole hours only.
pub(crate) fn is_valid_time_spec(token: &str, time_only: bool) -> bool {
    let token = token.trim();
    if token.is_empty() {
        return false;
    }

    let parts = split_commas(token);
    if parts.len() > 1 && parts.iter().all(|part| part.contains(':')) {
        parts.into_iter().all(|atom| is_valid_time_atom(atom, time_only))
    } else {
        is_valid_time_atom(token, time_only)
    }
}

/// `hour:minute[:second]`.
fn is_valid_time_atom(atom: &str, time_only: bool) -> bool {
    let parts: Vec<&str> = atom.split(':').collect();
    let (hour, minute, second) = match parts.as_slice() {
        [hour, minute] => (*hour, *minute, None),
        [hour, minute, second] => (*hour, *minute, Some(*second)),
        _ => return false,
    };
    if hour.is_empty() || minute.is_empty() {
        return false;
    }
    if !FieldType::Hour.validate(hour) || !FieldType::Minute.validate(minute) {
        return false;
    }

    match second {
        Some(second) => !second.is_empty() && FieldType::Second.validate(second),
        None => !is_flexible_minute(minute) && (!time_only || is_zero_minute_list(minute)),
    }
}

/// Minute which matches more than a fixed list of values.
fn is_flexible_minute(minute: &str) -> bool {
    minute.contains(['*', '~', '/']) || minute.contains("..")
}

fn is_zero_minute_list(minute: &str) -> bool {
    let parts = split_commas(minute);
    !parts.is_empty() && parts.iter().all(|part| is_digits(part) && part.bytes().all(|b| b == b'0'))
}

/// Splits by commas, trims and drops empty parts.
fn split_commas(input: &str) -> Vec<&str> {
    input.split(',').map(str::trim).filter(|part| !part.is_empty()).collect()
}
