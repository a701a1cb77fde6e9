//! Conversion of the classic 5-fields cron expressions (as used by Kubernetes CronJob)
//! into `OnCalendar=` calendar expressions.
use crate::{error::CronField, utils::is_digits, Error, Result};

/// Cron macros with their calendar shortcuts.
const MACROS: [(&str, &str); 7] = [
    ("@yearly", "yearly"),
    ("@annually", "annually"),
    ("@monthly", "monthly"),
    ("@weekly", "weekly"),
    ("@daily", "daily"),
    ("@midnight", "daily"),
    ("@hourly", "hourly"),
];

const MONTH_NAMES: [(&str, u8); 13] = [
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("sept", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
];

/// Calendar weekday names, index is the cron day of week number.
const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const WEEKDAY_ALIASES: [(&str, u8); 18] = [
    ("sun", 0),
    ("sunday", 0),
    ("mon", 1),
    ("monday", 1),
    ("tue", 2),
    ("tues", 2),
    ("tuesday", 2),
    ("wed", 3),
    ("weds", 3),
    ("wednesday", 3),
    ("thu", 4),
    ("thur", 4),
    ("thurs", 4),
    ("thursday", 4),
    ("fri", 5),
    ("friday", 5),
    ("sat", 6),
    ("saturday", 6),
];

impl CronField {
    /// Returns minimum and maximum numeric values of the field.
    const fn min_max(&self) -> (u8, u8) {
        match self {
            CronField::Minute => (0, 59),
            CronField::Hour => (0, 23),
            CronField::DayOfMonth => (1, 31),
            CronField::Month => (1, 12),
            CronField::DayOfWeek => (0, 7),
        }
    }
}

/// Converts 5-fields cron `expression` into calendar expression.
///
/// Result may contain two newline separated expressions: cron fires when either day of month
/// or day of week matches, if both are restricted.
///
/// ```rust
/// use oncalendar_lite::convert_from_cron;
///
/// assert_eq!(convert_from_cron("0 9-17 * * MON-FRI").unwrap(), "Mon..Fri *-*-* 9..17:00:00");
/// assert_eq!(convert_from_cron("@midnight").unwrap(), "daily");
/// assert!(convert_from_cron("@reboot").is_err());
/// ```
pub fn convert_from_cron(expression: &str) -> Result<String> {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyExpression);
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some((_, shortcut)) = MACROS.iter().find(|(name, _)| *name == lower) {
        return Ok(shortcut.to_string());
    }
    if lower == "@reboot" {
        return Err(Error::UnsupportedMacro(trimmed.to_owned()));
    }

    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    let [minute, hour, dom, month, dow] = fields.as_slice() else {
        return Err(Error::InvalidFieldCount(fields.len()));
    };

    let minute = convert_field(minute, CronField::Minute)?;
    let hour = convert_field(hour, CronField::Hour)?;
    let dom = convert_field(dom, CronField::DayOfMonth)?;
    let month = convert_field(month, CronField::Month)?;
    let dow = convert_field(dow, CronField::DayOfWeek)?;

    let time = format!("{}:{}:00", pad_time_component(&hour), pad_time_component(&minute));
    let date = format!("*-{month}-{dom}");

    let calendar = if dow == "*" {
        format!("{date} {time}")
    } else if dom == "*" {
        format!("{dow} {date} {time}")
    } else {
        format!("{date} {time}\n{dow} *-{month}-* {time}")
    };
    log::debug!("cron expression {trimmed:?} converted to {calendar:?}");

    Ok(calendar)
}

/// Converts comma separated list of segments.
///
/// A list with the bare `*` (or `?`) matches every value, so the whole field becomes `*`.
fn convert_field(value: &str, field: CronField) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::MissingField(field));
    }

    let segments = value
        .split(',')
        .map(|segment| convert_segment(segment.trim(), field))
        .collect::<Result<Vec<_>>>()?;
    if segments.iter().any(|segment| segment == "*") {
        return Ok("*".to_string());
    }

    Ok(segments.join(","))
}

/// Converts `range[/step]`.
fn convert_segment(segment: &str, field: CronField) -> Result<String> {
    let invalid_segment = || Error::InvalidSegment {
        field,
        segment: segment.to_owned(),
    };
    if segment.is_empty() {
        return Err(invalid_segment());
    }

    let pieces: Vec<&str> = segment.split('/').collect();
    let (range, step) = match pieces.as_slice() {
        [range] => (*range, None),
        [range, step] => (*range, Some(parse_step(step, field)?)),
        _ => return Err(invalid_segment()),
    };

    match (field, step) {
        (CronField::DayOfWeek, Some(step)) => expand_weekdays(range, step),
        (_, Some(step)) => Ok(format!("{}/{step}", convert_range(range, field)?)),
        (_, None) => convert_range(range, field),
    }
}

fn parse_step(step: &str, field: CronField) -> Result<u32> {
    let invalid_step = || Error::InvalidStep {
        field,
        step: step.to_owned(),
    };
    if !is_digits(step) {
        return Err(invalid_step());
    }

    match step.parse::<u32>() {
        Ok(0) => Err(Error::ZeroStep(field)),
        Ok(step) => Ok(step),
        Err(_) => Err(invalid_step()),
    }
}

/// Converts `*`, `?`, `a-b` or a single value.
fn convert_range(range: &str, field: CronField) -> Result<String> {
    let range = range.trim();
    if range == "*" || range == "?" {
        return Ok("*".to_string());
    }

    match split_range(range, field)? {
        Some((start, end)) => Ok(format!(
            "{}..{}",
            convert_value(start, field)?,
            convert_value(end, field)?
        )),
        None => convert_value(range, field),
    }
}

/// Splits `a-b` into bounds, returns `None` if it isn't a range.
fn split_range(range: &str, field: CronField) -> Result<Option<(&str, &str)>> {
    let invalid_range = || Error::InvalidRange {
        field,
        range: range.to_owned(),
    };
    if range.is_empty() {
        return Err(invalid_range());
    }
    if !range.contains('-') {
        return Ok(None);
    }

    let bounds: Vec<&str> = range.split('-').map(str::trim).collect();
    match bounds.as_slice() {
        [start, end] if !start.is_empty() && !end.is_empty() => Ok(Some((*start, *end))),
        _ => Err(invalid_range()),
    }
}

fn convert_value(value: &str, field: CronField) -> Result<String> {
    match field {
        CronField::Month => month_number(value).map(|month| month.to_string()),
        CronField::DayOfWeek => weekday_number(value).map(|day| WEEKDAY_NAMES[usize::from(day % 7)].to_string()),
        _ => numeric_value(value, field).map(|value| value.to_string()),
    }
}

fn numeric_value(value: &str, field: CronField) -> Result<u8> {
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    if !is_digits(unsigned) {
        return Err(Error::UnsupportedToken {
            field,
            token: value.to_owned(),
        });
    }

    bounded_number(value, field)
}

fn month_number(value: &str) -> Result<u8> {
    if is_digits(value) {
        return bounded_number(value, CronField::Month);
    }

    MONTH_NAMES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(value))
        .map(|(_, month)| *month)
        .ok_or_else(|| Error::UnknownMonth(value.to_owned()))
}

/// Returns day of week number `0`-`7`, both `0` and `7` are Sunday.
fn weekday_number(value: &str) -> Result<u8> {
    if is_digits(value) {
        return bounded_number(value, CronField::DayOfWeek);
    }

    WEEKDAY_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(value))
        .map(|(_, day)| *day)
        .ok_or_else(|| Error::UnknownDayOfWeek(value.to_owned()))
}

fn bounded_number(value: &str, field: CronField) -> Result<u8> {
    let (min, max) = field.min_max();
    value
        .parse::<i64>()
        .ok()
        .filter(|number| (i64::from(min)..=i64::from(max)).contains(number))
        .and_then(|number| u8::try_from(number).ok())
        .ok_or_else(|| Error::ValueOutOfRange {
            field,
            value: value.to_owned(),
            min,
            max,
        })
}

/// Expands stepped day of week segment into the list of weekday names,
/// ordered from Sunday.
fn expand_weekdays(range: &str, step: u32) -> Result<String> {
    let range = range.trim();
    let (start, end) = if range == "*" || range == "?" {
        (0, 6)
    } else {
        match split_range(range, CronField::DayOfWeek)? {
            Some((start, end)) => (weekday_number(start)?, weekday_number(end)?),
            None => (weekday_number(range)?, 6),
        }
    };

    // 7 at the start is the Sunday opening the week, 0 at the end is the one closing it
    let (start, end) = if start == 7 { (0, end % 7) } else { (start, end) };
    let end = if end == 0 && start > 0 { 7 } else { end };
    if start > end {
        return Err(Error::InvalidRange {
            field: CronField::DayOfWeek,
            range: range.to_owned(),
        });
    }

    let mut selected = [false; 7];
    let step = usize::try_from(step).unwrap_or(usize::MAX);
    for day in (usize::from(start)..=usize::from(end)).step_by(step) {
        selected[day % 7] = true;
    }

    let names: Vec<&str> = WEEKDAY_NAMES
        .iter()
        .zip(selected)
        .filter_map(|(name, selected)| selected.then_some(*name))
        .collect();

    Ok(names.join(","))
}

/// Plain numbers of hour and minute are zero-padded to two digits.
fn pad_time_component(component: &str) -> String {
    if is_digits(component) {
        format!("{component:0>2}")
    } else {
        component.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("* * * * *", "*-*-* *:*:00")]
    #[case("15 9 * * *", "*-*-* 09:15:00")]
    #[case("0 */6 * * 1-5", "Mon..Fri *-*-* */6:00:00")]
    #[case("0 0 1 1 *", "*-1-1 00:00:00")]
    #[case("0 9 1 * MON", "*-*-1 09:00:00\nMon *-*-* 09:00:00")]
    #[case("*/30 6 * JAN-MAR SUN", "Sun *-1..3-* 06:*/30:00")]
    #[case("0 9-17 * * MON-FRI", "Mon..Fri *-*-* 9..17:00:00")]
    #[case("00 07 01 01 *", "*-1-1 07:00:00")]
    #[case("5,10,15 0 * * *", "*-*-* 00:5,10,15:00")]
    #[case("0/15 * * * *", "*-*-* *:0/15:00")]
    #[case("0 0 */2 * *", "*-*-*/2 00:00:00")]
    #[case("0 0 * */3 *", "*-*/3-* 00:00:00")]
    #[case("0 0 ? * ?", "*-*-* 00:00:00")]
    #[case("0 0 * Sept,dec *", "*-9,12-* 00:00:00")]
    #[case("0 0 * * 7", "Sun *-*-* 00:00:00")]
    #[case("0 0 * * 0,6", "Sun,Sat *-*-* 00:00:00")]
    #[case("0 0 * * tues,THURSDAY", "Tue,Thu *-*-* 00:00:00")]
    #[case("0 0 * * */2", "Sun,Tue,Thu,Sat *-*-* 00:00:00")]
    #[case("0 0 * * 1-5/2", "Mon,Wed,Fri *-*-* 00:00:00")]
    #[case("0 0 * * 1/3", "Mon,Thu *-*-* 00:00:00")]
    #[case("0 0 * * 5-0/2", "Sun,Fri *-*-* 00:00:00")]
    #[case("0 0 * * 0-7/1", "Sun,Mon,Tue,Wed,Thu,Fri,Sat *-*-* 00:00:00")]
    #[case("0 0 * * 7-7/1", "Sun *-*-* 00:00:00")]
    #[case("0 0 * * 7-3/1", "Sun,Mon,Tue,Wed *-*-* 00:00:00")]
    #[case("0 0 * * 7/3", "Sun,Wed,Sat *-*-* 00:00:00")]
    #[case("0 0 * * *,1", "*-*-* 00:00:00")]
    #[case("0 0 * * 1,*", "*-*-* 00:00:00")]
    #[case("0 0 1 * ?,MON", "*-*-1 00:00:00")]
    #[case("0 0 * * */2,?", "*-*-* 00:00:00")]
    #[case("*,5 * * * *", "*-*-* *:*:00")]
    #[case("0 12 */005 * *", "*-*-*/5 12:00:00")]
    #[case("  30   4   *   *   *  ", "*-*-* 04:30:00")]
    #[case("0 0 15 6 SAT", "*-6-15 00:00:00\nSat *-6-* 00:00:00")]
    fn test_convert(#[case] cron: &str, #[case] expected: &str) {
        assert_eq!(convert_from_cron(cron).unwrap(), expected, "cron = {cron}");
    }

    #[rstest]
    #[case("@yearly", "yearly")]
    #[case("@annually", "annually")]
    #[case("@monthly", "monthly")]
    #[case("@weekly", "weekly")]
    #[case("@daily", "daily")]
    #[case("@midnight", "daily")]
    #[case("@hourly", "hourly")]
    #[case(" @Daily ", "daily")]
    #[case("@HOURLY", "hourly")]
    fn test_convert_macros(#[case] cron: &str, #[case] expected: &str) {
        assert_eq!(convert_from_cron(cron).unwrap(), expected, "cron = {cron}");
    }

    #[rstest]
    #[case("", Error::EmptyExpression)]
    #[case("   ", Error::EmptyExpression)]
    #[case("@reboot", Error::UnsupportedMacro("@reboot".to_string()))]
    #[case("@REBOOT", Error::UnsupportedMacro("@REBOOT".to_string()))]
    #[case("@minutely", Error::InvalidFieldCount(1))]
    #[case("* * * *", Error::InvalidFieldCount(4))]
    #[case("0 * * * * *", Error::InvalidFieldCount(6))]
    #[case("1,,2 * * * *", Error::InvalidSegment { field: CronField::Minute, segment: String::new() })]
    #[case("1/2/3 * * * *", Error::InvalidSegment { field: CronField::Minute, segment: "1/2/3".to_string() })]
    #[case("*/x * * * *", Error::InvalidStep { field: CronField::Minute, step: "x".to_string() })]
    #[case("5/ * * * *", Error::InvalidStep { field: CronField::Minute, step: String::new() })]
    #[case("* */0 * * *", Error::ZeroStep(CronField::Hour))]
    #[case("* * 1-2-3 * *", Error::InvalidRange { field: CronField::DayOfMonth, range: "1-2-3".to_string() })]
    #[case("* * * 1- *", Error::InvalidRange { field: CronField::Month, range: "1-".to_string() })]
    #[case("-1 * * * *", Error::InvalidRange { field: CronField::Minute, range: "-1".to_string() })]
    #[case("* * L * *", Error::UnsupportedToken { field: CronField::DayOfMonth, token: "L".to_string() })]
    #[case("60 * * * *", Error::ValueOutOfRange { field: CronField::Minute, value: "60".to_string(), min: 0, max: 59 })]
    #[case("* 24 * * *", Error::ValueOutOfRange { field: CronField::Hour, value: "24".to_string(), min: 0, max: 23 })]
    #[case("* * 0 * *", Error::ValueOutOfRange { field: CronField::DayOfMonth, value: "0".to_string(), min: 1, max: 31 })]
    #[case("* * * 13 *", Error::ValueOutOfRange { field: CronField::Month, value: "13".to_string(), min: 1, max: 12 })]
    #[case("* * * * 8", Error::ValueOutOfRange { field: CronField::DayOfWeek, value: "8".to_string(), min: 0, max: 7 })]
    #[case("* * * foo *", Error::UnknownMonth("foo".to_string()))]
    #[case("* * * * someday", Error::UnknownDayOfWeek("someday".to_string()))]
    #[case("* * * * 5-1/2", Error::InvalidRange { field: CronField::DayOfWeek, range: "5-1".to_string() })]
    fn test_convert_errors(#[case] cron: &str, #[case] expected: Error) {
        assert_eq!(convert_from_cron(cron), Err(expected), "cron = {cron}");
    }

    #[rstest]
    #[case("5", "05")]
    #[case("23", "23")]
    #[case("*", "*")]
    #[case("*/6", "*/6")]
    #[case("9..17", "9..17")]
    fn test_pad_time_component(#[case] component: &str, #[case] expected: &str) {
        assert_eq!(pad_time_component(component), expected);
    }
}
