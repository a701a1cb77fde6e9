use crate::utils::{is_decimal, is_digits, strip_sign};
use std::fmt::Display;

/// Numeric component of a calendar expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldType {
    /// Year of the date spec, `0..9999`.
    Year,
    /// Month of the date spec, `1..12`.
    Month,
    /// Day of month of the date spec, `1..31`, `~N` is allowed.
    Day,
    /// Hour of the time spec, `0..23`.
    Hour,
    /// Minute of the time spec, `0..59`.
    Minute,
    /// Second of the time spec, `0..59`, fractions are allowed.
    Second,
}

/// Legality table of the single field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldRules {
    /// Minimal value, inclusive.
    pub min: u16,
    /// Maximal value, inclusive.
    pub max: u16,
    /// Bare `*` is allowed.
    pub allow_wildcard: bool,
    /// `~N` (N units before the end of the period) is allowed.
    pub allow_tilde: bool,
    /// Decimal values and steps are allowed.
    pub allow_fraction: bool,
    /// Signed values are allowed.
    pub allow_negative: bool,
}

impl FieldRules {
    const fn new(min: u16, max: u16) -> Self {
        Self {
            min,
            max,
            allow_wildcard: true,
            allow_tilde: false,
            allow_fraction: false,
            allow_negative: false,
        }
    }
}

const YEAR_RULES: FieldRules = FieldRules::new(0, 9999);
const MONTH_RULES: FieldRules = FieldRules::new(1, 12);
const DAY_RULES: FieldRules = FieldRules {
    allow_tilde: true,
    ..FieldRules::new(1, 31)
};
const HOUR_RULES: FieldRules = FieldRules::new(0, 23);
const MINUTE_RULES: FieldRules = FieldRules::new(0, 59);
const SECOND_RULES: FieldRules = FieldRules {
    allow_fraction: true,
    ..FieldRules::new(0, 59)
};

impl FieldType {
    /// Returns legality table of the field.
    pub const fn rules(&self) -> FieldRules {
        match self {
            Self::Year => YEAR_RULES,
            Self::Month => MONTH_RULES,
            Self::Day => DAY_RULES,
            Self::Hour => HOUR_RULES,
            Self::Minute => MINUTE_RULES,
            Self::Second => SECOND_RULES,
        }
    }

    /// Returns `true` if `input` is a valid value list of this field.
    #[inline]
    pub fn validate(&self, input: &str) -> bool {
        match Field::parse(*self, input) {
            Some(field) => {
                log::trace!("{self:?} field {input:?} parsed as {field}");
                true
            }
            None => false,
        }
    }
}

/// Single bound of the field item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum FieldValue<'a> {
    All,
    Number(&'a str),
    // ~N
    FromEnd(&'a str),
}

impl Display for FieldValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::All => write!(f, "*"),
            FieldValue::Number(value) => write!(f, "{value}"),
            FieldValue::FromEnd(value) => write!(f, "~{value}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum FieldItem<'a> {
    Value(FieldValue<'a>),
    // start..end
    Range(FieldValue<'a>, FieldValue<'a>),
    // start/step
    RepeatingValue(FieldValue<'a>, &'a str),
    // start..end/step
    RepeatingRange(FieldValue<'a>, FieldValue<'a>, &'a str),
}

impl Display for FieldItem<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldItem::Value(value) => write!(f, "{value}"),
            FieldItem::Range(start, end) => write!(f, "{start}..{end}"),
            FieldItem::RepeatingValue(value, step) => write!(f, "{value}/{step}"),
            FieldItem::RepeatingRange(start, end, step) => write!(f, "{start}..{end}/{step}"),
        }
    }
}

/// Parsed, but not materialized, comma separated value list of one field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Field<'a> {
    items: Vec<FieldItem<'a>>,
}

impl<'a> Field<'a> {
    /// Parses comma separated list of `range[/step]` atoms.
    ///
    /// Returns `None` if any atom violates legality table of the `type_`.
    pub(crate) fn parse(type_: FieldType, input: &'a str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let rules = type_.rules();
        let items = input
            .split(',')
            .map(|atom| parse_item(&rules, atom))
            .collect::<Option<Vec<_>>>()?;

        Some(Self { items })
    }

    #[cfg(test)]
    pub(crate) fn items(&self) -> &[FieldItem<'a>] {
        &self.items
    }
}

impl Display for Field<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values = self.items.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
        write!(f, "{values}")
    }
}

fn parse_item<'a>(rules: &FieldRules, atom: &'a str) -> Option<FieldItem<'a>> {
    let atom = atom.trim();
    if atom.is_empty() {
        return None;
    }

    let (range, step) = match atom.split_once('/') {
        Some((_, step)) if step.contains('/') => return None,
        Some((range, step)) => {
            if !is_valid_step(step, rules.allow_fraction) {
                return None;
            }
            (range, Some(step))
        }
        None => (atom, None),
    };
    if range.is_empty() {
        return None;
    }

    let bounds = if range.contains("..") {
        let (start, end) = range.split_once("..")?;
        if start.is_empty() || end.is_empty() || end.contains("..") {
            return None;
        }
        (parse_value(rules, start)?, Some(parse_value(rules, end)?))
    } else {
        (parse_value(rules, range)?, None)
    };

    let item = match (bounds, step) {
        ((value, None), None) => FieldItem::Value(value),
        ((start, Some(end)), None) => FieldItem::Range(start, end),
        ((value, None), Some(step)) => FieldItem::RepeatingValue(value, step),
        ((start, Some(end)), Some(step)) => FieldItem::RepeatingRange(start, end, step),
    };

    Some(item)
}

/// Step must be a positive integer, or positive decimal if the field allows fractions.
fn is_valid_step(step: &str, allow_fraction: bool) -> bool {
    let shaped = if allow_fraction { is_decimal(step) } else { is_digits(step) };
    shaped && step.parse::<f64>().is_ok_and(|step| step > 0.0)
}

fn parse_value<'a>(rules: &FieldRules, input: &'a str) -> Option<FieldValue<'a>> {
    let value = input.trim();
    if value.is_empty() {
        return None;
    }
    if value == "*" {
        return rules.allow_wildcard.then_some(FieldValue::All);
    }

    let (number, from_end) = match value.strip_prefix('~') {
        Some(_) if !rules.allow_tilde => return None,
        Some(rest) => (rest, true),
        None => (value, false),
    };

    let unsigned = if rules.allow_negative { strip_sign(number) } else { number };
    let shaped = if rules.allow_fraction {
        is_decimal(unsigned)
    } else {
        is_digits(unsigned)
    };
    if !shaped {
        return None;
    }

    let numeric = number.parse::<f64>().ok().filter(|n| n.is_finite())?;
    if from_end {
        // Relative to the end of the period, so the field bounds don't apply.
        (numeric > 0.0).then_some(FieldValue::FromEnd(number))
    } else {
        (numeric >= f64::from(rules.min) && numeric <= f64::from(rules.max)).then_some(FieldValue::Number(number))
    }
}
