use crate::{convert_from_cron, expression::split_expressions, Error, Expression, Result};
use std::{fmt::Display, str::FromStr};

/// Validated `OnCalendar=` value: one or more calendar expressions.
///
/// For grammar clarification and usage examples, please refer to the [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct CalendarSpec {
    expressions: Vec<Expression>,
}

impl CalendarSpec {
    /// Validates provided `spec` and constructs [`CalendarSpec`] instance.
    ///
    /// Alternative way to construct [`CalendarSpec`] is to use one of `try_from` or `from_str` methods.
    ///
    /// Returns [`Error::InvalidCalendarSpec`] if the spec has no expressions or any of them is invalid.
    pub fn new(spec: impl Into<String>) -> Result<Self> {
        let spec = spec.into();
        let expressions = split_expressions(&spec);
        if expressions.is_empty() {
            return Err(Error::InvalidCalendarSpec(spec));
        }

        let expressions = expressions
            .into_iter()
            .map(Expression::parse)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| Error::InvalidCalendarSpec(spec.clone()))?;

        Ok(Self { expressions })
    }

    /// Converts 5-fields cron expression and constructs [`CalendarSpec`] from the result.
    pub fn from_cron(cron: &str) -> Result<Self> {
        Self::new(convert_from_cron(cron)?)
    }

    /// Returns all expressions of the spec in the original order.
    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }

    /// Returns an iterator over the expressions.
    pub fn iter(&self) -> std::slice::Iter<'_, Expression> {
        self.expressions.iter()
    }

    /// Returns number of expressions, it's never zero.
    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    /// Always `false`, the spec has at least one expression.
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}

impl<'a> IntoIterator for &'a CalendarSpec {
    type Item = &'a Expression;
    type IntoIter = std::slice::Iter<'a, Expression>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<CalendarSpec> for String {
    fn from(value: CalendarSpec) -> Self {
        value.to_string()
    }
}

impl From<&CalendarSpec> for String {
    fn from(value: &CalendarSpec) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for CalendarSpec {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for CalendarSpec {
    type Error = Error;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CalendarSpec {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for CalendarSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for CalendarSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, expression) in self.expressions.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{expression}")?;
        }

        Ok(())
    }
}
