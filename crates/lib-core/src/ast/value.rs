//! Literal values and the small word-list enums used inside expressions.

use core::fmt;

pub use crate::lexer::DollarQuotedString;

/// A literal value, such as a string, number, boolean or NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A numeric literal kept as its source text; the flag records a
    /// trailing `L` suffix
    Number(String, bool),
    /// 'string'
    SingleQuotedString(String),
    /// `$tag$ ... $tag$`
    DollarQuotedString(DollarQuotedString),
    /// N'string'
    NationalStringLiteral(String),
    /// X'abcd'
    HexStringLiteral(String),
    Boolean(bool),
    /// `?`, `?3`, `:name`, `$2`
    Placeholder(String),
    Null,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v, l) => write!(f, "{}{}", v, if *l { "L" } else { "" }),
            Value::SingleQuotedString(v) => write!(f, "'{}'", escape_single_quote_string(v)),
            Value::DollarQuotedString(v) => write!(f, "{v}"),
            Value::NationalStringLiteral(v) => write!(f, "N'{v}'"),
            Value::HexStringLiteral(v) => write!(f, "X'{v}'"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Placeholder(v) => write!(f, "{v}"),
            Value::Null => f.write_str("NULL"),
        }
    }
}

/// A field of a date/time value, as used in `EXTRACT`, `CEIL`/`FLOOR ... TO`
/// and `INTERVAL` qualifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum DateTimeField {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Century,
    Decade,
    Dow,
    Doy,
    Epoch,
    Isodow,
    Isoyear,
    Julian,
    Microsecond,
    Microseconds,
    Millenium,
    Millennium,
    Millisecond,
    Milliseconds,
    Nanosecond,
    Nanoseconds,
    Quarter,
    Timezone,
    #[strum(serialize = "TIMEZONE_HOUR")]
    TimezoneHour,
    #[strum(serialize = "TIMEZONE_MINUTE")]
    TimezoneMinute,
    /// `CEIL(x)` with no `TO` clause; never printed
    NoDateTime,
}

/// The position argument of `TRIM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum TrimWhereField {
    Both,
    Leading,
    Trailing,
}

/// Displays a string with every lone `'` doubled. Already-doubled quotes are
/// preserved as pairs, so the transformation is idempotent and printing a
/// non-unescaped literal does not double its escapes again.
pub struct EscapeSingleQuoteString<'a>(&'a str);

impl fmt::Display for EscapeSingleQuoteString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars = self.0.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                }
                f.write_str("''")?;
            } else {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

pub fn escape_single_quote_string(s: &str) -> EscapeSingleQuoteString<'_> {
    EscapeSingleQuoteString(s)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn escape_is_idempotent() {
        assert_eq!(escape_single_quote_string("a'b").to_string(), "a''b");
        assert_eq!(escape_single_quote_string("a''b").to_string(), "a''b");
        assert_eq!(escape_single_quote_string("'''").to_string(), "''''");
    }

    #[test]
    fn date_time_field_display() {
        assert_eq!(DateTimeField::TimezoneHour.to_string(), "TIMEZONE_HOUR");
        assert_eq!(DateTimeField::Year.to_string(), "YEAR");
    }
}
