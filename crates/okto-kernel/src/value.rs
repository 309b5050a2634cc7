//! Runtime values held by Oktolang variables.

use std::fmt;

/// A variable's value.
///
/// The tag is fixed when the variable is declared; mutation replaces the
/// value with another of the same kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Decimal(f64),
    String(String),
    Boolean(bool),
}

/// The kind (tag) of a [`Value`], as named by the declaration verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Decimal,
    String,
    Boolean,
}

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Decimal(_) => ValueKind::Decimal,
            Value::String(_) => ValueKind::String,
            Value::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// Source-literal spelling of this value.
    ///
    /// Strings come back quoted so that re-classifying the literal yields
    /// the same kind as the value it came from.
    pub fn literal_form(&self) -> String {
        match self {
            Value::String(s) => format!("\"{s}\""),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    /// Textual rendering used by interpolation, sigils and `log`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Decimal(d) => f.write_str(&format_decimal(*d)),
            Value::String(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl ValueKind {
    /// Declaration verb for this kind (`int`, `dec`, `str`, `bool`).
    pub fn verb(self) -> &'static str {
        match self {
            ValueKind::Integer => "int",
            ValueKind::Decimal => "dec",
            ValueKind::String => "str",
            ValueKind::Boolean => "bool",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Integer => "integer",
            ValueKind::Decimal => "decimal",
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// Render a decimal so it always reads back as a decimal literal.
///
/// `3.0` stays `3.0` rather than collapsing to `3`.
pub fn format_decimal(d: f64) -> String {
    let s = d.to_string();
    if !d.is_finite() || s.contains(['.', 'e', 'E']) {
        s
    } else {
        format!("{s}.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_renders_as_digits() {
        assert_eq!(Value::Integer(-42).to_string(), "-42");
    }

    #[test]
    fn decimal_keeps_fraction() {
        assert_eq!(Value::Decimal(3.5).to_string(), "3.5");
        assert_eq!(Value::Decimal(3.0).to_string(), "3.0");
        assert_eq!(Value::Decimal(-0.25).to_string(), "-0.25");
    }

    #[test]
    fn string_renders_raw_content() {
        assert_eq!(Value::String("hi there".into()).to_string(), "hi there");
    }

    #[test]
    fn boolean_renders_keyword() {
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Boolean(false).to_string(), "false");
    }

    #[test]
    fn literal_form_quotes_strings_only() {
        assert_eq!(Value::String("5".into()).literal_form(), "\"5\"");
        assert_eq!(Value::Integer(5).literal_form(), "5");
    }

    #[test]
    fn kind_matches_tag() {
        assert_eq!(Value::Decimal(1.0).kind(), ValueKind::Decimal);
        assert_eq!(ValueKind::Decimal.verb(), "dec");
    }
}
