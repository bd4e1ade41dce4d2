//! Runtime field values used when building queries.

use std::fmt;

/// Characters with a meaning in the query syntax. Each is escaped with a
/// backslash when a string value is rendered as a term.
const SPECIAL_CHARS: &[char] = &[
    '+', '-', '&', '|', '!', '(', ')', '{', '}', '[', ']', '^', '"', '~', '*', '?', ':', '\\',
    '/',
];

/// A document field value.
///
/// Only the scalar kinds that can serve as a unique key are represented; the
/// value is needed to rebuild ID-filter queries, not to model whole documents.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// 32-bit signed integer.
    Int32(i32),
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit floating point.
    Float64(f64),
    /// UTF-8 string.
    String(String),
    /// UUID as 16 bytes.
    Uuid([u8; 16]),
}

impl Value {
    /// Try to get as i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(i) => Some(*i),
            Value::Int32(i) => Some(*i as i64),
            _ => None,
        }
    }

    /// Try to get as string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Render the value as a term that can follow `field:` in a query string.
    ///
    /// Strings and numbers are escaped, so a leading sign on a negative number
    /// is not read as an operator; an empty string becomes `""`.
    pub fn to_query_term(&self) -> String {
        match self {
            Value::Uuid(u) => format_uuid(u),
            Value::String(s) if s.is_empty() => "\"\"".to_string(),
            other => escape_term(&other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int32(i) => write!(f, "{}", i),
            Value::Int64(i) => write!(f, "{}", i),
            Value::Float64(v) => f.write_str(&format_float(*v)),
            Value::String(s) => f.write_str(s),
            Value::Uuid(u) => f.write_str(&format_uuid(u)),
        }
    }
}

/// Escape query-syntax characters and whitespace in a raw term.
pub fn escape_term(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if SPECIAL_CHARS.contains(&c) || c.is_whitespace() {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Non-finite floats use the spellings the engine's number parser accepts.
fn format_float(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        v.to_string()
    }
}

fn format_uuid(u: &[u8; 16]) -> String {
    format!(
        "{}-{}-{}-{}-{}",
        hex::encode(&u[0..4]),
        hex::encode(&u[4..6]),
        hex::encode(&u[6..8]),
        hex::encode(&u[8..10]),
        hex::encode(&u[10..16])
    )
}

// Conversion implementations
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<[u8; 16]> for Value {
    fn from(v: [u8; 16]) -> Self {
        Value::Uuid(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_conversions() {
        let v: Value = true.into();
        assert_eq!(v, Value::Bool(true));

        let v: Value = 42i32.into();
        assert_eq!(v, Value::Int32(42));
        assert_eq!(v.as_i64(), Some(42));

        let v: Value = "hello".into();
        assert_eq!(v.as_str(), Some("hello"));
    }

    #[test]
    fn test_numeric_terms_are_plain() {
        assert_eq!(Value::Int32(123).to_query_term(), "123");
        assert_eq!(Value::Float64(1.5).to_query_term(), "1.5");
        assert_eq!(Value::Bool(false).to_query_term(), "false");
    }

    #[test]
    fn test_negative_numbers_are_escaped() {
        assert_eq!(Value::Int32(-7).to_query_term(), "\\-7");
        assert_eq!(Value::Int64(-12).to_query_term(), "\\-12");
        assert_eq!(Value::Float64(-0.5).to_query_term(), "\\-0.5");
        assert_eq!(Value::Int32(-7).to_string(), "-7");
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(Value::Float64(f64::NAN).to_query_term(), "NaN");
        assert_eq!(Value::Float64(f64::INFINITY).to_query_term(), "Infinity");
        assert_eq!(
            Value::Float64(f64::NEG_INFINITY).to_query_term(),
            "\\-Infinity"
        );
    }

    #[test]
    fn test_string_terms_are_escaped() {
        assert_eq!(Value::from("abc").to_query_term(), "abc");
        assert_eq!(Value::from("a b").to_query_term(), "a\\ b");
        assert_eq!(Value::from("sku:1-2").to_query_term(), "sku\\:1\\-2");
        assert_eq!(Value::from("(x)").to_query_term(), "\\(x\\)");
        assert_eq!(Value::from("c:\\tmp").to_query_term(), "c\\:\\\\tmp");
        assert_eq!(Value::from("").to_query_term(), "\"\"");
    }

    #[test]
    fn test_uuid_term() {
        let v = Value::Uuid([
            0x55, 0x0e, 0x84, 0x00, 0xe2, 0x9b, 0x41, 0xd4, 0xa7, 0x16, 0x44, 0x66, 0x55, 0x44,
            0x00, 0x00,
        ]);
        assert_eq!(v.to_query_term(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_display_keeps_raw_strings() {
        assert_eq!(Value::from("a b").to_string(), "a b");
        assert_eq!(Value::Int32(5).to_string(), "5");
        assert_eq!(Value::Float64(f64::INFINITY).to_string(), "Infinity");
    }
}
