//! Numeric coercion for form fields.

use serde::{Deserialize, Serialize};

/// A numeric form field: either already a number, or raw text typed by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Coerce to a number. Unparseable text yields `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => parse_number(s),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// String-to-number conversion with browser `Number()` semantics.
///
/// Surrounding whitespace is ignored and blank input is `0`. Accepts decimal
/// literals (`"12"`, `"-3.5"`, `".5"`, `"1e3"`), `Infinity` with optional sign, and
/// unsigned `0x`/`0o`/`0b` integers. Everything else is `NaN`.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_prefixed_integer(trimmed) {
        return value;
    }

    // `str::parse::<f64>` also accepts "inf"/"nan"/"infinity"; restrict the alphabet.
    let decimal_alphabet = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !decimal_alphabet {
        return f64::NAN;
    }

    trimmed.parse().unwrap_or(f64::NAN)
}

/// `Some` when `text` carries a radix prefix; the value is `NaN` if the digits are bad.
fn parse_prefixed_integer(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, text.get(2..)?),
        "0o" | "0O" => (8, text.get(2..)?),
        "0b" | "0B" => (2, text.get(2..)?),
        _ => return None,
    };

    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}
