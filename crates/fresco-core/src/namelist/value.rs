use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Number as written in the input deck.
///
/// Output echoes `raw` untouched so that user formatting such as `60` versus
/// `60.0` or `1.0d-3` survives a parse/generate cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Numeric {
    raw: String,
    value: f64,
}

impl Numeric {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let value = parse_fortran_real(trimmed)?;
        value.is_finite().then(|| Self {
            raw: trimmed.to_string(),
            value,
        })
    }

    pub fn from_f64(value: f64) -> Self {
        Self {
            raw: format_number(value),
            value,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn as_i32(&self) -> Option<i32> {
        let rounded = self.value.round();
        ((self.value - rounded).abs() < 1e-9
            && rounded >= f64::from(i32::MIN)
            && rounded <= f64::from(i32::MAX))
        .then_some(rounded as i32)
    }
}

impl Display for Numeric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Numeric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}

impl<'de> Deserialize<'de> for Numeric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(value) if value.is_finite() => Ok(Self::from_f64(value)),
            Repr::Number(value) => Err(D::Error::custom(format!("non-finite number {value}"))),
            Repr::Text(raw) => {
                Self::parse(&raw).ok_or_else(|| D::Error::custom(format!("`{raw}` is not a number")))
            }
        }
    }
}

/// Value of one namelist assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NamelistValue {
    Number(Numeric),
    Logical(bool),
    Text(String),
    /// Multi-value parameter such as `elab=6.9 11.0 49.35`.
    List(Vec<Numeric>),
    /// Slots assigned through `name(i:j)=...`, keyed by slot index.
    Indexed(BTreeMap<i32, Numeric>),
}

impl NamelistValue {
    /// Classifies one de-quoted token. Quoted tokens are always text.
    pub fn from_token(raw: &str, quoted: bool) -> Self {
        if quoted {
            return Self::Text(raw.to_string());
        }
        if let Some(flag) = parse_logical(raw) {
            return Self::Logical(flag);
        }
        match Numeric::parse(raw) {
            Some(number) => Self::Number(number),
            None => Self::Text(raw.to_string()),
        }
    }

    pub fn number(value: f64) -> Self {
        Self::Number(Numeric::from_f64(value))
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(number.value()),
            Self::Text(text) => Numeric::parse(text).map(|number| number.value()),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Number(number) => number.as_i32(),
            Self::Text(text) => Numeric::parse(text).and_then(|number| number.as_i32()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Logical(flag) => Some(*flag),
            Self::Text(text) => parse_logical(text),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::List(values) => values.is_empty(),
            Self::Indexed(slots) => slots.is_empty(),
            Self::Number(_) | Self::Logical(_) => false,
        }
    }

    /// Text as it would appear to the right of `=` without quoting rules.
    pub fn display_text(&self) -> String {
        match self {
            Self::Number(number) => number.raw().to_string(),
            Self::Logical(flag) => fortran_logical(*flag).to_string(),
            Self::Text(text) => text.clone(),
            Self::List(values) => join_numbers(values.iter()),
            Self::Indexed(slots) => join_numbers(slots.values()),
        }
    }
}

impl Display for NamelistValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_text())
    }
}

pub const fn fortran_logical(flag: bool) -> &'static str {
    if flag { "T" } else { "F" }
}

pub fn parse_logical(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "t" | ".t." | ".true." | "true" => Some(true),
        "f" | ".f." | ".false." | "false" => Some(false),
        _ => None,
    }
}

/// Accepts Fortran `d`/`D` exponents as well as plain decimal text.
pub fn parse_fortran_real(raw: &str) -> Option<f64> {
    let normalized = raw.replace(['d', 'D'], "e");
    if !normalized
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return None;
    }
    normalized.parse::<f64>().ok()
}

/// Shortest decimal form: integral values drop the fraction.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn join_numbers<'a>(values: impl Iterator<Item = &'a Numeric>) -> String {
    values.map(Numeric::raw).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::{NamelistValue, Numeric, format_number, parse_fortran_real};

    #[test]
    fn numeric_preserves_raw_text() {
        let number = Numeric::parse("60.").expect("trailing dot should parse");
        assert_eq!(number.raw(), "60.");
        assert_eq!(number.value(), 60.0);
        assert_eq!(number.as_i32(), Some(60));
    }

    #[test]
    fn numeric_deserializes_from_number_or_numeric_text() {
        let from_number: Numeric = serde_json::from_str("1.2").expect("number should deserialize");
        assert_eq!(from_number.raw(), "1.2");
        let from_text: Numeric =
            serde_json::from_str("\"1.0d-3\"").expect("numeric text should deserialize");
        assert_eq!(from_text.raw(), "1.0d-3");
        serde_json::from_str::<Numeric>("\"deep\"").expect_err("non-numeric text should fail");
    }

    #[test]
    fn fortran_exponents_are_accepted() {
        assert_eq!(parse_fortran_real("1.5d-3"), Some(1.5e-3));
        assert_eq!(parse_fortran_real("2E2"), Some(200.0));
        assert_eq!(parse_fortran_real("abc"), None);
        assert_eq!(parse_fortran_real("nan"), None);
    }

    #[test]
    fn tokens_classify_into_logical_number_or_text() {
        assert_eq!(
            NamelistValue::from_token(".true.", false),
            NamelistValue::Logical(true)
        );
        assert_eq!(NamelistValue::from_token("F", false), NamelistValue::Logical(false));
        assert!(matches!(
            NamelistValue::from_token("-1.6", false),
            NamelistValue::Number(_)
        ));
        assert_eq!(
            NamelistValue::from_token("T", true),
            NamelistValue::Text("T".to_string())
        );
        assert_eq!(
            NamelistValue::from_token("/tmp/", false),
            NamelistValue::Text("/tmp/".to_string())
        );
    }

    #[test]
    fn logical_values_display_as_fortran_literals() {
        assert_eq!(NamelistValue::Logical(true).display_text(), "T");
        assert_eq!(NamelistValue::Logical(false).display_text(), "F");
    }

    #[test]
    fn integral_numbers_format_without_fraction() {
        assert_eq!(format_number(40.0), "40");
        assert_eq!(format_number(0.65), "0.65");
        assert_eq!(format_number(-1.0), "-1");
    }
}
