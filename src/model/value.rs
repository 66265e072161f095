//! Field values and the coercion rules applied to raw cells

use std::borrow::Cow;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize, Serializer};

/// The kind of a field value, ordered `Null < Float < String`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Null,
    Float,
    String,
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Null => "null",
            FieldKind::Float => "float",
            FieldKind::String => "string",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed cell value
#[derive(Debug, Clone)]
pub enum FieldValue {
    Null,
    Float(f64),
    String(String),
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Null, FieldValue::Null) => true,
            (FieldValue::Float(a), FieldValue::Float(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (FieldValue::String(a), FieldValue::String(b)) => a == b,
            _ => false,
        }
    }
}

/// Serializes as null, a number or a string. Non-finite floats have no JSON number form
/// and are written as their display text (`inf`, `-inf`, `NaN`) so they stay distinct
/// from null.
impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Null => serializer.serialize_none(),
            FieldValue::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            FieldValue::Float(f) => serializer.serialize_str(&f.to_string()),
            FieldValue::String(s) => serializer.serialize_str(s),
        }
    }
}

impl FieldValue {
    /// Coerce a raw cell.
    ///
    /// A cell whose trimmed text is `none` in any letter case becomes [`FieldValue::Null`];
    /// a cell that parses as a float (decimal point, optional exponent) becomes
    /// [`FieldValue::Float`]; anything else is kept verbatim as [`FieldValue::String`].
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();

        if trimmed.eq_ignore_ascii_case("none") {
            return FieldValue::Null;
        }

        if let Ok(f) = trimmed.parse::<f64>() {
            return FieldValue::Float(f);
        }

        FieldValue::String(raw.to_string())
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Null => FieldKind::Null,
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::String(_) => FieldKind::String,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Total order used for sorting: kinds rank `Null < Float < String`, floats compare
    /// with [`f64::total_cmp`] and strings compare lexicographically.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Float(a), FieldValue::Float(b)) => a.total_cmp(b),
            (FieldValue::String(a), FieldValue::String(b)) => a.cmp(b),
            _ => self.kind().cmp(&other.kind()),
        }
    }

    /// Convert to a display string
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Null => Cow::Borrowed("none"),
            FieldValue::Float(f) => Cow::Owned(f.to_string()),
            FieldValue::String(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => FieldValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_none_variants() {
        for raw in ["none", "None", "NONE", "nOnE", "  none "] {
            assert_eq!(FieldValue::coerce(raw), FieldValue::Null, "{raw:?}");
        }
    }

    #[test]
    fn test_coerce_numbers() {
        assert_eq!(FieldValue::coerce("1"), FieldValue::Float(1.0));
        assert_eq!(FieldValue::coerce("-2.5"), FieldValue::Float(-2.5));
        assert_eq!(FieldValue::coerce("1e3"), FieldValue::Float(1000.0));
        assert_eq!(FieldValue::coerce("6.02E-2"), FieldValue::Float(0.0602));
        assert_eq!(FieldValue::coerce(" 42 "), FieldValue::Float(42.0));
    }

    #[test]
    fn test_coerce_keeps_strings_verbatim() {
        assert_eq!(FieldValue::coerce("x"), FieldValue::from("x"));
        assert_eq!(FieldValue::coerce(" padded "), FieldValue::from(" padded "));
        assert_eq!(FieldValue::coerce(""), FieldValue::from(""));
        assert_eq!(FieldValue::coerce("1,5"), FieldValue::from("1,5"));
        assert_eq!(FieldValue::coerce("nones"), FieldValue::from("nones"));
    }

    #[test]
    fn test_numeric_display_parses_back() {
        for raw in ["0.1", "3", "-7.25", "1e-9", "123456.789"] {
            let value = FieldValue::coerce(raw);
            assert_eq!(FieldValue::coerce(&value.to_string()), value);
        }
    }

    #[test]
    fn test_total_cmp_ranks_kinds() {
        let null = FieldValue::Null;
        let num = FieldValue::Float(100.0);
        let text = FieldValue::from("a");

        assert_eq!(null.total_cmp(&num), Ordering::Less);
        assert_eq!(num.total_cmp(&text), Ordering::Less);
        assert_eq!(text.total_cmp(&null), Ordering::Greater);
        assert_eq!(
            FieldValue::Float(2.0).total_cmp(&FieldValue::Float(10.0)),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::from("10").total_cmp(&FieldValue::from("2")),
            Ordering::Less
        );
    }

    #[test]
    fn test_serialize_untagged() {
        let values = vec![
            FieldValue::Null,
            FieldValue::Float(1.5),
            FieldValue::from("z"),
        ];
        assert_eq!(serde_json::to_string(&values).unwrap(), r#"[null,1.5,"z"]"#);
    }

    #[test]
    fn test_serialize_non_finite_as_text() {
        let values = vec![
            FieldValue::coerce("inf"),
            FieldValue::coerce("-inf"),
            FieldValue::coerce("nan"),
            FieldValue::coerce("none"),
        ];
        assert_eq!(
            serde_json::to_string(&values).unwrap(),
            r#"["inf","-inf","NaN",null]"#
        );
    }
}
