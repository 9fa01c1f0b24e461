//! Metadata values and their kinds

use serde::{Deserialize, Serialize};

/// The kind of a [`MetadataValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    String,
    Integer,
    Float,
    Double,
    Boolean,
}

impl std::fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "String"),
            Self::Integer => write!(f, "Integer"),
            Self::Float => write!(f, "Float"),
            Self::Double => write!(f, "Double"),
            Self::Boolean => write!(f, "Boolean"),
        }
    }
}

/// A single flag metadata value.
///
/// Serialized with its kind so that numeric kinds survive a round trip:
///
/// ```json
/// { "kind": "integer", "value": 3 }
/// ```
///
/// Non-finite floats are written as the strings `"NaN"`, `"inf"` and `"-inf"`
/// so they can be read back.
///
/// Equality treats any two NaNs of the same kind as equal, so metadata holding
/// a NaN still equals its own clone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum MetadataValue {
    String(String),
    Integer(i32),
    Float(#[serde(with = "float_repr::single")] f32),
    Double(#[serde(with = "float_repr")] f64),
    Boolean(bool),
}

impl PartialEq for MetadataValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Double(a), Self::Double(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            _ => false,
        }
    }
}

/// Float payload encoding: finite values are plain numbers, non-finite values
/// are `"NaN"`, `"inf"` or `"-inf"`.
mod float_repr {
    use serde::{Deserializer, Serializer, de};

    const NAN: &str = "NaN";
    const INF: &str = "inf";
    const NEG_INF: &str = "-inf";

    fn non_finite_label(value: f64) -> Option<&'static str> {
        if value.is_nan() {
            Some(NAN)
        } else if value == f64::INFINITY {
            Some(INF)
        } else if value == f64::NEG_INFINITY {
            Some(NEG_INF)
        } else {
            None
        }
    }

    pub(super) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        match non_finite_label(*value) {
            Some(label) => serializer.serialize_str(label),
            None => serializer.serialize_f64(*value),
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(FloatVisitor)
    }

    pub(super) mod single {
        use serde::{Deserializer, Serializer};

        pub(in super::super) fn serialize<S: Serializer>(
            value: &f32,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match super::non_finite_label(f64::from(*value)) {
                Some(label) => serializer.serialize_str(label),
                None => serializer.serialize_f32(*value),
            }
        }

        pub(in super::super) fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<f32, D::Error> {
            super::deserialize(deserializer).map(|v| v as f32)
        }
    }

    struct FloatVisitor;

    impl de::Visitor<'_> for FloatVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a number or one of \"NaN\", \"inf\", \"-inf\"")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            match v {
                NAN => Ok(f64::NAN),
                INF => Ok(f64::INFINITY),
                NEG_INF => Ok(f64::NEG_INFINITY),
                other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
            }
        }
    }
}

impl MetadataValue {
    pub const fn kind(&self) -> MetadataKind {
        match self {
            Self::String(_) => MetadataKind::String,
            Self::Integer(_) => MetadataKind::Integer,
            Self::Float(_) => MetadataKind::Float,
            Self::Double(_) => MetadataKind::Double,
            Self::Boolean(_) => MetadataKind::Boolean,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub const fn as_integer(&self) -> Option<i32> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub const fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert to a plain JSON value, dropping the kind.
    ///
    /// Non-finite floats have no JSON representation and become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Integer(i) => serde_json::Value::from(*i),
            Self::Float(f) => serde_json::Number::from_f64(f64::from(*f))
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::Double(d) => serde_json::Number::from_f64(*d)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::Boolean(b) => serde_json::Value::Bool(*b),
        }
    }
}

impl std::fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i32> for MetadataValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<f32> for MetadataValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Rust types that can be read out of a [`MetadataValue`] of exactly one kind.
pub trait FromMetadataValue: Sized {
    /// The only kind this type is read from.
    const KIND: MetadataKind;

    /// Extract the value, or `None` when `value` is of another kind.
    fn from_metadata_value(value: &MetadataValue) -> Option<Self>;
}

impl FromMetadataValue for String {
    const KIND: MetadataKind = MetadataKind::String;

    fn from_metadata_value(value: &MetadataValue) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromMetadataValue for i32 {
    const KIND: MetadataKind = MetadataKind::Integer;

    fn from_metadata_value(value: &MetadataValue) -> Option<Self> {
        value.as_integer()
    }
}

impl FromMetadataValue for f32 {
    const KIND: MetadataKind = MetadataKind::Float;

    fn from_metadata_value(value: &MetadataValue) -> Option<Self> {
        value.as_float()
    }
}

impl FromMetadataValue for f64 {
    const KIND: MetadataKind = MetadataKind::Double;

    fn from_metadata_value(value: &MetadataValue) -> Option<Self> {
        value.as_double()
    }
}

impl FromMetadataValue for bool {
    const KIND: MetadataKind = MetadataKind::Boolean;

    fn from_metadata_value(value: &MetadataValue) -> Option<Self> {
        value.as_boolean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_variant() {
        assert_eq!(MetadataValue::from("x").kind(), MetadataKind::String);
        assert_eq!(MetadataValue::from(1).kind(), MetadataKind::Integer);
        assert_eq!(MetadataValue::from(1.5f32).kind(), MetadataKind::Float);
        assert_eq!(MetadataValue::from(1.5f64).kind(), MetadataKind::Double);
        assert_eq!(MetadataValue::from(true).kind(), MetadataKind::Boolean);
    }

    #[test]
    fn accessors_do_not_coerce_numbers() {
        let v = MetadataValue::Integer(3);
        assert_eq!(v.as_integer(), Some(3));
        assert_eq!(v.as_float(), None);
        assert_eq!(v.as_double(), None);

        let v = MetadataValue::Float(0.5);
        assert_eq!(v.as_float(), Some(0.5));
        assert_eq!(v.as_double(), None);
        assert_eq!(f64::from_metadata_value(&v), None);
    }

    #[test]
    fn serde_keeps_kind() {
        let v = MetadataValue::Integer(3);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "integer", "value": 3}));

        let back: MetadataValue =
            serde_json::from_value(serde_json::json!({"kind": "double", "value": 3})).unwrap();
        assert_eq!(back, MetadataValue::Double(3.0));
    }

    #[test]
    fn serde_writes_non_finite_as_strings() {
        let json = serde_json::to_value(MetadataValue::Double(f64::NEG_INFINITY)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "double", "value": "-inf"}));

        let back: MetadataValue =
            serde_json::from_value(serde_json::json!({"kind": "float", "value": "NaN"})).unwrap();
        assert!(back.as_float().unwrap().is_nan());

        let err = serde_json::from_value::<MetadataValue>(
            serde_json::json!({"kind": "double", "value": "infinity"}),
        );
        assert!(err.is_err());
    }

    #[test]
    fn nan_values_compare_equal_within_kind() {
        assert_eq!(MetadataValue::Double(f64::NAN), MetadataValue::Double(f64::NAN));
        assert_eq!(MetadataValue::Float(0.0), MetadataValue::Float(-0.0));
        assert_ne!(MetadataValue::Float(f32::NAN), MetadataValue::Double(f64::NAN));
        assert_ne!(MetadataValue::Double(1.0), MetadataValue::Double(f64::NAN));
    }

    #[test]
    fn to_json_is_plain_and_nulls_non_finite() {
        assert_eq!(MetadataValue::from("a").to_json(), serde_json::json!("a"));
        assert_eq!(MetadataValue::from(7).to_json(), serde_json::json!(7));
        assert_eq!(MetadataValue::from(0.25f64).to_json(), serde_json::json!(0.25));
        assert_eq!(
            MetadataValue::from(f64::NAN).to_json(),
            serde_json::Value::Null
        );
        assert_eq!(
            MetadataValue::from(f32::INFINITY).to_json(),
            serde_json::Value::Null
        );
    }

    #[test]
    fn display() {
        assert_eq!(MetadataKind::Double.to_string(), "Double");
        assert_eq!(MetadataValue::from("rule-1").to_string(), "rule-1");
        assert_eq!(MetadataValue::from(false).to_string(), "false");
    }
}
