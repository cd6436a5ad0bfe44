//! The closed set of cell value kinds.

use serde::{Deserialize, Serialize};

use super::Row;

/// A cell payload: one of the primitive kinds, raw bytes, or a nested row.
///
/// The variant set is closed on purpose: equality and serialization are
/// defined once, recursively, instead of across an open class hierarchy.
/// Serialized form is adjacently tagged (`{"kind": ..., "value": ...}`) so
/// every variant round-trips with its exact kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    Bool(bool),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    Bytes(Vec<u8>),
    /// Nested row; rows compose recursively.
    Row(Row),
}

impl Value {
    /// Returns the kind name for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Short(_) => "short",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Row(_) => "row",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Short(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
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

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<Row> for Value {
    fn from(v: Row) -> Self {
        Value::Row(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Cell;

    #[test]
    fn from_conversions_pick_the_exact_kind() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(1i16), Value::Short(1));
        assert_eq!(Value::from(1i32), Value::Int(1));
        assert_eq!(Value::from(1i64), Value::Long(1));
        assert_eq!(Value::from("abc"), Value::String("abc".to_string()));
        assert_eq!(Value::from(vec![0u8, 1]), Value::Bytes(vec![0, 1]));
    }

    #[test]
    fn kinds_never_coerce() {
        // An int and a long holding the same number are different values.
        assert_ne!(Value::Int(1), Value::Long(1));
        assert_ne!(Value::Short(1), Value::Int(1));
    }

    #[test]
    fn serde_round_trip_preserves_the_kind() {
        let values = vec![
            Value::Bool(false),
            Value::Short(-3),
            Value::Int(42),
            Value::Long(i64::MAX),
            Value::Double(1.5),
            Value::String("hello".to_string()),
            Value::Bytes(vec![0xde, 0xad]),
            Value::Row(Row::of(vec![Cell::new("inner", 7i32)]).unwrap()),
        ];
        for value in values {
            let text = serde_json::to_string(&value).unwrap();
            let back: Value = serde_json::from_str(&text).unwrap();
            assert_eq!(back, value);
        }
    }
}
