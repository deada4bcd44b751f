use serde::Serialize;

use crate::error::ProbeError;

/// Renderable shape of one runtime value, resolved once at capture time.
///
/// A closed variant set stands in for runtime type inspection: every value
/// entering the pipeline is first folded into one of these shapes, and the
/// describer and pretty-printer dispatch on the variant alone.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Set(Vec<Value>),
    /// Entries keep insertion order.
    Map(Vec<(String, Value)>),
    /// A value that could not be serialized; carries its static type name.
    Opaque(String),
}

impl Value {
    /// Capture any serializable value into the renderable model.
    ///
    /// Serialization failure degrades to [`Value::Opaque`] so a probe call
    /// never aborts the program it instruments.
    pub fn capture<T: Serialize>(value: &T) -> Value {
        Value::try_capture(value)
            .unwrap_or_else(|_| Value::Opaque(std::any::type_name::<T>().to_string()))
    }

    /// Strict capture for callers that want to see conversion failures
    /// (e.g. maps whose keys are not strings).
    pub fn try_capture<T: Serialize>(value: &T) -> Result<Value, ProbeError> {
        serde_json::to_value(value)
            .map(Value::from)
            .map_err(|_| ProbeError::Unrepresentable(std::any::type_name::<T>().to_string()))
    }

    pub fn tuple(items: Vec<Value>) -> Value {
        Value::Tuple(items)
    }

    pub fn set(items: Vec<Value>) -> Value {
        Value::Set(items)
    }

    /// Kind name reported as the `type` attribute.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "none",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
            Value::Opaque(name) => name,
        }
    }

    /// Entry count for values that support a length query.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.chars().count()),
            Value::List(items) | Value::Tuple(items) | Value::Set(items) => Some(items.len()),
            Value::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Canonical single-line representation of a scalar.
    pub fn repr(&self) -> String {
        match self {
            Value::Null => "none".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(x) => {
                // Keep a trailing `.0` so floats read as floats.
                if x.fract() == 0.0 && x.is_finite() {
                    format!("{:.1}", x)
                } else {
                    x.to_string()
                }
            }
            Value::Str(s) => format!("{:?}", s),
            Value::Opaque(name) => format!("<{}>", name),
            // Containers are the pretty-printer's job; this is the
            // fallback spelling only.
            Value::List(_) | Value::Tuple(_) | Value::Set(_) | Value::Map(_) => {
                format!("<{}>", self.type_name())
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Value {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_scalars() {
        assert_eq!(Value::capture(&5), Value::Int(5));
        assert_eq!(Value::capture(&true), Value::Bool(true));
        assert_eq!(Value::capture(&"hi"), Value::Str("hi".to_string()));
    }

    #[test]
    fn captures_derived_struct_in_field_order() {
        #[derive(Serialize)]
        struct Point {
            x: i64,
            y: i64,
        }

        let v = Value::capture(&Point { x: 1, y: 2 });
        assert_eq!(
            v,
            Value::Map(vec![
                ("x".to_string(), Value::Int(1)),
                ("y".to_string(), Value::Int(2)),
            ])
        );
    }

    #[test]
    fn length_query_is_optional() {
        assert_eq!(Value::Str("héllo".to_string()).len(), Some(5));
        assert_eq!(Value::List(vec![Value::Int(1)]).len(), Some(1));
        assert_eq!(Value::Int(3).len(), None);
    }

    #[test]
    fn non_string_map_keys_are_unrepresentable() {
        use std::collections::HashMap;

        let bad: HashMap<(i32, i32), i32> = [((1, 2), 3)].into_iter().collect();
        assert!(matches!(
            Value::try_capture(&bad),
            Err(ProbeError::Unrepresentable(_))
        ));
        assert!(matches!(Value::capture(&bad), Value::Opaque(_)));
    }

    #[test]
    fn float_repr_keeps_decimal_point() {
        assert_eq!(Value::Float(2.0).repr(), "2.0");
        assert_eq!(Value::Float(2.5).repr(), "2.5");
    }
}
