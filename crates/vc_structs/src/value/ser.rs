use serde_core::ser::{SerializeMap, SerializeSeq};
use serde_core::{Serialize, Serializer};

use super::{OpaqueValue, Value};

/// Serializes the snapshot as plain data.
///
/// [`Null`](Value::Null) becomes a unit, opaque values are written as text
/// through their `Display` capability, or their debug form if they have none.
///
/// # Examples
///
/// ```
/// use vc_structs::{Value, ValueMap};
///
/// let mut map = ValueMap::default();
/// map.insert("tags".into(), Value::from(vec![Value::from("a"), Value::Null]));
///
/// let json = serde_json::to_string(&Value::Map(map)).unwrap();
/// assert_eq!(json, r#"{"tags":["a",null]}"#);
/// ```
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Uint(v) => serializer.serialize_u64(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::String(v) => serializer.serialize_str(v),
            Value::List(list) => {
                let mut state = serializer.serialize_seq(Some(list.len()))?;
                for item in list {
                    state.serialize_element(item)?;
                }
                state.end()
            }
            Value::Map(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
            Value::Opaque(value) => value.serialize(serializer),
        }
    }
}

impl Serialize for OpaqueValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_reflect().as_display() {
            Some(display) => serializer.collect_str(display),
            None => serializer.collect_str(&format_args!("{self:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use core::time::Duration;

    use crate::Value;
    use crate::value::OpaqueValue;

    #[test]
    fn scalars_to_json() {
        let value = Value::from(vec![
            Value::Bool(true),
            Value::Int(-1),
            Value::Uint(2),
            Value::Float(0.5),
        ]);
        assert_eq!(serde_json::to_string(&value).unwrap(), "[true,-1,2,0.5]");
    }

    #[test]
    fn opaque_to_json() {
        let value = Value::Opaque(OpaqueValue::from_reflect(&'x'));
        assert_eq!(serde_json::to_string(&value).unwrap(), r#""x""#);

        let value = Value::Opaque(OpaqueValue::from_reflect(&Duration::from_secs(1)));
        assert_eq!(serde_json::to_string(&value).unwrap(), r#""1s""#);
    }
}
