//! Emptiness checks used by `omitempty`, `is_zero` and `has_zero`.

use crate::Reflect;
use crate::ops::ReflectRef;

/// Shallow emptiness, as used by the `omitempty` tag option.
///
/// Records and opaque values are never empty, whatever their contents.
///
/// # Examples
///
/// ```
/// use vc_structs::empty::is_empty_value;
///
/// assert!(is_empty_value(&0_u32));
/// assert!(is_empty_value(&String::new()));
/// assert!(is_empty_value(&None::<i32>));
/// assert!(!is_empty_value(&Some(0_i32)));
/// assert!(!is_empty_value(&[0_u8; 2]));
/// ```
pub fn is_empty_value(value: &dyn Reflect) -> bool {
    match value.reflect_ref() {
        ReflectRef::Bool(v) => !v,
        ReflectRef::Int(v) => v == 0,
        ReflectRef::Uint(v) => v == 0,
        ReflectRef::Float(v) => v == 0.0,
        ReflectRef::String(v) => v.is_empty(),
        ReflectRef::List(v) | ReflectRef::Array(v) => v.is_empty(),
        ReflectRef::Map(v) => v.is_empty(),
        ReflectRef::Pointer(v) | ReflectRef::Interface(v) => v.is_none(),
        ReflectRef::Struct(_) | ReflectRef::Opaque(_) => false,
    }
}

/// Deep emptiness, as used by `is_zero` and `has_zero`.
///
/// Primitives and collections follow [`is_empty_value`], a pointer is empty
/// when nil or when its pointee is deeply empty, and every other value is
/// empty when it equals the zero value of its type
/// ([`Reflect::reflect_is_zero`]).
///
/// # Examples
///
/// ```
/// use vc_structs::empty::{is_empty_deep, is_empty_value};
///
/// assert!(is_empty_deep(&Some(Some(0_i32))));
/// assert!(!is_empty_value(&Some(Some(0_i32))));
/// ```
pub fn is_empty_deep(value: &dyn Reflect) -> bool {
    match value.reflect_ref() {
        ReflectRef::Bool(v) => !v,
        ReflectRef::Int(v) => v == 0,
        ReflectRef::Uint(v) => v == 0,
        ReflectRef::Float(v) => v == 0.0,
        ReflectRef::String(v) => v.is_empty(),
        ReflectRef::List(v) | ReflectRef::Array(v) => v.is_empty(),
        ReflectRef::Map(v) => v.is_empty(),
        ReflectRef::Pointer(None) => true,
        ReflectRef::Pointer(Some(inner)) => is_empty_deep(inner),
        ReflectRef::Interface(_) | ReflectRef::Struct(_) | ReflectRef::Opaque(_) => {
            value.reflect_is_zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::time::Duration;

    use super::{is_empty_deep, is_empty_value};
    use crate::Value;
    use crate::derive::Record;

    #[derive(Record)]
    struct Inner {
        pub count: i32,
        hidden: Option<String>,
    }

    #[test]
    fn shallow_rules() {
        assert!(is_empty_value(&false));
        assert!(!is_empty_value(&true));
        assert!(is_empty_value(&0.0_f64));
        assert!(is_empty_value(&Vec::<i32>::new()));
        assert!(is_empty_value(&BTreeMap::<String, i32>::new()));
        assert!(is_empty_value(&Value::Null));
        assert!(!is_empty_value(&Value::Int(0)));
        assert!(!is_empty_value(&Duration::ZERO));
        assert!(!is_empty_value(&Inner { count: 0, hidden: None }));
    }

    #[test]
    fn deep_rules() {
        assert!(is_empty_deep(&Duration::ZERO));
        assert!(is_empty_deep(&Inner { count: 0, hidden: None }));
        assert!(!is_empty_deep(&Inner { count: 1, hidden: None }));

        // unexported fields count for structural equality
        assert!(!is_empty_deep(&Inner {
            count: 0,
            hidden: Some(String::new()),
        }));

        assert!(is_empty_deep(&Some(Inner { count: 0, hidden: None })));
        assert!(is_empty_deep(&None::<Inner>));
        assert!(!is_empty_deep(&Value::Int(0)));
        assert!(is_empty_deep(&Value::Null));
    }
}
