use core::fmt;

use crate::Reflect;
use crate::ops::ReflectRef;

/// Clones a value through [`Reflect::reflect_clone`].
///
/// Lets record clones be built field by field without requiring `Clone`
/// on the record type.
#[inline]
pub fn clone_value<T: Reflect>(value: &T) -> T {
    match value.reflect_clone().take::<T>() {
        Ok(value) => value,
        Err(_) => unreachable!("`reflect_clone` returned a different type"),
    }
}

/// Structural zero check, the default of [`Reflect::reflect_is_zero`].
///
/// Opaque values are never zero here; opaque types override the method.
pub fn is_zero_value<T: Reflect + ?Sized>(value: &T) -> bool {
    match value.reflect_ref() {
        ReflectRef::Bool(v) => !v,
        ReflectRef::Int(v) => v == 0,
        ReflectRef::Uint(v) => v == 0,
        ReflectRef::Float(v) => v == 0.0,
        ReflectRef::String(v) => v.is_empty(),
        ReflectRef::Pointer(v) | ReflectRef::Interface(v) => v.is_none(),
        ReflectRef::Struct(record) => record.iter_fields().all(|field| field.reflect_is_zero()),
        ReflectRef::List(list) => list.is_empty(),
        ReflectRef::Array(array) => array.iter().all(|item| item.reflect_is_zero()),
        ReflectRef::Map(map) => map.is_empty(),
        ReflectRef::Opaque(_) => false,
    }
}

/// Structural equality, the default of [`Reflect::reflect_partial_eq`].
///
/// Values of different types are never equal. Returns `None` if an opaque
/// value without comparison support is reached.
pub fn partial_eq<T: Reflect + ?Sized>(value: &T, other: &dyn Reflect) -> Option<bool> {
    if value.ty_id() != other.ty_id() {
        return Some(false);
    }

    let eq = match (value.reflect_ref(), other.reflect_ref()) {
        (ReflectRef::Bool(a), ReflectRef::Bool(b)) => a == b,
        (ReflectRef::Int(a), ReflectRef::Int(b)) => a == b,
        (ReflectRef::Uint(a), ReflectRef::Uint(b)) => a == b,
        (ReflectRef::Float(a), ReflectRef::Float(b)) => a == b,
        (ReflectRef::String(a), ReflectRef::String(b)) => a == b,
        (ReflectRef::Pointer(a), ReflectRef::Pointer(b))
        | (ReflectRef::Interface(a), ReflectRef::Interface(b)) => match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => a.reflect_partial_eq(b)?,
            _ => false,
        },
        (ReflectRef::Struct(a), ReflectRef::Struct(b)) => {
            for (a, b) in a.iter_fields().zip(b.iter_fields()) {
                if !a.reflect_partial_eq(b)? {
                    return Some(false);
                }
            }
            true
        }
        (ReflectRef::List(a), ReflectRef::List(b)) | (ReflectRef::Array(a), ReflectRef::Array(b)) => {
            if a.len() != b.len() {
                return Some(false);
            }
            for (a, b) in a.iter().zip(b.iter()) {
                if !a.reflect_partial_eq(b)? {
                    return Some(false);
                }
            }
            true
        }
        (ReflectRef::Map(a), ReflectRef::Map(b)) => {
            if a.len() != b.len() {
                return Some(false);
            }
            for (key, value) in a.iter() {
                let mut found = None;
                for (other_key, other_value) in b.iter() {
                    if key.reflect_partial_eq(other_key)? {
                        found = Some(other_value);
                        break;
                    }
                }
                match found {
                    Some(other_value) if value.reflect_partial_eq(other_value)? => {}
                    _ => return Some(false),
                }
            }
            true
        }
        (ReflectRef::Opaque(_), ReflectRef::Opaque(_)) => return None,
        _ => false,
    };

    Some(eq)
}

/// Debug formatting, the default of [`Reflect::reflect_debug`].
pub fn debug<T: Reflect + ?Sized>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value.reflect_ref() {
        ReflectRef::Bool(v) => fmt::Debug::fmt(&v, f),
        ReflectRef::Int(v) => fmt::Debug::fmt(&v, f),
        ReflectRef::Uint(v) => fmt::Debug::fmt(&v, f),
        ReflectRef::Float(v) => fmt::Debug::fmt(&v, f),
        ReflectRef::String(v) => fmt::Debug::fmt(v, f),
        ReflectRef::Pointer(None) | ReflectRef::Interface(None) => f.write_str("nil"),
        ReflectRef::Pointer(Some(v)) | ReflectRef::Interface(Some(v)) => v.reflect_debug(f),
        ReflectRef::Struct(record) => {
            let info = record.record_info();
            let mut debug = f.debug_struct(info.name());
            for (field, value) in info.fields().iter().zip(record.iter_fields()) {
                debug.field(field.name(), &value);
            }
            debug.finish()
        }
        ReflectRef::List(list) | ReflectRef::Array(list) => f.debug_list().entries(list.iter()).finish(),
        ReflectRef::Map(map) => f.debug_map().entries(map.iter()).finish(),
        ReflectRef::Opaque(_) => write!(f, "Opaque({})", value.reflect_type_path()),
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;

    use super::{is_zero_value, partial_eq};
    use crate::Reflect;

    #[test]
    fn structural_zero() {
        assert!(is_zero_value(&0_i32));
        assert!(is_zero_value(&None::<i32>));
        assert!(!is_zero_value(&Some(0_i32)));
        assert!(is_zero_value(&String::new()));
        assert!(is_zero_value(&[0_u8; 3]));
        assert!(!is_zero_value(&[0_u8, 1, 0]));
        assert!(is_zero_value(&vec![0_u8; 0]));
        assert!(!is_zero_value(&vec![0_u8]));
    }

    #[test]
    fn structural_eq() {
        assert_eq!(partial_eq(&vec![1, 2], &vec![1, 2]), Some(true));
        assert_eq!(partial_eq(&vec![1, 2], &vec![1, 3]), Some(false));
        assert_eq!(partial_eq(&1_i32, &1_i64), Some(false));

        let mut a = BTreeMap::new();
        a.insert(String::from("x"), Some(1_u8));
        let mut b = a.clone();
        assert_eq!(partial_eq(&a, &b), Some(true));
        b.insert(String::from("x"), None);
        assert_eq!(partial_eq(&a, &b), Some(false));
    }

    #[test]
    fn debug_output() {
        let value: &dyn Reflect = &vec![Some(1_u8), None];
        assert_eq!(format!("{value:?}"), "[1, nil]");
    }
}
