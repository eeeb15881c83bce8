use alloc::string::String;
use alloc::vec::Vec;

use crate::Reflect;
use crate::error::StructError;
use crate::ops::{Map, ReflectRef};

/// Resolves one pointer level; `None` for a nil pointer.
fn as_map(value: &dyn Reflect) -> Result<Option<&dyn Map>, StructError> {
    let target = match value.reflect_ref() {
        ReflectRef::Pointer(None) => return Ok(None),
        ReflectRef::Pointer(Some(inner)) => inner,
        _ => value,
    };
    match target.reflect_ref() {
        ReflectRef::Map(map) => Ok(Some(map)),
        _ => Err(StructError::NotAMap {
            type_path: value.reflect_type_path(),
        }),
    }
}

/// Resolves one pointer level of a map key.
fn key_target(key: &dyn Reflect) -> &dyn Reflect {
    match key.reflect_ref() {
        ReflectRef::Pointer(Some(inner)) => inner,
        _ => key,
    }
}

/// Collects the keys of a map with string keys, in iteration order.
///
/// A nil pointer yields no keys.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_structs::{StructError, keys_of_map};
///
/// let mut map = BTreeMap::new();
/// map.insert(String::from("b"), 2);
/// map.insert(String::from("a"), 1);
///
/// assert_eq!(keys_of_map(&map).unwrap(), ["a", "b"]);
/// assert!(keys_of_map(&None::<BTreeMap<String, i32>>).unwrap().is_empty());
///
/// let numbers = BTreeMap::from([(1_u8, ())]);
/// assert!(matches!(keys_of_map(&numbers), Err(StructError::KeyNotString { .. })));
/// ```
pub fn keys_of_map(value: &dyn Reflect) -> Result<Vec<String>, StructError> {
    let Some(map) = as_map(value)? else {
        return Ok(Vec::new());
    };

    let mut keys = Vec::with_capacity(map.len());
    for (key, _) in map.iter() {
        let key = key_target(key);
        match key.reflect_ref() {
            ReflectRef::String(text) => keys.push(text.into()),
            _ => {
                return Err(StructError::KeyNotString {
                    type_path: key.reflect_type_path(),
                });
            }
        }
    }
    Ok(keys)
}

/// Collects the keys of a map with integer keys, in iteration order.
///
/// Unsigned keys above `i64::MAX` fail with [`StructError::KeyNotInteger`].
/// A nil pointer yields no keys.
pub fn keys_int_of_map(value: &dyn Reflect) -> Result<Vec<i64>, StructError> {
    let Some(map) = as_map(value)? else {
        return Ok(Vec::new());
    };

    let mut keys = Vec::with_capacity(map.len());
    for (key, _) in map.iter() {
        let key = key_target(key);
        let not_integer = || StructError::KeyNotInteger {
            type_path: key.reflect_type_path(),
        };
        match key.reflect_ref() {
            ReflectRef::Int(v) => keys.push(v),
            ReflectRef::Uint(v) => keys.push(i64::try_from(v).map_err(|_| not_integer())?),
            _ => return Err(not_integer()),
        }
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{keys_int_of_map, keys_of_map};
    use crate::{StructError, Value, ValueMap};

    #[test]
    fn string_keys() {
        let mut map = ValueMap::default();
        map.insert("x".into(), Value::Null);
        map.insert("y".into(), Value::Null);

        let mut keys = keys_of_map(&map).unwrap();
        keys.sort();
        assert_eq!(keys, ["x", "y"]);

        let nested = Some(BTreeMap::from([(String::from("k"), 1_u8)]));
        assert_eq!(keys_of_map(&nested).unwrap(), ["k"]);
    }

    #[test]
    fn integer_keys() {
        let map = BTreeMap::from([(-3_i8, "a"), (4_i8, "b")]);
        assert_eq!(keys_int_of_map(&map).unwrap(), [-3, 4]);

        let map = BTreeMap::from([(7_u32, ()), (9_u32, ())]);
        assert_eq!(keys_int_of_map(&map).unwrap(), [7, 9]);

        assert!(keys_int_of_map(&None::<BTreeMap<u8, u8>>).unwrap().is_empty());
    }

    #[test]
    fn unsigned_keys_out_of_range() {
        let fits = BTreeMap::from([(i64::MAX as u64, ())]);
        assert_eq!(keys_int_of_map(&fits).unwrap(), [i64::MAX]);

        let too_big = BTreeMap::from([(1_u64 << 63, ())]);
        assert_eq!(
            keys_int_of_map(&too_big).unwrap_err(),
            StructError::KeyNotInteger { type_path: "u64" },
        );
    }

    #[test]
    fn shape_errors() {
        assert_eq!(
            keys_of_map(&Vec::<u8>::new()).unwrap_err(),
            StructError::NotAMap {
                type_path: "alloc::vec::Vec<u8>",
            },
        );
        assert_eq!(
            keys_int_of_map(&BTreeMap::from([(String::from("a"), 1)])).unwrap_err(),
            StructError::KeyNotInteger {
                type_path: "alloc::string::String",
            },
        );
        assert_eq!(
            keys_of_map(&BTreeMap::from([(15_u64, 1)])).unwrap_err(),
            StructError::KeyNotString { type_path: "u64" },
        );
    }
}
