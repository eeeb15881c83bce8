//! Free-function entry points.
//!
//! Every function takes any reflected value, follows its pointers down to a
//! record and fails with [`StructError::NotAStruct`] if there is none. The
//! plain variants read the [`DEFAULT_TAG_NAME`] namespace.

use alloc::vec::Vec;

use crate::encode::Encoder;
use crate::error::StructError;
use crate::field::{self, FieldView};
use crate::ops::{Record, ReflectRef};
use crate::value::{Value, ValueMap};
use crate::{DEFAULT_TAG_NAME, Reflect};

#[inline]
fn record(value: &dyn Reflect) -> Result<&dyn Record, StructError> {
    value.resolve_record().ok_or(StructError::NotAStruct {
        type_path: value.reflect_type_path(),
    })
}

// -----------------------------------------------------------------------------
// Encoding

/// Encodes a record into a map.
///
/// # Examples
///
/// ```
/// use vc_structs::{StructError, Value, derive::Record};
///
/// #[derive(Record)]
/// struct Point {
///     pub x: i32,
///     #[tag(map = "why")]
///     pub y: i32,
/// }
///
/// let map = vc_structs::map(&Some(Point { x: 1, y: 2 })).unwrap();
/// assert_eq!(map["x"], Value::Int(1));
/// assert_eq!(map["why"], Value::Int(2));
///
/// assert!(matches!(vc_structs::map(&3_u8), Err(StructError::NotAStruct { .. })));
/// ```
#[inline]
pub fn map(value: &dyn Reflect) -> Result<ValueMap, StructError> {
    map_with_tag(value, DEFAULT_TAG_NAME)
}

/// [`map`] reading the `tag_name` namespace.
pub fn map_with_tag(value: &dyn Reflect, tag_name: &str) -> Result<ValueMap, StructError> {
    Ok(Encoder::new(tag_name).map(record(value)?))
}

/// Encodes a record into `out`, keeping entries no field overwrites.
#[inline]
pub fn fill_map(value: &dyn Reflect, out: &mut ValueMap) -> Result<(), StructError> {
    fill_map_with_tag(value, out, DEFAULT_TAG_NAME)
}

/// [`fill_map`] reading the `tag_name` namespace.
pub fn fill_map_with_tag(
    value: &dyn Reflect,
    out: &mut ValueMap,
    tag_name: &str,
) -> Result<(), StructError> {
    Encoder::new(tag_name).fill_map(record(value)?, out);
    Ok(())
}

/// Lists the field values of a record, nested records spliced in place.
#[inline]
pub fn values(value: &dyn Reflect) -> Result<Vec<Value>, StructError> {
    values_with_tag(value, DEFAULT_TAG_NAME)
}

/// [`values`] reading the `tag_name` namespace.
pub fn values_with_tag(value: &dyn Reflect, tag_name: &str) -> Result<Vec<Value>, StructError> {
    Ok(Encoder::new(tag_name).values(record(value)?))
}

/// Encodes every record of a slice or array.
///
/// One pointer level around the collection is followed. The result is empty
/// if the value is not a collection of records (or of pointers to records);
/// a nil element encodes as an empty map.
///
/// # Examples
///
/// ```
/// use vc_structs::derive::Record;
///
/// #[derive(Record)]
/// struct Item {
///     #[tag(map = ",omitempty")]
///     pub count: i32,
/// }
///
/// let items = vec![Item { count: 0 }, Item { count: 2 }, Item { count: 0 }];
/// let maps = vc_structs::map_slice(&items);
///
/// assert_eq!(maps.len(), 3);
/// assert_eq!(maps.iter().filter(|map| map.contains_key("count")).count(), 1);
///
/// assert!(vc_structs::map_slice(&vec![1, 2]).is_empty());
/// ```
#[inline]
pub fn map_slice(value: &dyn Reflect) -> Vec<ValueMap> {
    map_slice_with_tag(value, DEFAULT_TAG_NAME)
}

/// [`map_slice`] reading the `tag_name` namespace.
pub fn map_slice_with_tag(value: &dyn Reflect, tag_name: &str) -> Vec<ValueMap> {
    let value = match value.reflect_ref() {
        ReflectRef::Pointer(Some(inner)) => inner,
        _ => value,
    };
    let (ReflectRef::List(list) | ReflectRef::Array(list)) = value.reflect_ref() else {
        return Vec::new();
    };
    if !list.item_info().is_record_or_pointer() {
        log::debug!("`{}` does not hold records", value.reflect_type_path());
        return Vec::new();
    }

    let encoder = Encoder::new(tag_name);
    list.iter()
        .map(|item| match item.resolve_record() {
            Some(record) => encoder.map(record),
            None => ValueMap::default(),
        })
        .collect()
}

// -----------------------------------------------------------------------------
// Fields

/// Lists the names of the fields not tagged `-`, exported or not.
#[inline]
pub fn names(value: &dyn Reflect) -> Result<Vec<&'static str>, StructError> {
    names_with_tag(value, DEFAULT_TAG_NAME)
}

/// [`names`] reading the `tag_name` namespace.
pub fn names_with_tag(value: &dyn Reflect, tag_name: &str) -> Result<Vec<&'static str>, StructError> {
    let names = record(value)?
        .record_info()
        .fields()
        .iter()
        .filter(|info| !info.is_ignored(tag_name))
        .map(|info| info.name())
        .collect();
    Ok(names)
}

/// Lists read-only views of the fields not tagged `-`, exported or not.
#[inline]
pub fn fields(value: &dyn Reflect) -> Result<Vec<FieldView<'_>>, StructError> {
    fields_with_tag(value, DEFAULT_TAG_NAME)
}

/// [`fields`] reading the `tag_name` namespace.
pub fn fields_with_tag<'a>(
    value: &'a dyn Reflect,
    tag_name: &'a str,
) -> Result<Vec<FieldView<'a>>, StructError> {
    Ok(field::record_fields(record(value)?, tag_name))
}

/// Calls `f` on every exported field not tagged `-`, until it returns `false`.
///
/// # Examples
///
/// ```
/// use vc_structs::derive::Record;
///
/// #[derive(Record)]
/// struct Row {
///     pub a: i32,
///     pub b: i32,
///     hidden: i32,
///     pub c: i32,
/// }
///
/// let row = Row { a: 1, b: 2, hidden: 3, c: 4 };
/// let mut seen = Vec::new();
/// vc_structs::for_each_field(&row, "map", |field| {
///     seen.push(field.name());
///     field.name() != "b"
/// })
/// .unwrap();
///
/// assert_eq!(seen, ["a", "b"]);
/// # let _ = row.hidden;
/// ```
pub fn for_each_field(
    value: &dyn Reflect,
    tag_name: &str,
    mut f: impl FnMut(FieldView<'_>) -> bool,
) -> Result<(), StructError> {
    let record = record(value)?;
    for info in record.record_info().fields() {
        if !info.is_exported() || info.is_ignored(tag_name) {
            continue;
        }
        let Some(value) = record.field_at(info.index()) else {
            continue;
        };
        if !f(FieldView::shared(info, value, tag_name)) {
            break;
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Zero checks

/// Returns `true` if every exported field not tagged `-` is empty.
#[inline]
pub fn is_zero(value: &dyn Reflect) -> Result<bool, StructError> {
    is_zero_with_tag(value, DEFAULT_TAG_NAME)
}

/// [`is_zero`] reading the `tag_name` namespace.
pub fn is_zero_with_tag(value: &dyn Reflect, tag_name: &str) -> Result<bool, StructError> {
    Ok(Encoder::new(tag_name).is_zero(record(value)?))
}

/// Returns `true` if any exported field not tagged `-` is empty.
#[inline]
pub fn has_zero(value: &dyn Reflect) -> Result<bool, StructError> {
    has_zero_with_tag(value, DEFAULT_TAG_NAME)
}

/// [`has_zero`] reading the `tag_name` namespace.
pub fn has_zero_with_tag(value: &dyn Reflect, tag_name: &str) -> Result<bool, StructError> {
    Ok(Encoder::new(tag_name).has_zero(record(value)?))
}

// -----------------------------------------------------------------------------
// Helpers

/// Returns `true` if `value` is a record or a non-nil pointer to one.
#[inline]
pub fn is_struct(value: &dyn Reflect) -> bool {
    value.resolve_record().is_some()
}

/// Returns the declared name of the record type.
#[inline]
pub fn name(value: &dyn Reflect) -> Result<&'static str, StructError> {
    Ok(record(value)?.record_info().name())
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::VecDeque;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::derive::Record;
    use crate::{StructError, Value, ValueMap};

    #[derive(Record)]
    struct Item {
        pub name: String,
        #[tag(map = ",omitempty", json = "n")]
        pub count: i32,
        #[tag(map = "-")]
        pub skipped: bool,
    }

    fn item(name: &str, count: i32) -> Item {
        Item { name: name.into(), count, skipped: false }
    }

    #[test]
    fn entry_points() {
        let value = item("a", 0);

        let map = crate::map(&value).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(crate::map_with_tag(&value, "json").unwrap()["n"], Value::Int(0));

        let mut out = ValueMap::default();
        crate::fill_map(&Box::new(value), &mut out).unwrap();
        assert_eq!(out["name"], Value::from("a"));

        let value = item("b", 2);
        assert_eq!(crate::values(&value).unwrap(), [Value::from("b"), Value::Int(2)]);
        assert_eq!(crate::values_with_tag(&value, "json").unwrap().len(), 3);
        assert_eq!(crate::names(&value).unwrap(), ["name", "count"]);
        assert_eq!(crate::names_with_tag(&value, "json").unwrap(), ["name", "count", "skipped"]);
        assert_eq!(crate::fields(&value).unwrap().len(), 2);
        assert!(!crate::is_zero(&value).unwrap());
        assert!(!crate::has_zero(&value).unwrap());

        // `skipped` is only visible in the json namespace
        assert!(crate::has_zero_with_tag(&value, "json").unwrap());
        assert!(crate::is_zero(&item("", 0)).unwrap());
        assert!(crate::is_struct(&Some(value)));
        assert!(!crate::is_struct(&None::<Item>));
        assert_eq!(crate::name(&item("", 0)).unwrap(), "Item");
    }

    #[test]
    fn not_a_struct() {
        let error = StructError::NotAStruct { type_path: "i32" };
        assert_eq!(crate::map(&1_i32).unwrap_err(), error);
        assert_eq!(crate::values(&1_i32).unwrap_err(), error);
        assert_eq!(crate::names(&1_i32).unwrap_err(), error);
        assert_eq!(crate::is_zero(&1_i32).unwrap_err(), error);
        assert_eq!(crate::has_zero(&1_i32).unwrap_err(), error);
        assert_eq!(crate::name(&1_i32).unwrap_err(), error);
        assert!(crate::fields(&1_i32).is_err());
        assert!(crate::fill_map(&1_i32, &mut ValueMap::default()).is_err());
        assert!(crate::for_each_field(&1_i32, "map", |_| true).is_err());
    }

    #[test]
    fn map_slice() {
        let items = vec![item("a", 0), item("b", 5), item("c", 0)];
        let maps = crate::map_slice(&items);
        assert_eq!(maps.len(), 3);
        assert!(!maps[0].contains_key("count"));
        assert_eq!(maps[1]["count"], Value::Int(5));
        assert!(!maps[2].contains_key("count"));

        let pointers = VecDeque::from([Some(item("a", 1)), None]);
        let maps = crate::map_slice_with_tag(&Some(pointers), "json");
        assert_eq!(maps.len(), 2);
        assert_eq!(maps[0]["n"], Value::Int(1));
        assert!(maps[1].is_empty());

        assert!(crate::map_slice(&Vec::<Item>::new()).is_empty());
        assert!(crate::map_slice(&[1, 2, 3]).is_empty());
        assert!(crate::map_slice(&item("a", 1)).is_empty());
    }

    #[test]
    fn for_each_field_skips_hidden_fields() {
        let value = item("a", 1);
        let mut names = Vec::new();
        crate::for_each_field(&value, "json", |field| {
            names.push(field.name());
            true
        })
        .unwrap();
        assert_eq!(names, ["name", "count", "skipped"]);
    }
}
