use alloc::vec::Vec;

use crate::empty::{is_empty_deep, is_empty_value};
use crate::info::{FieldInfo, Kind};
use crate::ops::{List, Map, Record, ReflectRef};
use crate::stringify;
use crate::tag::TagSpec;
use crate::value::{FixedHashState, Value, ValueMap};
use crate::{DEFAULT_TAG_NAME, Reflect};

// -----------------------------------------------------------------------------
// Encoder

/// The recursive, tag-driven record encoder.
///
/// An `Encoder` only carries the active tag namespace; every record handed to
/// it is walked with the same rules, nested records included.
///
/// Only exported fields whose tag is not `-` take part. Fields are visited in
/// declaration order, so a later key overwrites an earlier one.
///
/// # Examples
///
/// ```
/// use vc_structs::{Encoder, Value, derive::Record};
///
/// #[derive(Record)]
/// struct Address {
///     pub city: String,
/// }
///
/// #[derive(Record)]
/// struct Person {
///     #[tag(map = "full_name", json = "name")]
///     pub name: String,
///     #[tag(map = ",flatten")]
///     pub address: Address,
/// }
///
/// let person = Person {
///     name: "Fatih".into(),
///     address: Address { city: "Ankara".into() },
/// };
///
/// let map = Encoder::new("map").map(&person);
/// assert_eq!(map["full_name"], Value::from("Fatih"));
/// assert_eq!(map["city"], Value::from("Ankara"));
///
/// let map = Encoder::new("json").map(&person);
/// assert_eq!(map["name"], Value::from("Fatih"));
/// assert_eq!(map["address"].as_map().unwrap()["city"], Value::from("Ankara"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Encoder<'t> {
    tag_name: &'t str,
}

impl Default for Encoder<'static> {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_TAG_NAME)
    }
}

impl<'t> Encoder<'t> {
    /// Creates an encoder reading tags from the `tag_name` namespace.
    #[inline]
    pub const fn new(tag_name: &'t str) -> Self {
        Self { tag_name }
    }

    #[inline]
    pub const fn tag_name(&self) -> &'t str {
        self.tag_name
    }

    /// Encodes the visible fields of `record` into a new map.
    pub fn map(&self, record: &dyn Record) -> ValueMap {
        let mut out = ValueMap::with_capacity_and_hasher(record.field_len(), FixedHashState);
        self.fill_map(record, &mut out);
        out
    }

    /// Encodes the visible fields of `record` into `out`.
    ///
    /// Existing entries of `out` are kept unless a field overwrites them.
    pub fn fill_map(&self, record: &dyn Record, out: &mut ValueMap) {
        for (field, value) in self.visible_fields(record) {
            if field.is_embedded() {
                self.merge_embedded(field, value, out);
                continue;
            }

            let tag = TagSpec::parse(field.tag(self.tag_name).unwrap_or_default());
            let key = tag.name().unwrap_or(field.name());

            if tag.omit_empty() && is_empty_value(value) {
                continue;
            }

            if tag.as_string() {
                if let Some(text) = stringify::to_string(value) {
                    out.insert(key.into(), Value::String(text));
                    continue;
                }
                log::debug!(
                    "field `{}` of kind {} has no text form, `string` ignored",
                    field.name(),
                    value.reflect_kind(),
                );
            }

            if tag.omit_nested() {
                out.insert(key.into(), Value::snapshot(value));
                continue;
            }

            match self.nested(value) {
                Value::Map(map) if tag.flatten() => out.extend(map),
                nested => {
                    if tag.flatten() {
                        log::debug!("field `{}` is not a mapping, `flatten` ignored", field.name());
                    }
                    out.insert(key.into(), nested);
                }
            }
        }
    }

    /// Lists the visible field values of `record` in declaration order.
    ///
    /// Nested records are spliced into the list unless tagged `omitnested`.
    pub fn values(&self, record: &dyn Record) -> Vec<Value> {
        let mut out = Vec::with_capacity(record.field_len());
        self.fill_values(record, &mut out);
        out
    }

    fn fill_values(&self, record: &dyn Record, out: &mut Vec<Value>) {
        for (field, value) in self.visible_fields(record) {
            let tag = TagSpec::parse(field.tag(self.tag_name).unwrap_or_default());

            if tag.omit_empty() && is_empty_value(value) {
                continue;
            }

            if tag.as_string()
                && let Some(text) = stringify::to_string(value)
            {
                out.push(Value::String(text));
                continue;
            }

            match value.resolve_record() {
                Some(inner) if !tag.omit_nested() => self.fill_values(inner, out),
                _ => out.push(Value::snapshot(value)),
            }
        }
    }

    /// Returns `true` if every visible field of `record` is empty.
    ///
    /// A record without visible fields is zero.
    pub fn is_zero(&self, record: &dyn Record) -> bool {
        self.visible_fields(record)
            .all(|(field, value)| match self.nested_record(field, value) {
                Some(inner) => self.is_zero(inner),
                None => is_empty_deep(value),
            })
    }

    /// Returns `true` if any visible field of `record` is empty.
    ///
    /// A record without visible fields has no zero field.
    pub fn has_zero(&self, record: &dyn Record) -> bool {
        self.visible_fields(record)
            .any(|(field, value)| match self.nested_record(field, value) {
                Some(inner) => self.has_zero(inner),
                None => is_empty_deep(value),
            })
    }

    /// Encodes one field value the way [`fill_map`](Self::fill_map) does when
    /// no option applies.
    ///
    /// - an interface is unwrapped and one pointer level followed, a nil
    ///   pointer becomes [`Value::Null`];
    /// - a record becomes its map, or a raw snapshot if the map is empty;
    /// - a map of records (or of lists of records) becomes a map of encoded
    ///   values;
    /// - a list of records (or of pointers to records) becomes a list of
    ///   encoded values;
    /// - anything else becomes a raw [`Value::snapshot`].
    pub fn nested(&self, value: &dyn Reflect) -> Value {
        match value.reflect_ref() {
            ReflectRef::Map(map) => self.nested_map(map).unwrap_or_else(|| Value::snapshot(value)),
            ReflectRef::List(list) | ReflectRef::Array(list) => self
                .nested_list(list)
                .unwrap_or_else(|| Value::snapshot(value)),
            ReflectRef::Interface(None) | ReflectRef::Pointer(None) => Value::Null,
            ReflectRef::Interface(Some(inner)) => self.nested_record_value(inner, value),
            _ => self.nested_record_value(value, value),
        }
    }

    // -------------------------------------------------------------------------
    // Internal

    fn visible_fields<'r>(
        &self,
        record: &'r dyn Record,
    ) -> impl Iterator<Item = (&'static FieldInfo, &'r dyn Reflect)> + use<'r, 't> {
        let tag_name = self.tag_name;
        record
            .record_info()
            .fields()
            .iter()
            .filter(move |field| field.is_exported() && !field.is_ignored(tag_name))
            .filter_map(move |field| Some((field, record.field_at(field.index())?)))
    }

    fn merge_embedded(&self, field: &FieldInfo, value: &dyn Reflect, out: &mut ValueMap) {
        match value.resolve_record() {
            Some(inner) => {
                log::trace!(
                    "merging embedded `{}` ({})",
                    field.name(),
                    inner.reflect_type_path()
                );
                self.fill_map(inner, out);
            }
            None => log::debug!(
                "embedded field `{}` holds no record ({}), skipped",
                field.name(),
                value.reflect_kind(),
            ),
        }
    }

    fn nested_record<'r>(
        &self,
        field: &FieldInfo,
        value: &'r dyn Reflect,
    ) -> Option<&'r dyn Record> {
        let tag = TagSpec::parse(field.tag(self.tag_name).unwrap_or_default());
        if tag.omit_nested() {
            return None;
        }
        value.resolve_record()
    }

    // `target` is `value` with its interface removed.
    fn nested_record_value(&self, target: &dyn Reflect, value: &dyn Reflect) -> Value {
        let record = match target.reflect_ref() {
            ReflectRef::Struct(record) => record,
            ReflectRef::Pointer(Some(inner)) => match inner.reflect_ref() {
                ReflectRef::Struct(record) => record,
                _ => return Value::snapshot(value),
            },
            _ => return Value::snapshot(value),
        };

        log::trace!("encoding nested record `{}`", record.record_info().name());
        let map = self.map(record);
        if map.is_empty() {
            Value::snapshot(value)
        } else {
            Value::Map(map)
        }
    }

    fn nested_map(&self, map: &dyn Map) -> Option<Value> {
        let mut elem = map.value_info();
        if elem.kind() == Kind::Pointer {
            elem = elem.item()?;
        }

        let recurse = match elem.kind() {
            Kind::Struct => true,
            Kind::Slice | Kind::Array => elem.item().is_some_and(|item| item.is_record()),
            _ => false,
        };
        if !recurse {
            return None;
        }

        let mut out = ValueMap::with_capacity_and_hasher(map.len(), FixedHashState);
        for (key, value) in map.iter() {
            let key = stringify::scalar_to_string(key)?;
            out.insert(key, self.nested(value));
        }
        Some(Value::Map(out))
    }

    fn nested_list(&self, list: &dyn List) -> Option<Value> {
        if !list.item_info().is_record_or_pointer() {
            return None;
        }
        Some(Value::List(list.iter().map(|item| self.nested(item)).collect()))
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::time::Duration;

    use super::Encoder;
    use crate::Value;
    use crate::derive::Record;
    use crate::value::ValueMap;

    #[derive(Record)]
    struct Bar {
        #[tag(map = "e")]
        pub e: String,
        pub count: i32,
    }

    #[derive(Record)]
    struct Foo {
        pub a: String,
        #[tag(map = "bee")]
        pub b: i32,
        #[tag(map = ",omitempty")]
        pub c: bool,
        #[tag(map = "-")]
        pub d: String,
        pub bar: Bar,
        #[tag(map = ",omitnested")]
        pub raw: Bar,
        #[tag(map = ",string")]
        pub ratio: f32,
        hidden: u8,
    }

    fn foo() -> Foo {
        Foo {
            a: "a-value".into(),
            b: 2,
            c: false,
            d: "excluded".into(),
            bar: Bar { e: "example".into(), count: 1 },
            raw: Bar { e: "raw".into(), count: 2 },
            ratio: 0.25,
            hidden: 9,
        }
    }

    fn keys(map: &ValueMap) -> Vec<&str> {
        let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn map_applies_tags() {
        let foo = foo();
        let map = Encoder::default().map(&foo);

        assert_eq!(keys(&map), ["a", "bar", "bee", "ratio", "raw"]);
        assert_eq!(map["a"], Value::from("a-value"));
        assert_eq!(map["bee"], Value::Int(2));
        assert_eq!(map["ratio"], Value::from("0.25"));

        let bar = map["bar"].as_map().unwrap();
        assert_eq!(bar["e"], Value::from("example"));
        assert_eq!(bar["count"], Value::Int(1));

        let raw = map["raw"].as_opaque().unwrap();
        assert_eq!(raw.downcast_ref::<Bar>().map(|bar| bar.e.as_str()), Some("raw"));
        let _ = foo.hidden;
    }

    #[test]
    fn omitempty_keeps_non_empty_values() {
        let mut foo = foo();
        foo.c = true;
        let map = Encoder::default().map(&foo);
        assert_eq!(map["c"], Value::Bool(true));
    }

    #[test]
    fn fill_map_keeps_existing_entries() {
        let foo = foo();
        let mut out = ValueMap::default();
        out.insert("extra".into(), Value::Int(1));
        out.insert("a".into(), Value::Null);

        Encoder::default().fill_map(&foo, &mut out);
        assert_eq!(out["extra"], Value::Int(1));
        assert_eq!(out["a"], Value::from("a-value"));
    }

    #[test]
    fn dash_key_excludes_even_with_options() {
        #[derive(Record)]
        struct Dash {
            #[tag(map = "-,omitempty")]
            pub x: i32,
            pub y: i32,
        }

        let value = Dash { x: 1, y: 2 };
        let map = Encoder::default().map(&value);
        assert_eq!(keys(&map), ["y"]);
        assert_eq!(Encoder::default().values(&value), [Value::Int(2)]);
        assert_eq!(crate::StructView::of(&value).names(), ["y"]);

        let value = Dash { x: 0, y: 2 };
        assert!(!Encoder::default().has_zero(&value));
    }

    #[test]
    fn later_sibling_overwrites_flattened_key() {
        #[derive(Record)]
        struct Shadowed {
            #[tag(map = ",flatten")]
            pub bar: Bar,
            #[tag(map = "e")]
            pub label: String,
        }

        let value = Shadowed {
            bar: Bar { e: "from bar".into(), count: 4 },
            label: "from label".into(),
        };
        let map = Encoder::default().map(&value);
        assert_eq!(keys(&map), ["count", "e"]);
        assert_eq!(map["e"], Value::from("from label"));
        assert_eq!(map["count"], Value::Int(4));
    }

    #[test]
    fn wide_integers_are_not_truncated() {
        #[derive(Record)]
        struct Wide {
            #[tag(map = ",omitempty")]
            pub big: i128,
            #[tag(map = ",string")]
            pub text: u128,
        }

        let value = Wide { big: 1 << 64, text: (1 << 64) + 5 };
        let map = Encoder::default().map(&value);

        let big = map["big"].as_opaque().unwrap();
        assert_eq!(big.downcast_ref::<i128>(), Some(&(1 << 64)));
        assert_eq!(map["text"], Value::from("18446744073709551621"));
        assert!(!Encoder::default().is_zero(&value));
    }

    #[derive(Record)]
    struct Embedding {
        pub name: String,
        #[record(embed)]
        pub bar: Option<Box<Bar>>,
    }

    #[test]
    fn embedded_records_are_merged() {
        let value = Embedding { name: "n".into(), bar: None };
        let map = Encoder::default().map(&value);
        assert_eq!(keys(&map), ["name"]);

        let value = Embedding {
            name: "n".into(),
            bar: Some(Box::new(Bar { e: "example".into(), count: 3 })),
        };
        let map = Encoder::default().map(&value);
        assert_eq!(keys(&map), ["count", "e", "name"]);
        assert_eq!(map["e"], Value::from("example"));
    }

    #[derive(Record)]
    struct Flat {
        pub id: i32,
        #[tag(map = ",flatten")]
        pub bar: Bar,
        #[tag(map = ",flatten")]
        pub tags: Vec<String>,
    }

    #[test]
    fn flatten_splices_mappings_only() {
        let value = Flat {
            id: 1,
            bar: Bar { e: "x".into(), count: 4 },
            tags: vec!["t".into()],
        };
        let map = Encoder::default().map(&value);

        assert_eq!(keys(&map), ["count", "e", "id", "tags"]);
        assert_eq!(map["tags"], Value::List(vec![Value::from("t")]));
    }

    #[derive(Record)]
    struct Collections {
        pub bars: Vec<Bar>,
        pub maybe: Vec<Option<Bar>>,
        pub by_name: BTreeMap<String, Bar>,
        pub grouped: BTreeMap<u8, Vec<Bar>>,
        pub plain: BTreeMap<String, i32>,
        pub numbers: [i32; 2],
        pub opaque: Duration,
        pub nothing: Option<Bar>,
        pub any: Value,
    }

    #[test]
    fn nested_collections() {
        let mut by_name = BTreeMap::new();
        by_name.insert(String::from("first"), Bar { e: "1".into(), count: 1 });
        let mut grouped = BTreeMap::new();
        grouped.insert(7_u8, vec![Bar { e: "2".into(), count: 2 }]);
        let mut plain = BTreeMap::new();
        plain.insert(String::from("k"), 5);

        let value = Collections {
            bars: vec![Bar { e: "0".into(), count: 0 }],
            maybe: vec![None, Some(Bar { e: "3".into(), count: 3 })],
            by_name,
            grouped,
            plain,
            numbers: [1, 2],
            opaque: Duration::from_secs(1),
            nothing: None,
            any: Value::from(vec![Value::Int(1)]),
        };
        let map = Encoder::default().map(&value);

        let bars = map["bars"].as_list().unwrap();
        assert_eq!(bars[0].as_map().unwrap()["e"], Value::from("0"));

        let maybe = map["maybe"].as_list().unwrap();
        assert_eq!(maybe[0], Value::Null);
        assert_eq!(maybe[1].as_map().unwrap()["count"], Value::Int(3));

        let by_name = map["by_name"].as_map().unwrap();
        assert_eq!(by_name["first"].as_map().unwrap()["e"], Value::from("1"));

        let grouped = map["grouped"].as_map().unwrap();
        let group = grouped["7"].as_list().unwrap();
        assert_eq!(group[0].as_map().unwrap()["e"], Value::from("2"));

        assert_eq!(map["plain"].as_map().unwrap()["k"], Value::Int(5));
        assert_eq!(map["numbers"], Value::List(vec![Value::Int(1), Value::Int(2)]));
        assert!(map["opaque"].as_opaque().is_some());
        assert_eq!(map["nothing"], Value::Null);
        assert_eq!(map["any"], Value::List(vec![Value::Int(1)]));
    }

    #[derive(Record)]
    struct Empty {
        hidden: i32,
    }

    #[derive(Record)]
    struct Holder {
        pub empty: Empty,
    }

    #[test]
    fn records_without_visible_fields_stay_raw() {
        let value = Holder { empty: Empty { hidden: 3 } };
        let map = Encoder::default().map(&value);
        let raw = map["empty"].as_opaque().unwrap();
        assert_eq!(raw.downcast_ref::<Empty>().map(|e| e.hidden), Some(3));
    }

    #[test]
    fn values_splice_nested_records() {
        let foo = foo();
        let values = Encoder::default().values(&foo);

        assert_eq!(values.len(), 6);
        assert_eq!(values[0], Value::from("a-value"));
        assert_eq!(values[1], Value::Int(2));
        assert_eq!(values[2], Value::from("example"));
        assert_eq!(values[3], Value::Int(1));
        assert!(values[4].as_opaque().is_some());
        assert_eq!(values[5], Value::from("0.25"));
    }

    #[test]
    fn zero_checks() {
        let encoder = Encoder::default();
        let zero = Bar { e: String::new(), count: 0 };
        let half = Bar { e: String::new(), count: 1 };
        let full = Bar { e: "e".into(), count: 1 };

        assert!(encoder.is_zero(&zero));
        assert!(encoder.has_zero(&zero));
        assert!(!encoder.is_zero(&half));
        assert!(encoder.has_zero(&half));
        assert!(!encoder.is_zero(&full));
        assert!(!encoder.has_zero(&full));

        // nested records are checked field by field
        let holder = Holder { empty: Empty { hidden: 1 } };
        assert!(encoder.is_zero(&holder));
        assert!(!encoder.has_zero(&holder));
    }

    #[test]
    fn tag_namespaces() {
        #[derive(Record)]
        struct Tagged {
            #[tag(map = "m", json = "-")]
            pub value: i32,
        }

        let value = Tagged { value: 1 };
        assert_eq!(keys(&Encoder::new("map").map(&value)), ["m"]);
        assert_eq!(keys(&Encoder::new("other").map(&value)), ["value"]);
        assert!(Encoder::new("json").map(&value).is_empty());
    }
}
