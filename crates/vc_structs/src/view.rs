use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;

use crate::encode::Encoder;
use crate::error::StructError;
use crate::field::{self, FieldView};
use crate::ops::Record;
use crate::value::{Value, ValueMap};
use crate::{DEFAULT_TAG_NAME, Reflect};

// -----------------------------------------------------------------------------
// RecordHandle

enum RecordHandle<'a> {
    Shared(&'a dyn Record),
    Exclusive(&'a mut dyn Record),
}

impl RecordHandle<'_> {
    #[inline]
    fn get(&self) -> &dyn Record {
        match self {
            Self::Shared(record) => *record,
            Self::Exclusive(record) => &**record,
        }
    }
}

// -----------------------------------------------------------------------------
// StructView

/// A view of one record, reading tags from one namespace.
///
/// The namespace defaults to [`DEFAULT_TAG_NAME`] and can be changed with
/// [`set_tag_name`](Self::set_tag_name) or
/// [`with_tag_name`](Self::with_tag_name).
///
/// # Examples
///
/// ```
/// use vc_structs::{StructView, Value, derive::Record};
///
/// #[derive(Record)]
/// struct Config {
///     #[tag(env = "APP_PORT")]
///     pub port: u16,
///     #[tag(env = "-")]
///     pub debug: bool,
/// }
///
/// let config = Config { port: 8080, debug: true };
///
/// let mut view = StructView::new(&config).unwrap();
/// view.set_tag_name("env");
///
/// let map = view.map();
/// assert_eq!(map.len(), 1);
/// assert_eq!(map["APP_PORT"], Value::Uint(8080));
/// assert_eq!(view.names(), ["port"]);
/// assert_eq!(view.name(), "Config");
///
/// assert!(StructView::new(&42).is_err());
/// # let _ = config.debug;
/// ```
pub struct StructView<'a> {
    record: RecordHandle<'a>,
    tag_name: Cow<'a, str>,
}

impl<'a> StructView<'a> {
    /// Creates a read-only view of `value`, following any number of non-nil
    /// pointers.
    ///
    /// Fails with [`StructError::NotAStruct`] if no record is found.
    pub fn new(value: &'a dyn Reflect) -> Result<Self, StructError> {
        let record = value.resolve_record().ok_or(StructError::NotAStruct {
            type_path: value.reflect_type_path(),
        })?;
        Ok(Self::of(record))
    }

    /// Creates a writable view of `value`, following any number of non-nil
    /// pointers.
    pub fn new_mut(value: &'a mut dyn Reflect) -> Result<Self, StructError> {
        let type_path = value.reflect_type_path();
        let record = value
            .resolve_record_mut()
            .ok_or(StructError::NotAStruct { type_path })?;
        Ok(Self {
            record: RecordHandle::Exclusive(record),
            tag_name: Cow::Borrowed(DEFAULT_TAG_NAME),
        })
    }

    /// Creates a read-only view of a record.
    #[inline]
    pub fn of<T: Record + ?Sized>(record: &'a T) -> Self {
        Self {
            record: RecordHandle::Shared(record.as_record()),
            tag_name: Cow::Borrowed(DEFAULT_TAG_NAME),
        }
    }

    /// Creates a writable view of a record.
    #[inline]
    pub fn of_mut<T: Record>(record: &'a mut T) -> Self {
        Self {
            record: RecordHandle::Exclusive(record),
            tag_name: Cow::Borrowed(DEFAULT_TAG_NAME),
        }
    }

    /// Changes the tag namespace read by later calls.
    #[inline]
    pub fn set_tag_name(&mut self, tag_name: impl Into<Cow<'a, str>>) -> &mut Self {
        self.tag_name = tag_name.into();
        self
    }

    /// Builder form of [`set_tag_name`](Self::set_tag_name).
    #[inline]
    pub fn with_tag_name(mut self, tag_name: impl Into<Cow<'a, str>>) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    #[inline]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Returns the underlying record.
    #[inline]
    pub fn record(&self) -> &dyn Record {
        self.record.get()
    }

    /// Returns the declared name of the record type.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.record.get().record_info().name()
    }

    #[inline]
    fn encoder(&self) -> Encoder<'_> {
        Encoder::new(&self.tag_name)
    }

    // -------------------------------------------------------------------------
    // Fields

    /// Lists the fields not tagged `-`, exported or not, in declaration order.
    ///
    /// An embedded record is listed as a single field.
    pub fn fields(&self) -> Vec<FieldView<'_>> {
        field::record_fields(self.record.get(), &self.tag_name)
    }

    /// Writable form of [`fields`](Self::fields).
    ///
    /// The views are read-only if the view was created from a shared borrow.
    pub fn fields_mut(&mut self) -> Vec<FieldView<'_>> {
        let Self { record, tag_name } = self;
        match record {
            RecordHandle::Exclusive(record) => field::record_fields_mut(&mut **record, tag_name),
            RecordHandle::Shared(record) => field::record_fields(*record, tag_name),
        }
    }

    /// Lists the names of [`fields`](Self::fields).
    pub fn names(&self) -> Vec<&'static str> {
        self.record
            .get()
            .record_info()
            .fields()
            .iter()
            .filter(|info| !info.is_ignored(&self.tag_name))
            .map(|info| info.name())
            .collect()
    }

    /// Looks up a field by name, including fields promoted from embedded
    /// records. Tags are not consulted.
    pub fn field(&self, name: &str) -> Option<FieldView<'_>> {
        let (info, value) = field::lookup(self.record.get(), name)?;
        Some(FieldView::shared(info, value, &self.tag_name))
    }

    /// Writable form of [`field`](Self::field).
    pub fn field_mut(&mut self, name: &str) -> Option<FieldView<'_>> {
        let Self { record, tag_name } = self;
        match record {
            RecordHandle::Exclusive(record) => {
                let (info, value) = field::lookup_mut(&mut **record, name)?;
                Some(FieldView::exclusive(info, value, tag_name))
            }
            RecordHandle::Shared(record) => {
                let (info, value) = field::lookup(*record, name)?;
                Some(FieldView::shared(info, value, tag_name))
            }
        }
    }

    /// Like [`field`](Self::field), for names known to exist.
    ///
    /// # Panics
    ///
    /// Panics if the field does not exist.
    pub fn must_field(&self, name: &str) -> FieldView<'_> {
        self.field(name)
            .unwrap_or_else(|| panic!("field `{name}` not found"))
    }

    // -------------------------------------------------------------------------
    // Encoding

    /// Encodes the record into a map, see [`Encoder::fill_map`].
    pub fn map(&self) -> ValueMap {
        self.encoder().map(self.record.get())
    }

    /// Encodes the record into `out`.
    pub fn fill_map(&self, out: &mut ValueMap) {
        self.encoder().fill_map(self.record.get(), out);
    }

    /// Lists the field values, see [`Encoder::values`].
    pub fn values(&self) -> Vec<Value> {
        self.encoder().values(self.record.get())
    }

    /// Returns `true` if every exported field is empty.
    pub fn is_zero(&self) -> bool {
        self.encoder().is_zero(self.record.get())
    }

    /// Returns `true` if any exported field is empty.
    pub fn has_zero(&self) -> bool {
        self.encoder().has_zero(self.record.get())
    }
}

impl fmt::Debug for StructView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructView")
            .field("name", &self.name())
            .field("tag_name", &self.tag_name)
            .field("writable", &matches!(self.record, RecordHandle::Exclusive(_)))
            .finish()
    }
}

impl<'a> From<&'a dyn Record> for StructView<'a> {
    #[inline]
    fn from(record: &'a dyn Record) -> Self {
        Self::of(record)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::StructView;
    use crate::derive::Record;
    use crate::{StructError, Value};

    #[derive(Record)]
    struct Bar {
        #[tag(map = "e")]
        pub e: String,
    }

    #[derive(Record)]
    struct Foo {
        pub a: String,
        pub b: i32,
        #[tag(map = "-")]
        pub c: bool,
        #[record(embed)]
        pub bar: Option<Box<Bar>>,
        d: u8,
    }

    fn foo() -> Foo {
        Foo {
            a: "a".into(),
            b: 1,
            c: true,
            bar: Some(Box::new(Bar { e: "example".into() })),
            d: 2,
        }
    }

    #[test]
    fn constructors_follow_pointers() {
        let foo = foo();
        let boxed = Some(Some(Box::new(foo)));
        let view = StructView::new(&boxed).unwrap();
        assert_eq!(view.name(), "Foo");

        assert_eq!(
            StructView::new(&None::<Foo>).unwrap_err(),
            StructError::NotAStruct {
                type_path: core::any::type_name::<Option<Foo>>(),
            },
        );
        assert!(StructView::new(&vec![1_u8]).is_err());
    }

    #[test]
    fn names_and_fields() {
        let foo = foo();
        let view = StructView::of(&foo);

        assert_eq!(view.names(), ["a", "b", "bar", "d"]);
        let names: Vec<&str> = view.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, view.names());

        let bar = view.field("bar").unwrap();
        assert!(bar.is_anonymous());

        // promoted through the embedded pointer
        assert_eq!(view.must_field("e").value_as::<String>().unwrap(), "example");
        assert!(view.field("c").is_some());
        assert!(view.field("missing").is_none());
    }

    #[test]
    #[should_panic(expected = "field `missing` not found")]
    fn must_field_panics() {
        let foo = foo();
        let _ = StructView::of(&foo).must_field("missing");
    }

    #[test]
    fn tag_name_changes() {
        #[derive(Record)]
        struct Tagged {
            #[tag(json = "first", map = "-")]
            pub x: i32,
        }

        let value = Tagged { x: 1 };
        let mut view = StructView::of(&value);
        assert!(view.map().is_empty());

        view.set_tag_name("json");
        assert_eq!(view.tag_name(), "json");
        assert_eq!(view.map()["first"], Value::Int(1));

        let view = StructView::of(&value).with_tag_name(String::from("xml"));
        assert_eq!(view.map()["x"], Value::Int(1));
    }

    #[test]
    fn encoding() {
        let foo = foo();
        let view = StructView::of(&foo);

        let map = view.map();
        assert_eq!(map.len(), 3);
        assert_eq!(map["e"], Value::from("example"));

        assert_eq!(
            view.values(),
            [Value::from("a"), Value::Int(1), Value::from("example")],
        );
        assert!(!view.is_zero());
        assert!(!view.has_zero());
    }

    #[test]
    fn promoted_writes() {
        let mut foo = foo();
        let mut view = StructView::new_mut(&mut foo).unwrap();
        view.field_mut("e").unwrap().set(String::from("changed")).unwrap();

        for mut field in view.fields_mut() {
            if field.name() == "b" {
                field.set(9_i32).unwrap();
            }
        }

        assert_eq!(foo.bar.as_ref().map(|bar| bar.e.as_str()), Some("changed"));
        assert_eq!(foo.b, 9);
        let _ = (foo.c, foo.d);
    }
}
