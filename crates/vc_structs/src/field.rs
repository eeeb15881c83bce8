//! Per-field accessors.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::empty::is_empty_value;
use crate::error::FieldError;
use crate::info::{FieldInfo, Kind};
use crate::ops::Record;
use crate::Reflect;

// -----------------------------------------------------------------------------
// FieldHandle

enum FieldHandle<'a> {
    Shared(&'a dyn Reflect),
    Exclusive(&'a mut dyn Reflect),
}

impl FieldHandle<'_> {
    #[inline]
    fn get(&self) -> &dyn Reflect {
        match self {
            Self::Shared(value) => *value,
            Self::Exclusive(value) => &**value,
        }
    }
}

// -----------------------------------------------------------------------------
// FieldView

/// A view of one field of a record.
///
/// Views obtained through a shared borrow (`fields`, `field`) can only be
/// read. Views obtained through an exclusive borrow (`fields_mut`,
/// `field_mut`) can also write exported fields.
///
/// # Examples
///
/// ```
/// use vc_structs::{FieldError, StructView, derive::Record};
///
/// #[derive(Record)]
/// struct Server {
///     #[tag(map = "server_name", json = "name")]
///     pub name: String,
///     port: u16,
/// }
///
/// let mut server = Server { name: "web".into(), port: 80 };
///
/// let view = StructView::of(&server);
/// let name = view.field("name").unwrap();
/// assert_eq!(name.tag("json"), "name");
/// assert_eq!(name.tag("xml"), "");
/// assert_eq!(name.value_as::<String>().unwrap(), "web");
/// assert!(!name.can_set());
///
/// let port = view.field("port").unwrap();
/// assert_eq!(port.value().unwrap_err(), FieldError::NotExported("port"));
///
/// let mut view = StructView::of_mut(&mut server);
/// let mut name = view.field_mut("name").unwrap();
/// name.set(String::from("api")).unwrap();
/// assert!(name.set(8080_u16).is_err());
///
/// assert_eq!(server.name, "api");
/// # let _ = server.port;
/// ```
pub struct FieldView<'a> {
    info: &'static FieldInfo,
    value: FieldHandle<'a>,
    tag_name: &'a str,
}

impl<'a> FieldView<'a> {
    #[inline]
    pub(crate) fn shared(info: &'static FieldInfo, value: &'a dyn Reflect, tag_name: &'a str) -> Self {
        Self {
            info,
            value: FieldHandle::Shared(value),
            tag_name,
        }
    }

    #[inline]
    pub(crate) fn exclusive(
        info: &'static FieldInfo,
        value: &'a mut dyn Reflect,
        tag_name: &'a str,
    ) -> Self {
        Self {
            info,
            value: FieldHandle::Exclusive(value),
            tag_name,
        }
    }

    /// Returns the static descriptor of the field.
    #[inline]
    pub fn info(&self) -> &'static FieldInfo {
        self.info
    }

    /// Returns the declared name of the field.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.info.name()
    }

    /// Returns the kind of the current value.
    #[inline]
    pub fn kind(&self) -> Kind {
        self.value.get().reflect_kind()
    }

    /// Returns the raw tag of `namespace`, or `""` if the field has none.
    #[inline]
    pub fn tag(&self, namespace: &str) -> &'static str {
        self.info.tag(namespace).unwrap_or_default()
    }

    #[inline]
    pub fn is_exported(&self) -> bool {
        self.info.is_exported()
    }

    /// Returns `true` for embedded fields.
    #[inline]
    pub fn is_anonymous(&self) -> bool {
        self.info.is_embedded()
    }

    /// Returns `true` if [`value`](Self::value) succeeds.
    #[inline]
    pub fn can_interface(&self) -> bool {
        self.info.is_exported()
    }

    /// Returns `true` if [`set`](Self::set) can succeed for a value of the
    /// field's type.
    #[inline]
    pub fn can_set(&self) -> bool {
        self.info.is_exported() && matches!(self.value, FieldHandle::Exclusive(_))
    }

    /// Returns the current value.
    pub fn value(&self) -> Result<&dyn Reflect, FieldError> {
        if !self.info.is_exported() {
            return Err(FieldError::NotExported(self.info.name()));
        }
        Ok(self.value.get())
    }

    /// Returns the current value as a `T`.
    pub fn value_as<T: Reflect>(&self) -> Result<&T, FieldError> {
        let value = self.value()?;
        value.downcast_ref::<T>().ok_or(FieldError::TypeMismatch {
            field: self.info.name(),
            expected: core::any::type_name::<T>(),
            found: value.reflect_type_path(),
        })
    }

    /// Returns the current value for writing.
    pub fn value_mut(&mut self) -> Result<&mut dyn Reflect, FieldError> {
        let name = self.info.name();
        if !self.info.is_exported() {
            return Err(FieldError::NotExported(name));
        }
        match &mut self.value {
            FieldHandle::Exclusive(value) => Ok(&mut **value),
            FieldHandle::Shared(_) => Err(FieldError::NotSettable(name)),
        }
    }

    /// Returns `true` if the current value is empty, without looking inside
    /// records.
    #[inline]
    pub fn is_zero(&self) -> bool {
        is_empty_value(self.value.get())
    }

    /// Replaces the field value.
    ///
    /// `value` must have the declared type of the field; a boxed field also
    /// accepts the unboxed value. The field is unchanged on error.
    pub fn set<T: Reflect>(&mut self, value: T) -> Result<(), FieldError> {
        let name = self.info.name();
        let target = self.value_mut()?;
        let expected = target.reflect_type_path();
        target
            .set(Box::new(value))
            .map_err(|rejected| FieldError::TypeMismatch {
                field: name,
                expected,
                found: rejected.reflect_type_path(),
            })
    }

    /// Resets the field to the zero value of its type.
    pub fn set_zero(&mut self) -> Result<(), FieldError> {
        self.value_mut()?.set_zero();
        Ok(())
    }

    /// Looks up a sub-field when the value is a record (behind any number of
    /// pointers).
    ///
    /// Fields promoted from embedded records are found too.
    pub fn field(&self, name: &str) -> Option<FieldView<'_>> {
        let record = self.value.get().resolve_record()?;
        let (info, value) = lookup(record, name)?;
        Some(FieldView::shared(info, value, self.tag_name))
    }

    /// Looks up a sub-field for writing.
    ///
    /// The returned view is read-only if `self` is, or if this field is not
    /// exported.
    pub fn field_mut(&mut self, name: &str) -> Option<FieldView<'_>> {
        let tag_name = self.tag_name;
        if self.can_set() {
            let record = self.value_mut().ok()?.resolve_record_mut()?;
            let (info, value) = lookup_mut(record, name)?;
            return Some(FieldView::exclusive(info, value, tag_name));
        }

        let (info, value) = lookup(self.value.get().resolve_record()?, name)?;
        Some(FieldView::shared(info, value, tag_name))
    }

    /// Like [`field`](Self::field), for names known to exist.
    ///
    /// # Panics
    ///
    /// Panics if the sub-field does not exist.
    pub fn must_field(&self, name: &str) -> FieldView<'_> {
        self.field(name)
            .unwrap_or_else(|| panic!("field `{name}` not found"))
    }

    /// Lists the sub-fields when the value is a record, empty otherwise.
    ///
    /// Fields tagged `-` are left out.
    pub fn fields(&self) -> Vec<FieldView<'_>> {
        match self.value.get().resolve_record() {
            Some(record) => record_fields(record, self.tag_name),
            None => Vec::new(),
        }
    }

    /// Lists the sub-fields for writing, see [`field_mut`](Self::field_mut).
    pub fn fields_mut(&mut self) -> Vec<FieldView<'_>> {
        let tag_name = self.tag_name;
        if self.can_set() {
            return match self.value_mut().ok().and_then(|value| value.resolve_record_mut()) {
                Some(record) => record_fields_mut(record, tag_name),
                None => Vec::new(),
            };
        }

        match self.value.get().resolve_record() {
            Some(record) => record_fields(record, tag_name),
            None => Vec::new(),
        }
    }
}

impl fmt::Debug for FieldView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldView")
            .field("name", &self.info.name())
            .field("kind", &self.kind())
            .field("exported", &self.info.is_exported())
            .field("settable", &self.can_set())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Lookup

pub(crate) fn record_fields<'a>(record: &'a dyn Record, tag_name: &'a str) -> Vec<FieldView<'a>> {
    record
        .record_info()
        .fields()
        .iter()
        .filter(|info| !info.is_ignored(tag_name))
        .filter_map(|info| {
            let value = record.field_at(info.index())?;
            Some(FieldView::shared(info, value, tag_name))
        })
        .collect()
}

pub(crate) fn record_fields_mut<'a>(
    record: &'a mut dyn Record,
    tag_name: &'a str,
) -> Vec<FieldView<'a>> {
    let infos = record.record_info().fields();
    record
        .fields_mut()
        .into_iter()
        .zip(infos)
        .filter(|(_, info)| !info.is_ignored(tag_name))
        .map(|(value, info)| FieldView::exclusive(info, value, tag_name))
        .collect()
}

/// Finds `name` among the fields of `record`, then depth first among the
/// fields of its embedded records.
pub(crate) fn lookup<'r>(
    record: &'r dyn Record,
    name: &str,
) -> Option<(&'static FieldInfo, &'r dyn Reflect)> {
    let info = record.record_info();
    if let Some(field) = info.field(name) {
        return Some((field, record.field_at(field.index())?));
    }

    info.fields()
        .iter()
        .filter(|field| field.is_embedded())
        .find_map(|field| lookup(record.field_at(field.index())?.resolve_record()?, name))
}

pub(crate) fn lookup_mut<'r>(
    record: &'r mut dyn Record,
    name: &str,
) -> Option<(&'static FieldInfo, &'r mut dyn Reflect)> {
    let info = record.record_info();
    if let Some(field) = info.field(name) {
        return Some((field, record.field_at_mut(field.index())?));
    }

    let embedded = info
        .fields()
        .iter()
        .filter(|field| field.is_embedded())
        .find(|field| {
            record
                .field_at(field.index())
                .and_then(<dyn Reflect>::resolve_record)
                .is_some_and(|inner| lookup(inner, name).is_some())
        })?;

    lookup_mut(record.field_at_mut(embedded.index())?.resolve_record_mut()?, name)
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::derive::Record;
    use crate::info::Kind;
    use crate::{FieldError, StructView};

    #[derive(Record)]
    struct Bar {
        pub e: String,
        #[tag(map = "-")]
        pub skipped: i32,
        secret: i32,
    }

    #[derive(Record)]
    struct Foo {
        #[tag(map = "a_name", json = "a")]
        pub a: String,
        pub b: i32,
        pub c: Option<Box<Bar>>,
        pub d: Bar,
        #[record(embed)]
        pub base: Base,
        hidden: Bar,
    }

    #[derive(Record)]
    struct Base {
        pub id: u64,
    }

    fn bar(e: &str) -> Bar {
        Bar { e: e.into(), skipped: 0, secret: 1 }
    }

    fn foo() -> Foo {
        Foo {
            a: "gopher".into(),
            b: 123,
            c: Some(Box::new(bar("pointer"))),
            d: bar("inline"),
            base: Base { id: 7 },
            hidden: bar("hidden"),
        }
    }

    #[test]
    fn read_only_views() {
        let foo = foo();
        let view = StructView::of(&foo);

        let a = view.field("a").unwrap();
        assert_eq!(a.name(), "a");
        assert_eq!(a.kind(), Kind::String);
        assert_eq!(a.tag("map"), "a_name");
        assert_eq!(a.tag("json"), "a");
        assert!(a.is_exported());
        assert!(a.can_interface());
        assert!(!a.can_set());
        assert!(!a.is_zero());
        assert_eq!(a.value_as::<String>().unwrap(), "gopher");
        assert_eq!(
            a.value_as::<i32>().unwrap_err(),
            FieldError::TypeMismatch {
                field: "a",
                expected: "i32",
                found: "alloc::string::String",
            },
        );

        let hidden = view.field("hidden").unwrap();
        assert!(!hidden.is_exported());
        assert!(!hidden.can_interface());
        assert_eq!(hidden.value().unwrap_err(), FieldError::NotExported("hidden"));

        assert!(view.field("base").unwrap().is_anonymous());
        assert!(!view.field("d").unwrap().is_anonymous());
    }

    #[test]
    fn nested_lookup() {
        let foo = foo();
        let view = StructView::of(&foo);

        let c = view.field("c").unwrap();
        assert_eq!(c.kind(), Kind::Pointer);
        assert_eq!(c.must_field("e").value_as::<String>().unwrap(), "pointer");
        assert!(c.field("missing").is_none());

        let names: Vec<&str> = view.field("d").unwrap().fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["e", "secret"]);

        let b = view.field("b").unwrap();
        assert!(b.field("e").is_none());
        assert!(b.fields().is_empty());
    }

    #[test]
    #[should_panic(expected = "field `missing` not found")]
    fn must_field_panics() {
        let foo = foo();
        let view = StructView::of(&foo);
        let _ = view.field("d").unwrap().must_field("missing");
    }

    #[test]
    fn writes() {
        let mut foo = foo();
        let mut view = StructView::of_mut(&mut foo);

        let mut b = view.field_mut("b").unwrap();
        assert!(b.can_set());
        b.set(456_i32).unwrap();
        assert_eq!(
            b.set(String::from("x")).unwrap_err(),
            FieldError::TypeMismatch {
                field: "b",
                expected: "i32",
                found: "alloc::string::String",
            },
        );

        let mut c = view.field_mut("c").unwrap();
        c.field_mut("e").unwrap().set(String::from("changed")).unwrap();
        c.set_zero().unwrap();

        let mut hidden = view.field_mut("hidden").unwrap();
        assert!(!hidden.can_set());
        assert_eq!(hidden.set_zero().unwrap_err(), FieldError::NotExported("hidden"));
        assert!(!hidden.field_mut("e").unwrap().can_set());

        for mut field in view.field_mut("d").unwrap().fields_mut() {
            if field.is_exported() {
                field.set_zero().unwrap();
            }
        }

        assert_eq!(foo.b, 456);
        assert!(foo.c.is_none());
        assert_eq!(foo.d.e, "");
        assert_eq!(foo.hidden.e, "hidden");
        let _ = (foo.d.skipped, foo.d.secret);
    }

    #[test]
    fn shared_views_are_not_settable() {
        let foo = foo();
        let view = StructView::of(&foo);
        let fields = view.fields();
        assert!(fields.iter().all(|field| !field.can_set()));
    }
}
