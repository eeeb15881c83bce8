use alloc::vec::Vec;

use crate::Reflect;
use crate::info::RecordInfo;

// -----------------------------------------------------------------------------
// Record

/// A reflected record with named fields.
///
/// Implemented by `#[derive(Record)]`; the descriptor table returned by
/// [`record_info`](Record::record_info) and the accessors agree on field order.
///
/// # Examples
///
/// ```
/// use vc_structs::{Reflect, derive::Record, ops::Record};
///
/// #[derive(Record)]
/// struct Foo {
///     pub bar: u32,
///     baz: String,
/// }
///
/// let foo = Foo { bar: 123, baz: "baz".into() };
///
/// assert_eq!(foo.field_len(), 2);
/// assert_eq!(foo.field("bar").and_then(|v| v.downcast_ref::<u32>()), Some(&123));
/// assert_eq!(foo.record_info().name(), "Foo");
/// # let _ = &foo.baz;
/// ```
pub trait Record: Reflect {
    /// Returns the static descriptor table of the record.
    fn record_info(&self) -> &'static RecordInfo;

    /// Returns the value of the field at `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the mutable value of the field at `index`.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns mutable values of every field at once, in declaration order.
    fn fields_mut(&mut self) -> Vec<&mut dyn Reflect>;

    /// Returns the value of the field named `name`.
    #[inline]
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        let index = self.record_info().index_of(name)?;
        self.field_at(index)
    }

    /// Returns the mutable value of the field named `name`.
    #[inline]
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        let index = self.record_info().index_of(name)?;
        self.field_at_mut(index)
    }

    #[inline]
    fn field_len(&self) -> usize {
        self.record_info().field_len()
    }

    /// Returns an iterator over the field values.
    #[inline]
    fn iter_fields(&self) -> RecordFieldIter<'_> {
        RecordFieldIter::new(self.as_record())
    }

    /// Casts to a record trait object.
    fn as_record(&self) -> &dyn Record;
}

// -----------------------------------------------------------------------------
// RecordFieldIter

/// An iterator over the field values of a record.
pub struct RecordFieldIter<'a> {
    record: &'a dyn Record,
    index: usize,
}

impl<'a> RecordFieldIter<'a> {
    #[inline(always)]
    pub const fn new(record: &'a dyn Record) -> Self {
        Self { record, index: 0 }
    }
}

impl<'a> Iterator for RecordFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.record.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.record.field_len();
        (size - self.index, Some(size))
    }
}

impl ExactSizeIterator for RecordFieldIter<'_> {}
