use crate::info::FieldInfo;

// -----------------------------------------------------------------------------
// RecordInfo

/// Static descriptor table of a record type.
///
/// The table is built in a `static` by `#[derive(Record)]` and returned by
/// [`Record::record_info`](crate::ops::Record::record_info). Fields are kept
/// in declaration order.
#[derive(Clone, Copy, Debug)]
pub struct RecordInfo {
    name: &'static str,
    fields: &'static [FieldInfo],
}

impl RecordInfo {
    #[inline]
    pub const fn new(name: &'static str, fields: &'static [FieldInfo]) -> Self {
        Self { name, fields }
    }

    /// Returns the declared type name, without module path or generics.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn fields(&self) -> &'static [FieldInfo] {
        self.fields
    }

    #[inline]
    pub const fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the field at `index`.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&'static FieldInfo> {
        self.fields.get(index)
    }

    /// Returns the field named `name`.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&'static FieldInfo> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns the position of the field named `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }
}
