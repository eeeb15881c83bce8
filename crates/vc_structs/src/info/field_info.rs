use crate::tag::TagSpec;

// -----------------------------------------------------------------------------
// FieldInfo

/// Static description of one record field.
///
/// Generated by `#[derive(Record)]`; the tags are kept as raw strings and
/// parsed on demand by [`TagSpec`](crate::tag::TagSpec).
///
/// # Examples
///
/// ```
/// use vc_structs::{derive::Record, ops::Record};
///
/// #[derive(Record)]
/// struct Foo {
///     #[tag(map = "bar,omitempty", json = "bar")]
///     pub field_a: f32,
///     field_b: u8,
/// }
///
/// let info = Foo { field_a: 0.0, field_b: 0 }.record_info();
/// let field_a = &info.fields()[0];
///
/// assert_eq!(field_a.name(), "field_a");
/// assert!(field_a.is_exported());
/// assert_eq!(field_a.tag("map"), Some("bar,omitempty"));
/// assert_eq!(field_a.tag("yaml"), None);
///
/// assert!(!info.fields()[1].is_exported());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    name: &'static str,
    index: usize,
    exported: bool,
    embedded: bool,
    tags: &'static [(&'static str, &'static str)],
}

impl FieldInfo {
    /// Creates a private, non-embedded field without tags.
    #[inline]
    pub const fn new(name: &'static str, index: usize) -> Self {
        Self {
            name,
            index,
            exported: false,
            embedded: false,
            tags: &[],
        }
    }

    #[inline]
    pub const fn with_exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    #[inline]
    pub const fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    /// Sets the raw tags as `(namespace, tag)` pairs.
    #[inline]
    pub const fn with_tags(mut self, tags: &'static [(&'static str, &'static str)]) -> Self {
        self.tags = tags;
        self
    }

    /// Returns the declared field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declaration position of the field.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if the field is `pub`.
    #[inline]
    pub const fn is_exported(&self) -> bool {
        self.exported
    }

    /// Returns `true` if the field is marked `#[record(embed)]`.
    #[inline]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Returns the raw tag for `namespace`, if any.
    pub fn tag(&self, namespace: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(ns, _)| *ns == namespace)
            .map(|(_, tag)| *tag)
    }

    /// Returns every `(namespace, tag)` pair of the field.
    #[inline]
    pub const fn tags(&self) -> &'static [(&'static str, &'static str)] {
        self.tags
    }

    /// Returns `true` if the key of the field's tag in `namespace` is `-`.
    #[inline]
    pub fn is_ignored(&self, namespace: &str) -> bool {
        self.tag(namespace).is_some_and(TagSpec::is_ignored)
    }
}
