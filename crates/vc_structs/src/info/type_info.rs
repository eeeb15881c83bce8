use core::fmt;

use crate::info::Kind;

// -----------------------------------------------------------------------------
// TypeInfo

/// Static description of a reflected type.
///
/// Containers also describe their element (`item`) and, for maps, their key.
/// The encoder uses these to decide whether to recurse into a collection
/// without looking at its elements, so an empty `Vec<Record>` is treated the
/// same as a full one.
///
/// Nested descriptors are stored as function pointers, which keeps the type
/// `Copy` and lets recursive types describe themselves.
///
/// # Examples
///
/// ```
/// use vc_structs::info::{Kind, Typed};
///
/// let info = <Vec<Option<u8>>>::type_info();
/// assert_eq!(info.kind(), Kind::Slice);
///
/// let item = info.item().unwrap();
/// assert_eq!(item.kind(), Kind::Pointer);
/// assert_eq!(item.item().unwrap().kind(), Kind::Uint);
/// ```
#[derive(Clone, Copy)]
pub struct TypeInfo {
    kind: Kind,
    type_path: fn() -> &'static str,
    item: Option<fn() -> TypeInfo>,
    key: Option<fn() -> TypeInfo>,
}

impl TypeInfo {
    /// Creates a descriptor of `T` with the given kind.
    #[inline]
    pub const fn new<T: ?Sized>(kind: Kind) -> Self {
        Self {
            kind,
            type_path: core::any::type_name::<T>,
            item: None,
            key: None,
        }
    }

    /// Sets the element descriptor (pointee, list element or map value).
    #[inline]
    pub const fn with_item<T: Typed>(mut self) -> Self {
        self.item = Some(T::type_info);
        self
    }

    /// Sets the key descriptor of a map.
    #[inline]
    pub const fn with_key<K: Typed>(mut self) -> Self {
        self.key = Some(K::type_info);
        self
    }

    #[inline]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the full type name, e.g. `alloc::vec::Vec<u8>`.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        (self.type_path)()
    }

    /// Returns the element descriptor, if the type has one.
    #[inline]
    pub fn item(&self) -> Option<TypeInfo> {
        self.item.map(|item| item())
    }

    /// Returns the key descriptor, if the type is a map.
    #[inline]
    pub fn key(&self) -> Option<TypeInfo> {
        self.key.map(|key| key())
    }

    /// Returns `true` if the type is a record.
    #[inline]
    pub const fn is_record(&self) -> bool {
        matches!(self.kind, Kind::Struct)
    }

    /// Returns `true` if the type is a record or a pointer to a record.
    pub fn is_record_or_pointer(&self) -> bool {
        match self.kind {
            Kind::Struct => true,
            Kind::Pointer => self.item().is_some_and(|item| item.is_record()),
            _ => false,
        }
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("kind", &self.kind)
            .field("type_path", &self.type_path())
            .field("item", &self.item())
            .field("key", &self.key())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented automatically by `#[derive(Record)]` and
/// [`impl_reflect_opaque!`](crate::impl_reflect_opaque).
pub trait Typed: 'static {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> TypeInfo;
}

/// Dynamic dispatch for [`Typed`].
///
/// Blanket-implemented for every [`Typed`] type, do not implement it manually.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> TypeInfo {
        T::type_info()
    }
}
