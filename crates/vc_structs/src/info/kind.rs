use core::fmt;

/// The shape of a reflected value.
///
/// Every [`Reflect`](crate::Reflect) value reports exactly one kind. The
/// encoder only ever branches on kinds, never on concrete types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    /// Signed integers of any width.
    Int,
    /// Unsigned integers of any width.
    Uint,
    Float,
    String,
    /// A nullable indirection, `Option<T>`.
    Pointer,
    /// A dynamically typed slot, [`Value`](crate::Value).
    Interface,
    /// A record with named fields.
    Struct,
    Slice,
    Array,
    Map,
    /// A leaf value whose contents are not inspected.
    Opaque,
}

impl Kind {
    /// Returns `true` for `Bool`, `Int`, `Uint`, `Float` and `String`.
    #[inline]
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::Bool | Self::Int | Self::Uint | Self::Float | Self::String
        )
    }

    /// Returns `true` for `Int`, `Uint` and `Float`.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Uint | Self::Float)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.pad("bool"),
            Self::Int => f.pad("int"),
            Self::Uint => f.pad("uint"),
            Self::Float => f.pad("float"),
            Self::String => f.pad("string"),
            Self::Pointer => f.pad("ptr"),
            Self::Interface => f.pad("interface"),
            Self::Struct => f.pad("struct"),
            Self::Slice => f.pad("slice"),
            Self::Array => f.pad("array"),
            Self::Map => f.pad("map"),
            Self::Opaque => f.pad("opaque"),
        }
    }
}
