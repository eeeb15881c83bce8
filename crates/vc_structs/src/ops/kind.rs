use crate::Reflect;
use crate::info::Kind;
use crate::ops::{List, Map, Record};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable view of a reflected value's contents.
///
/// Scalars are read out directly, integers widened to 64 bits.
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(&'a str),
    /// `None` is a nil pointer.
    Pointer(Option<&'a dyn Reflect>),
    /// `None` is a nil interface.
    Interface(Option<&'a dyn Reflect>),
    Struct(&'a dyn Record),
    List(&'a dyn List),
    Array(&'a dyn List),
    Map(&'a dyn Map),
    Opaque(&'a dyn Reflect),
}

impl ReflectRef<'_> {
    /// Returns the [`Kind`] of the viewed value.
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Uint(_) => Kind::Uint,
            Self::Float(_) => Kind::Float,
            Self::String(_) => Kind::String,
            Self::Pointer(_) => Kind::Pointer,
            Self::Interface(_) => Kind::Interface,
            Self::Struct(_) => Kind::Struct,
            Self::List(_) => Kind::Slice,
            Self::Array(_) => Kind::Array,
            Self::Map(_) => Kind::Map,
            Self::Opaque(_) => Kind::Opaque,
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable view of a reflected value's contents.
///
/// Only records and pointers need mutable traversal; every other value is
/// handed out as a whole.
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Record),
    /// `None` is a nil pointer.
    Pointer(Option<&'a mut dyn Reflect>),
    Other(&'a mut dyn Reflect),
}
