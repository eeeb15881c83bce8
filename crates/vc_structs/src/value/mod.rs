//! The dynamically typed output of the encoder.
//!
//! A [`Value`] is a one-way snapshot: it owns its data and keeps no link to
//! the record it came from.

// -----------------------------------------------------------------------------
// Modules

mod hash;
mod ser;

// -----------------------------------------------------------------------------
// Exports

pub use hash::{FixedHashState, FixedHasher};

use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::Reflect;
use crate::info::{Kind, TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef};
use crate::stringify;

/// String-keyed map of encoded values. Key order is unspecified.
pub type ValueMap = HashMap<String, Value, FixedHashState>;

// -----------------------------------------------------------------------------
// Value

/// A dynamically typed value produced by the encoder.
///
/// Scalars keep their 64-bit representation, nested records become
/// [`Map`](Value::Map)s, and values the encoder does not unpack are kept as
/// [`Opaque`](Value::Opaque) clones.
///
/// # Examples
///
/// ```
/// use vc_structs::Value;
///
/// let value = Value::from(vec![Value::from(1_i32), Value::from("two")]);
///
/// let list = value.as_list().unwrap();
/// assert_eq!(list[0].as_i64(), Some(1));
/// assert_eq!(list[1].as_str(), Some("two"));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// A nil pointer or interface.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(ValueMap),
    /// A leaf value kept as-is: records without visible fields, opaque types,
    /// and maps whose keys cannot be turned into strings.
    Opaque(OpaqueValue),
}

impl Value {
    /// Takes a raw snapshot of a reflected value, without consulting tags.
    ///
    /// - scalars become the matching scalar variant;
    /// - nil pointers and interfaces become [`Null`](Value::Null), others
    ///   are followed;
    /// - slices and arrays become lists;
    /// - maps whose keys are scalars become [`Map`](Value::Map)s;
    /// - records, opaque values and other maps become
    ///   [`Opaque`](Value::Opaque) clones;
    /// - a [`Value`] is cloned as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use vc_structs::Value;
    ///
    /// let mut scores = BTreeMap::new();
    /// scores.insert(7_u8, Some(true));
    /// scores.insert(8_u8, None);
    ///
    /// let Value::Map(map) = Value::snapshot(&scores) else {
    ///     unreachable!()
    /// };
    /// assert_eq!(map["7"], Value::Bool(true));
    /// assert_eq!(map["8"], Value::Null);
    /// ```
    pub fn snapshot(value: &dyn Reflect) -> Value {
        if let Some(value) = value.downcast_ref::<Value>() {
            return value.clone();
        }

        match value.reflect_ref() {
            ReflectRef::Bool(v) => Value::Bool(v),
            ReflectRef::Int(v) => Value::Int(v),
            ReflectRef::Uint(v) => Value::Uint(v),
            ReflectRef::Float(v) => Value::Float(v),
            ReflectRef::String(v) => Value::String(v.to_owned()),
            ReflectRef::Pointer(None) | ReflectRef::Interface(None) => Value::Null,
            ReflectRef::Pointer(Some(inner)) | ReflectRef::Interface(Some(inner)) => {
                Value::snapshot(inner)
            }
            ReflectRef::List(list) | ReflectRef::Array(list) => {
                Value::List(list.iter().map(Value::snapshot).collect())
            }
            ReflectRef::Map(map) => {
                let mut entries = ValueMap::with_capacity_and_hasher(map.len(), FixedHashState);
                for (key, value) in map.iter() {
                    match stringify::scalar_to_string(key) {
                        Some(key) => {
                            entries.insert(key, Value::snapshot(value));
                        }
                        None => return Value::Opaque(OpaqueValue::from_reflect(map)),
                    }
                }
                Value::Map(entries)
            }
            ReflectRef::Struct(_) | ReflectRef::Opaque(_) => {
                Value::Opaque(OpaqueValue::from_reflect(value))
            }
        }
    }

    /// Returns the [`Kind`] this value would report through [`Reflect`].
    ///
    /// [`Null`](Value::Null) reports `Interface`.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Interface,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::List(_) => Kind::Slice,
            Value::Map(_) => Kind::Map,
            Value::Opaque(value) => value.as_reflect().reflect_kind(),
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as `i64`, converting unsigned values that fit.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Uint(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Returns the value as `u64`, converting non-negative signed values.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Uint(v) => Some(*v),
            Value::Int(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_opaque(&self) -> Option<&OpaqueValue> {
        match self {
            Value::Opaque(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! impl_from_number {
    ($variant:ident as $wide:ty: $($ty:ty),+) => {$(
        impl From<$ty> for Value {
            #[inline]
            fn from(value: $ty) -> Self {
                Value::$variant(value as $wide)
            }
        }
    )+};
}

impl_from_number!(Int as i64: i8, i16, i32, i64, isize);
impl_from_number!(Uint as u64: u8, u16, u32, u64, usize);
impl_from_number!(Float as f64: f32, f64);

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<ValueMap> for Value {
    #[inline]
    fn from(value: ValueMap) -> Self {
        Value::Map(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl Typed for Value {
    #[inline]
    fn type_info() -> TypeInfo {
        TypeInfo::new::<Self>(Kind::Interface)
    }
}

/// A [`Value`] is an interface: it reports the value it holds, `Null` is nil.
impl Reflect for Value {
    #[inline]
    fn reflect_kind(&self) -> Kind {
        Kind::Interface
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        let inner: Option<&dyn Reflect> = match self {
            Value::Null => None,
            Value::Bool(v) => Some(v),
            Value::Int(v) => Some(v),
            Value::Uint(v) => Some(v),
            Value::Float(v) => Some(v),
            Value::String(v) => Some(v),
            Value::List(v) => Some(v),
            Value::Map(v) => Some(v),
            Value::Opaque(v) => Some(v.as_reflect()),
        };
        ReflectRef::Interface(inner)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Other(self)
    }

    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    #[inline]
    fn set_zero(&mut self) {
        *self = Value::Null;
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        Some(other.downcast_ref::<Self>().is_some_and(|other| self == other))
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// OpaqueValue

/// A shared, type-erased clone of a reflected value.
///
/// Equality is structural where the type supports it (through
/// [`Reflect::reflect_partial_eq`]) and falls back to identity otherwise.
#[derive(Clone)]
pub struct OpaqueValue(Arc<dyn Reflect>);

impl OpaqueValue {
    /// Wraps an owned reflected value.
    #[inline]
    pub fn new(value: Box<dyn Reflect>) -> Self {
        Self(Arc::from(value))
    }

    /// Clones a reflected value and wraps the clone.
    #[inline]
    pub fn from_reflect(value: &dyn Reflect) -> Self {
        Self::new(value.reflect_clone())
    }

    #[inline]
    pub fn as_reflect(&self) -> &dyn Reflect {
        &*self.0
    }

    /// Downcasts the wrapped value to `T`.
    #[inline]
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        self.as_reflect().downcast_ref::<T>()
    }

    /// Returns the full type name of the wrapped value.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.0.reflect_type_path()
    }
}

impl fmt::Debug for OpaqueValue {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.reflect_debug(f)
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        self.0
            .reflect_partial_eq(other.as_reflect())
            .unwrap_or_else(|| Arc::ptr_eq(&self.0, &other.0))
    }
}
