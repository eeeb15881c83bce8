//! Typed projections over slices and arrays.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::Reflect;
use crate::error::StructError;
use crate::field;
use crate::ops::{List, ReflectRef};
use crate::stringify;

// -----------------------------------------------------------------------------
// Number

/// A numeric type a projection can produce.
///
/// Conversions use `as`: floats are truncated toward zero and out-of-range
/// values saturate or wrap the way `as` does.
pub trait Number: Copy {
    fn from_i64(value: i64) -> Self;
    fn from_u64(value: u64) -> Self;
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_number {
    ($($ty:ty),+ $(,)?) => {$(
        impl Number for $ty {
            #[inline]
            fn from_i64(value: i64) -> Self {
                value as $ty
            }

            #[inline]
            fn from_u64(value: u64) -> Self {
                value as $ty
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }
        }
    )+};
}

impl_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

// -----------------------------------------------------------------------------
// StructSlice

/// A slice or array read element by element.
///
/// The `*_field` projections read one exported field of every element, which
/// must be a record (or a non-nil pointer to one). The element projections read the
/// elements themselves. Every projection fails on the first element that does
/// not fit, naming its index.
///
/// # Examples
///
/// ```
/// use vc_structs::{StructSlice, derive::Record};
///
/// #[derive(Record)]
/// struct User {
///     pub id: u32,
///     pub name: String,
/// }
///
/// let users = vec![
///     User { id: 1, name: "ann".into() },
///     User { id: 2, name: "bob".into() },
/// ];
///
/// let slice = StructSlice::new(&users).unwrap();
/// assert_eq!(slice.int_field("id").unwrap(), [1, 2]);
/// assert_eq!(slice.string_field("name").unwrap(), ["ann", "bob"]);
/// assert!(slice.int_field("name").is_err());
///
/// let ratios = [0.5_f32, 2.0];
/// let slice = StructSlice::new(&ratios).unwrap();
/// assert_eq!(slice.numbers::<u8>().unwrap(), [0, 2]);
/// assert_eq!(slice.strings().unwrap(), ["0.5", "2"]);
/// ```
#[derive(Clone, Copy)]
pub struct StructSlice<'a> {
    list: &'a dyn List,
}

impl<'a> StructSlice<'a> {
    /// Wraps a slice or array, following one pointer level.
    ///
    /// Fails with [`StructError::NotASlice`] for anything else, nil pointers
    /// included.
    pub fn new(value: &'a dyn Reflect) -> Result<Self, StructError> {
        let target = match value.reflect_ref() {
            ReflectRef::Pointer(Some(inner)) => inner,
            _ => value,
        };
        match target.reflect_ref() {
            ReflectRef::List(list) | ReflectRef::Array(list) => Ok(Self { list }),
            _ => Err(StructError::NotASlice {
                type_path: value.reflect_type_path(),
            }),
        }
    }

    /// Returns the type name of the collection.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.list.reflect_type_path()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    // -------------------------------------------------------------------------
    // Field projections

    /// Reads a numeric field of every element as `i64`.
    #[inline]
    pub fn int_field(&self, name: &str) -> Result<Vec<i64>, StructError> {
        self.number_field(name)
    }

    /// Reads a numeric field of every element as `u64`.
    #[inline]
    pub fn uint_field(&self, name: &str) -> Result<Vec<u64>, StructError> {
        self.number_field(name)
    }

    /// Reads a numeric field of every element as `N`.
    pub fn number_field<N: Number>(&self, name: &str) -> Result<Vec<N>, StructError> {
        self.project_field(name, to_number)
    }

    /// Reads a numeric or string field of every element as text.
    pub fn string_field(&self, name: &str) -> Result<Vec<String>, StructError> {
        self.project_field(name, to_text)
    }

    fn project_field<T>(
        &self,
        name: &str,
        convert: impl Fn(usize, &dyn Reflect) -> Result<T, StructError>,
    ) -> Result<Vec<T>, StructError> {
        self.list
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let record = item.resolve_record().ok_or(StructError::ElementNotStruct {
                    index,
                    type_path: item.reflect_type_path(),
                })?;
                let (info, value) = field::lookup(record, name).ok_or_else(|| {
                    StructError::FieldNotFound {
                        name: name.to_string(),
                        index,
                    }
                })?;
                if !info.is_exported() {
                    return Err(StructError::FieldNotExported {
                        name: name.to_string(),
                        index,
                    });
                }
                convert(index, value)
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Element projections

    /// Reads every element as `N`, following one pointer level.
    pub fn numbers<N: Number>(&self) -> Result<Vec<N>, StructError> {
        self.project(to_number)
    }

    /// Reads every element as text, following one pointer level.
    pub fn strings(&self) -> Result<Vec<String>, StructError> {
        self.project(to_text)
    }

    fn project<T>(
        &self,
        convert: impl Fn(usize, &dyn Reflect) -> Result<T, StructError>,
    ) -> Result<Vec<T>, StructError> {
        self.list
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let item = match item.reflect_ref() {
                    ReflectRef::Pointer(Some(inner)) => inner,
                    _ => item,
                };
                convert(index, item)
            })
            .collect()
    }
}

impl fmt::Debug for StructSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructSlice")
            .field("type_path", &self.type_path())
            .field("len", &self.len())
            .finish()
    }
}

fn to_number<N: Number>(index: usize, value: &dyn Reflect) -> Result<N, StructError> {
    match value.reflect_ref() {
        ReflectRef::Int(v) => Ok(N::from_i64(v)),
        ReflectRef::Uint(v) => Ok(N::from_u64(v)),
        ReflectRef::Float(v) => Ok(N::from_f64(v)),
        other => Err(StructError::NotNumeric {
            index,
            kind: other.kind(),
        }),
    }
}

fn to_text(index: usize, value: &dyn Reflect) -> Result<String, StructError> {
    let not_stringable = |kind| StructError::NotStringable { index, kind };
    match value.reflect_ref() {
        ReflectRef::String(v) => Ok(v.into()),
        ReflectRef::Int(_) | ReflectRef::Uint(_) | ReflectRef::Float(_) => {
            stringify::scalar_to_string(value).ok_or(not_stringable(value.reflect_kind()))
        }
        other => Err(not_stringable(other.kind())),
    }
}
