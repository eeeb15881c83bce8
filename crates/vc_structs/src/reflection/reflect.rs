use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::impls;
use crate::info::{DynamicTyped, Kind};
use crate::ops::{Record, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The core trait of the crate: dynamic access to a value's shape.
///
/// Every type the encoder can walk implements `Reflect`. It exposes the
/// value's [`Kind`], a borrowed view of its contents ([`ReflectRef`] /
/// [`ReflectMut`]) and a few type-erased operations (replace, reset to zero,
/// clone, compare).
///
/// Implementations are provided for primitives, strings, `Option<T>`, `Box<T>`,
/// `Vec<T>`, `VecDeque<T>`, `[T; N]`, maps and [`Value`](crate::Value).
/// Records implement it with `#[derive(Record)]`, leaf types with
/// [`impl_reflect_opaque!`](crate::impl_reflect_opaque).
///
/// # Examples
///
/// ```
/// use vc_structs::{Reflect, info::Kind, ops::ReflectRef};
///
/// let value: &dyn Reflect = &Some(12_u8);
/// assert_eq!(value.reflect_kind(), Kind::Pointer);
///
/// let ReflectRef::Pointer(Some(inner)) = value.reflect_ref() else {
///     unreachable!()
/// };
/// assert!(matches!(inner.reflect_ref(), ReflectRef::Uint(12)));
/// ```
pub trait Reflect: DynamicTyped + Send + Sync + Any {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Boxes the value as a reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    ///
    /// Unlike [`Any::type_id`], this cannot be accidentally called on
    /// `Box<dyn Reflect>` itself.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the full type name of the underlying type.
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        self.reflect_type_info().type_path()
    }

    /// Returns the [`Kind`] of the value.
    fn reflect_kind(&self) -> Kind;

    /// Returns an immutable view of the value's contents.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable view of the value's contents.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Replaces `self` with `value`.
    ///
    /// `value` is handed back untouched if its type is not `Self`.
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Resets the value to the zero value of its type.
    fn set_zero(&mut self);

    /// Clones the value into a new box of the same type.
    fn reflect_clone(&self) -> Box<dyn Reflect>;

    /// Whether the value equals the zero value of its type.
    ///
    /// Records compare every field (exported or not), arrays every element,
    /// and a non-nil pointer is never zero.
    #[inline]
    fn reflect_is_zero(&self) -> bool {
        impls::is_zero_value(self)
    }

    /// Compares two reflected values structurally.
    ///
    /// Returns `None` if the comparison is not supported.
    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        impls::partial_eq(self, other)
    }

    /// Debug formatter for the value.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        impls::debug(self, f)
    }

    /// Returns the [`Display`](fmt::Display) capability of the value, if it has one.
    ///
    /// Used by the `string` tag option for values that are not scalars.
    #[inline]
    fn as_display(&self) -> Option<&dyn fmt::Display> {
        None
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// Returns the original box if the types do not match.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type is already checked"),
        }
    }

    /// Downcasts the value to type `T`, moving it out of the box.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }

    /// Follows non-nil pointers down to a record.
    pub fn resolve_record(&self) -> Option<&dyn Record> {
        match self.reflect_ref() {
            ReflectRef::Struct(record) => Some(record),
            ReflectRef::Pointer(Some(inner)) => inner.resolve_record(),
            _ => None,
        }
    }

    /// Mutable counterpart of [`resolve_record`](Self::resolve_record).
    pub fn resolve_record_mut(&mut self) -> Option<&mut dyn Record> {
        match self.reflect_mut() {
            ReflectMut::Struct(record) => Some(record),
            ReflectMut::Pointer(Some(inner)) => inner.resolve_record_mut(),
            _ => None,
        }
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements `set`, `set_zero` and `reflect_clone` for `Clone + Default` types.
macro_rules! impl_reflect_cast_fn {
    () => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = <dyn $crate::Reflect>::take::<Self>(value)?;
            Ok(())
        }

        #[inline]
        fn set_zero(&mut self) {
            *self = <Self as ::core::default::Default>::default();
        }

        #[inline]
        fn reflect_clone(&self) -> ::alloc::boxed::Box<dyn $crate::Reflect> {
            ::alloc::boxed::Box::new(::core::clone::Clone::clone(self))
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::Reflect;

    #[test]
    fn downcast_and_take() {
        let value: Box<dyn Reflect> = Box::new(String::from("hello"));
        assert!(value.is::<String>());
        assert!(!value.is::<i32>());
        assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("hello"));

        let value = value.take::<i32>().unwrap_err();
        assert_eq!(value.take::<String>().unwrap(), "hello");
    }

    #[test]
    fn set_rejects_other_types() {
        let mut value = 5_i32;
        let rejected = value.set(Box::new(7_u8)).unwrap_err();
        assert_eq!(value, 5);
        assert!(rejected.is::<u8>());

        value.set(Box::new(7_i32)).unwrap();
        assert_eq!(value, 7);

        value.set_zero();
        assert_eq!(value, 0);
    }
}
