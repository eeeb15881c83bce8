use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::impls::clone_value;
use crate::info::{Kind, TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Option

impl<T: Reflect + Typed> Typed for Option<T> {
    #[inline]
    fn type_info() -> TypeInfo {
        TypeInfo::new::<Self>(Kind::Pointer).with_item::<T>()
    }
}

/// `Option<T>` is a nullable pointer: `None` is nil.
impl<T: Reflect + Typed> Reflect for Option<T> {
    #[inline]
    fn reflect_kind(&self) -> Kind {
        Kind::Pointer
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self.as_ref().map(|value| value as &dyn Reflect))
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(self.as_mut().map(|value| value as &mut dyn Reflect))
    }

    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    #[inline]
    fn set_zero(&mut self) {
        *self = None;
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.as_ref().map(clone_value))
    }
}

// -----------------------------------------------------------------------------
// Box

impl<T: Reflect + Typed> Typed for Box<T> {
    #[inline]
    fn type_info() -> TypeInfo {
        T::type_info()
    }
}

/// `Box<T>` is transparent: it reports the kind and contents of `T`.
///
/// [`set`](Reflect::set) accepts either a `Box<T>` or a bare `T`.
impl<T: Reflect + Typed> Reflect for Box<T> {
    #[inline]
    fn reflect_kind(&self) -> Kind {
        (**self).reflect_kind()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        (**self).reflect_ref()
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        (**self).reflect_mut()
    }

    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        if value.is::<T>() {
            **self = value.take::<T>()?;
        } else {
            *self = value.take::<Self>()?;
        }
        Ok(())
    }

    #[inline]
    fn set_zero(&mut self) {
        (**self).set_zero();
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(Box::new(clone_value::<T>(self)))
    }

    #[inline]
    fn reflect_is_zero(&self) -> bool {
        (**self).reflect_is_zero()
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        match other.downcast_ref::<Self>() {
            Some(other) => (**self).reflect_partial_eq(&**other),
            None => Some(false),
        }
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).reflect_debug(f)
    }

    #[inline]
    fn as_display(&self) -> Option<&dyn fmt::Display> {
        (**self).as_display()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use crate::Reflect;
    use crate::info::Kind;
    use crate::ops::{ReflectMut, ReflectRef};

    #[test]
    fn option_is_a_pointer() {
        let mut value = Some(3_i32);
        assert_eq!(value.reflect_kind(), Kind::Pointer);

        let ReflectMut::Pointer(Some(inner)) = value.reflect_mut() else {
            panic!("expected a non-nil pointer");
        };
        inner.set(Box::new(4_i32)).unwrap();
        assert_eq!(value, Some(4));

        value.set_zero();
        assert!(matches!(value.reflect_ref(), ReflectRef::Pointer(None)));
    }

    #[test]
    fn box_is_transparent() {
        let mut value = Box::new(5_u16);
        assert_eq!(value.reflect_kind(), Kind::Uint);

        value.set(Box::new(6_u16)).unwrap();
        assert_eq!(*value, 6);

        value.set(Box::new(Box::new(7_u16))).unwrap();
        assert_eq!(*value, 7);
    }
}
