use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::info::{Kind, TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef};
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Numbers

macro_rules! impl_reflect_number {
    ($kind:ident as $wide:ty: $($ty:ty),+ $(,)?) => {$(
        impl Typed for $ty {
            #[inline]
            fn type_info() -> TypeInfo {
                TypeInfo::new::<Self>(Kind::$kind)
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!();

            #[inline]
            fn reflect_kind(&self) -> Kind {
                Kind::$kind
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::$kind(*self as $wide)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Other(self)
            }

            #[inline]
            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                Some(other.downcast_ref::<Self>().is_some_and(|other| self == other))
            }

            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }
    )+};
}

impl_reflect_number!(Int as i64: i8, i16, i32, i64, isize);
impl_reflect_number!(Uint as u64: u8, u16, u32, u64, usize);
impl_reflect_number!(Float as f64: f32, f64);

// -----------------------------------------------------------------------------
// bool

impl Typed for bool {
    #[inline]
    fn type_info() -> TypeInfo {
        TypeInfo::new::<Self>(Kind::Bool)
    }
}

impl Reflect for bool {
    impl_reflect_cast_fn!();

    #[inline]
    fn reflect_kind(&self) -> Kind {
        Kind::Bool
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Bool(*self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Other(self)
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        Some(other.downcast_ref::<Self>().is_some_and(|other| self == other))
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// Strings

macro_rules! impl_reflect_string {
    ($($ty:ty),+ $(,)?) => {$(
        impl Typed for $ty {
            #[inline]
            fn type_info() -> TypeInfo {
                TypeInfo::new::<Self>(Kind::String)
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!();

            #[inline]
            fn reflect_kind(&self) -> Kind {
                Kind::String
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::String(self.as_ref())
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Other(self)
            }

            #[inline]
            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                Some(other.downcast_ref::<Self>().is_some_and(|other| self == other))
            }

            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }
    )+};
}

impl_reflect_string!(String, &'static str, Cow<'static, str>);

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::Kind;
    use crate::ops::ReflectRef;

    #[test]
    fn numbers_widen() {
        assert!(matches!((-3_i8).reflect_ref(), ReflectRef::Int(-3)));
        assert!(matches!(200_u8.reflect_ref(), ReflectRef::Uint(200)));
        assert!(matches!(1.5_f32.reflect_ref(), ReflectRef::Float(v) if v == 1.5));
        assert_eq!(7_usize.reflect_kind(), Kind::Uint);
    }

    #[test]
    fn strings_share_a_kind() {
        let values: [&dyn Reflect; 3] = [&String::from("a"), &"a", &Cow::Borrowed("a")];
        for value in values {
            assert_eq!(value.reflect_kind(), Kind::String);
            assert!(matches!(value.reflect_ref(), ReflectRef::String("a")));
        }
    }

    #[test]
    fn zero_values() {
        let mut text = String::from("text");
        text.set_zero();
        assert!(text.is_empty());
        assert!(text.reflect_is_zero());

        let mut flag = true;
        flag.set_zero();
        assert!(!flag);
    }
}
