use core::time::Duration;

/// Implements [`Reflect`](crate::Reflect) and [`Typed`](crate::info::Typed)
/// for a leaf type whose contents the encoder should not inspect.
///
/// The type must implement `Clone`, `Default`, `PartialEq` and `Debug`, and be
/// `Send + Sync + 'static`. Its zero value is `Default::default()`.
///
/// Pass `display` to let the `string` tag option render the value through its
/// [`Display`](core::fmt::Display) implementation.
///
/// Encoded opaque values end up as [`Value::Opaque`](crate::Value::Opaque).
///
/// # Examples
///
/// ```
/// use core::fmt;
/// use vc_structs::{Reflect, impl_reflect_opaque, info::Kind};
///
/// #[derive(Clone, Default, PartialEq, Debug)]
/// struct Timestamp(u64);
///
/// impl fmt::Display for Timestamp {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "@{}", self.0)
///     }
/// }
///
/// impl_reflect_opaque!(Timestamp, display);
///
/// assert_eq!(Timestamp(3).reflect_kind(), Kind::Opaque);
/// assert!(Timestamp(0).reflect_is_zero());
/// assert_eq!(Timestamp(3).as_display().unwrap().to_string(), "@3");
/// ```
#[macro_export]
macro_rules! impl_reflect_opaque {
    (@impl $ty:ty { $($extra:tt)* }) => {
        impl $crate::info::Typed for $ty {
            #[inline]
            fn type_info() -> $crate::info::TypeInfo {
                $crate::info::TypeInfo::new::<Self>($crate::info::Kind::Opaque)
            }
        }

        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> $crate::info::Kind {
                $crate::info::Kind::Opaque
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                $crate::ops::ReflectRef::Opaque(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
                $crate::ops::ReflectMut::Other(self)
            }

            fn set(
                &mut self,
                value: $crate::__macro_exports::Box<dyn $crate::Reflect>,
            ) -> ::core::result::Result<(), $crate::__macro_exports::Box<dyn $crate::Reflect>> {
                *self = <dyn $crate::Reflect>::take::<Self>(value)?;
                ::core::result::Result::Ok(())
            }

            #[inline]
            fn set_zero(&mut self) {
                *self = <Self as ::core::default::Default>::default();
            }

            #[inline]
            fn reflect_clone(&self) -> $crate::__macro_exports::Box<dyn $crate::Reflect> {
                $crate::__macro_exports::Box::new(<Self as ::core::clone::Clone>::clone(self))
            }

            #[inline]
            fn reflect_is_zero(&self) -> bool {
                *self == <Self as ::core::default::Default>::default()
            }

            fn reflect_partial_eq(
                &self,
                other: &dyn $crate::Reflect,
            ) -> ::core::option::Option<bool> {
                ::core::option::Option::Some(
                    <dyn $crate::Reflect>::downcast_ref::<Self>(other)
                        .is_some_and(|other| self == other),
                )
            }

            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }

            $($extra)*
        }
    };
    ($ty:ty, display) => {
        $crate::impl_reflect_opaque!(@impl $ty {
            #[inline]
            fn as_display(&self) -> ::core::option::Option<&dyn ::core::fmt::Display> {
                ::core::option::Option::Some(self)
            }
        });
    };
    ($ty:ty) => {
        $crate::impl_reflect_opaque!(@impl $ty {});
    };
}

crate::impl_reflect_opaque!(char, display);
crate::impl_reflect_opaque!(i128, display);
crate::impl_reflect_opaque!(u128, display);
crate::impl_reflect_opaque!(());
crate::impl_reflect_opaque!(Duration);

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::time::Duration;

    use crate::Reflect;
    use crate::info::Kind;

    #[test]
    fn opaque_zero_is_default() {
        assert!(Duration::ZERO.reflect_is_zero());
        assert!(!Duration::from_secs(1).reflect_is_zero());
        assert!('\0'.reflect_is_zero());
        assert_eq!('x'.reflect_kind(), Kind::Opaque);
        assert!('x'.as_display().is_some());
        assert!(Duration::ZERO.as_display().is_none());
    }

    #[test]
    fn wide_integers_keep_every_bit() {
        let big = 1_i128 << 64;
        assert_eq!(big.reflect_kind(), Kind::Opaque);
        assert!(!big.reflect_is_zero());
        assert!(0_u128.reflect_is_zero());
        assert_eq!(
            big.as_display().map(|v| v.to_string()).as_deref(),
            Some("18446744073709551616"),
        );
    }
}
