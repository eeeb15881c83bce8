use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Reflect;
use crate::impls::clone_value;
use crate::info::{Kind, TypeInfo, Typed};
use crate::ops::{List, ListItemIter, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Vec & VecDeque

// The list accessors are spelled out through inherent paths: inside these
// impls a plain `self.get(..)` or `self.iter()` would resolve to `List`.
macro_rules! impl_reflect_slice {
    ($ty:ident, get: $get:expr, iter: $iter:expr) => {
        impl<T: Reflect + Typed> Typed for $ty<T> {
            #[inline]
            fn type_info() -> TypeInfo {
                TypeInfo::new::<Self>(Kind::Slice).with_item::<T>()
            }
        }

        impl<T: Reflect + Typed> List for $ty<T> {
            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                ($get)(self, index).map(|item: &T| item as &dyn Reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                <$ty<T>>::len(self)
            }

            #[inline]
            fn item_info(&self) -> TypeInfo {
                T::type_info()
            }

            #[inline]
            fn iter(&self) -> ListItemIter<'_> {
                ListItemIter::new(self)
            }
        }

        impl<T: Reflect + Typed> Reflect for $ty<T> {
            #[inline]
            fn reflect_kind(&self) -> Kind {
                Kind::Slice
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::List(self)
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
                <$ty<T>>::clear(self);
            }

            fn reflect_clone(&self) -> Box<dyn Reflect> {
                let list: $ty<T> = ($iter)(self).map(clone_value).collect();
                Box::new(list)
            }
        }
    };
}

impl_reflect_slice!(Vec, get: <[T]>::get::<usize>, iter: <[T]>::iter);
impl_reflect_slice!(VecDeque, get: <VecDeque<T>>::get, iter: <VecDeque<T>>::iter);

// -----------------------------------------------------------------------------
// Array

impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
    #[inline]
    fn type_info() -> TypeInfo {
        TypeInfo::new::<Self>(Kind::Array).with_item::<T>()
    }
}

impl<T: Reflect + Typed, const N: usize> List for [T; N] {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|item| item as &dyn Reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn item_info(&self) -> TypeInfo {
        T::type_info()
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    #[inline]
    fn reflect_kind(&self) -> Kind {
        Kind::Array
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Array(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Other(self)
    }

    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    fn set_zero(&mut self) {
        for item in <[T]>::iter_mut(self) {
            item.set_zero();
        }
    }

    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(core::array::from_fn::<T, N, _>(|index| clone_value(&self[index])))
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::Kind;
    use crate::ops::{List, ReflectRef};

    #[test]
    fn slices_and_arrays() {
        let list = vec![1_u8, 2, 3];
        assert_eq!(list.reflect_kind(), Kind::Slice);
        assert_eq!(List::len(&list), 3);

        let deque = VecDeque::from(list);
        let ReflectRef::List(items) = deque.reflect_ref() else {
            panic!("expected a slice");
        };
        let collected: Vec<u8> = items
            .iter()
            .filter_map(|item| item.downcast_ref::<u8>().copied())
            .collect();
        assert_eq!(collected, [1, 2, 3]);

        let mut array = [4_i32, 5];
        assert_eq!(array.reflect_kind(), Kind::Array);
        array.set_zero();
        assert_eq!(array, [0, 0]);
    }

    #[test]
    fn clone_keeps_elements() {
        let list = vec![Some(1_i32), None];
        let cloned = list.reflect_clone().take::<Vec<Option<i32>>>().unwrap();
        assert_eq!(cloned, list);
    }
}
