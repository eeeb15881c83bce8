use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::hash::{BuildHasher, Hash};

use hashbrown::HashMap as HashbrownMap;
#[cfg(feature = "std")]
use std::collections::HashMap as StdHashMap;

use crate::Reflect;
use crate::impls::clone_value;
use crate::info::{Kind, TypeInfo, Typed};
use crate::ops::{Map, MapIter, ReflectMut, ReflectRef};

// Same as the list impls: inherent paths keep `Map::iter`/`Map::len` out of the way.
macro_rules! impl_reflect_map {
    ($ty:ident <K, V $(, $s:ident)?> where K: $($key_bound:path),+ $(; $sb:ident: $($s_bound:path),+)?) => {
        impl<K, V $(, $s)?> Typed for $ty<K, V $(, $s)?>
        where
            K: Reflect + Typed $(+ $key_bound)+,
            V: Reflect + Typed,
            $($sb: 'static $(+ $s_bound)+,)?
        {
            #[inline]
            fn type_info() -> TypeInfo {
                TypeInfo::new::<Self>(Kind::Map)
                    .with_key::<K>()
                    .with_item::<V>()
            }
        }

        impl<K, V $(, $s)?> Map for $ty<K, V $(, $s)?>
        where
            K: Reflect + Typed $(+ $key_bound)+,
            V: Reflect + Typed,
            $($sb: 'static $(+ $s_bound)+,)?
        {
            #[inline]
            fn len(&self) -> usize {
                <$ty<K, V $(, $s)?>>::len(self)
            }

            fn iter(&self) -> MapIter<'_> {
                Box::new(
                    <$ty<K, V $(, $s)?>>::iter(self)
                        .map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)),
                )
            }

            #[inline]
            fn key_info(&self) -> TypeInfo {
                K::type_info()
            }

            #[inline]
            fn value_info(&self) -> TypeInfo {
                V::type_info()
            }
        }

        impl<K, V $(, $s)?> Reflect for $ty<K, V $(, $s)?>
        where
            K: Reflect + Typed $(+ $key_bound)+,
            V: Reflect + Typed,
            $($sb: 'static $(+ $s_bound)+,)?
        {
            #[inline]
            fn reflect_kind(&self) -> Kind {
                Kind::Map
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Map(self)
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
                <$ty<K, V $(, $s)?>>::clear(self);
            }

            fn reflect_clone(&self) -> Box<dyn Reflect> {
                let map: $ty<K, V $(, $s)?> = <$ty<K, V $(, $s)?>>::iter(self)
                    .map(|(key, value)| (clone_value(key), clone_value(value)))
                    .collect();
                Box::new(map)
            }
        }
    };
}

impl_reflect_map!(BTreeMap<K, V> where K: Ord);

impl_reflect_map!(HashbrownMap<K, V, S> where K: Eq, Hash; S: BuildHasher, Default, Send, Sync);

#[cfg(feature = "std")]
impl_reflect_map!(StdHashMap<K, V, S> where K: Eq, Hash; S: BuildHasher, Default, Send, Sync);

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::Kind;
    use crate::ops::{Map, ReflectRef};
    use crate::value::ValueMap;

    #[test]
    fn maps_expose_entries() {
        let mut map = BTreeMap::new();
        map.insert(String::from("a"), 1_i64);
        map.insert(String::from("b"), 2_i64);

        let ReflectRef::Map(entries) = map.reflect_ref() else {
            panic!("expected a map");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.key_info().kind(), Kind::String);
        assert_eq!(entries.value_info().kind(), Kind::Int);

        let keys: alloc::vec::Vec<&str> = entries
            .iter()
            .filter_map(|(key, _)| key.downcast_ref::<String>().map(String::as_str))
            .collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn hash_maps_clone_and_reset() {
        let mut map = ValueMap::default();
        map.insert(String::from("k"), 3_i64.into());

        let cloned = map.reflect_clone().take::<ValueMap>().unwrap();
        assert_eq!(cloned, map);

        map.set_zero();
        assert!(Map::is_empty(&map));
    }
}
