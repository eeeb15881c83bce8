use alloc::boxed::Box;

use crate::Reflect;
use crate::info::TypeInfo;

/// An iterator over the entries of a [`Map`], in the map's own order.
pub type MapIter<'a> = Box<dyn Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>;

// -----------------------------------------------------------------------------
// Map

/// A reflected key-value container.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_structs::{Reflect, ops::Map};
///
/// let mut scores = BTreeMap::new();
/// scores.insert("alice".to_string(), 3_i32);
/// scores.insert("bob".to_string(), 5_i32);
///
/// let map: &dyn Map = &scores;
/// let (key, value) = map.iter().next().unwrap();
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(key.downcast_ref::<String>().unwrap(), "alice");
/// assert_eq!(value.downcast_ref::<i32>(), Some(&3));
/// ```
pub trait Map: Reflect {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns an iterator over the entries.
    fn iter(&self) -> MapIter<'_>;

    /// Returns the static descriptor of the key type.
    fn key_info(&self) -> TypeInfo;

    /// Returns the static descriptor of the value type.
    fn value_info(&self) -> TypeInfo;

    /// Returns `true` if the map has no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
