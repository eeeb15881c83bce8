use crate::Reflect;
use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// List

/// A reflected ordered collection: slices (`Vec<T>`, `VecDeque<T>`) and
/// fixed-size arrays (`[T; N]`).
///
/// # Examples
///
/// ```
/// use vc_structs::{Reflect, ops::List, info::Kind};
///
/// let list: &dyn List = &vec![1_u8, 2, 3];
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.item_info().kind(), Kind::Uint);
/// assert_eq!(list.get(1).and_then(|v| v.downcast_ref::<u8>()), Some(&2));
/// ```
pub trait List: Reflect {
    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the static descriptor of the element type.
    fn item_info(&self) -> TypeInfo;

    /// Returns an iterator over the elements.
    fn iter(&self) -> ListItemIter<'_>;

    /// Returns `true` if the list has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over the elements of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl ListItemIter<'_> {
    #[inline(always)]
    pub const fn new(list: &dyn List) -> ListItemIter<'_> {
        ListItemIter { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len();
        (size - self.index, Some(size))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
