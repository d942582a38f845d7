use alloc::boxed::Box;

use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// An ordered sequence, such as `Vec<T>` or `VecDeque<T>`.
///
/// # Examples
///
/// ```
/// use sg_reflect::{Reflect, ops::List};
///
/// let mut list: Vec<u8> = vec![1];
/// assert_eq!(list.item_type_path(), "u8");
///
/// list.push_boxed(2_u8.into_boxed_reflect()).unwrap();
/// assert!(list.push_boxed(3_i8.into_boxed_reflect()).is_err());
///
/// let items: Vec<u8> = List::iter(&list).map(|v| *v.downcast_ref::<u8>().unwrap()).collect();
/// assert_eq!(items, [1, 2]);
/// ```
pub trait List: Reflect {
    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the element at `index` mutably.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all elements.
    fn clear(&mut self);

    /// Appends an element, returning it back if its type is not accepted.
    fn push_boxed(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the type path of the element type.
    fn item_type_path(&self) -> &'static str;

    /// Returns an iterator over the elements.
    fn iter(&self) -> ListItemIter<'_>;
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over the elements of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    /// Creates a new [`ListItemIter`].
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> Self {
        ListItemIter { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.list.len().saturating_sub(self.index);
        (hint, Some(hint))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
