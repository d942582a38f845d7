use crate::Reflect;

/// A nullable slot, implemented for `Option<T>`.
///
/// # Examples
///
/// ```
/// use sg_reflect::{Reflect, ops::Optional};
///
/// let mut slot: Option<u32> = None;
/// assert!(slot.value().is_none());
///
/// let inner = Optional::get_or_insert_default(&mut slot);
/// assert!(inner.is::<u32>());
/// assert_eq!(slot, Some(0));
///
/// Optional::clear(&mut slot);
/// assert_eq!(slot, None);
/// ```
pub trait Optional: Reflect {
    /// Returns the contained value, if any.
    fn value(&self) -> Option<&dyn Reflect>;

    /// Returns the contained value mutably, if any.
    fn value_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Sets the slot to `None`.
    fn clear(&mut self);

    /// Returns the contained value, inserting the default first if absent.
    fn get_or_insert_default(&mut self) -> &mut dyn Reflect;

    /// Returns the type path of the contained type.
    fn item_type_path(&self) -> &'static str;
}
