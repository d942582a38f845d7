use alloc::boxed::Box;

use crate::Reflect;

/// An iterator over the entries of a [`Map`].
pub type MapIter<'a> = Box<dyn Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>;

/// A key-value container, such as `BTreeMap<K, V>` or `HashMap<K, V>`.
///
/// Entries are visited in the container's own iteration order.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use sg_reflect::{Reflect, ops::Map};
///
/// let mut map: BTreeMap<String, u32> = BTreeMap::new();
/// map.insert_boxed(
///     String::from("b").into_boxed_reflect(),
///     2_u32.into_boxed_reflect(),
/// ).unwrap();
/// map.insert(String::from("a"), 1);
///
/// assert_eq!(map.key_type_path(), "alloc::string::String");
/// let keys: Vec<&String> = Map::iter(&map).map(|(k, _)| k.downcast_ref::<String>().unwrap()).collect();
/// assert_eq!(keys, ["a", "b"]);
/// ```
pub trait Map: Reflect {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if there are no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over `(key, value)` pairs.
    fn iter(&self) -> MapIter<'_>;

    /// Removes all entries.
    fn clear(&mut self);

    /// Inserts an entry, replacing any previous value under the same key.
    ///
    /// Returns the rejected key or value if its type is not accepted.
    fn insert_boxed(
        &mut self,
        key: Box<dyn Reflect>,
        value: Box<dyn Reflect>,
    ) -> Result<(), Box<dyn Reflect>>;

    /// Returns the type path of the key type.
    fn key_type_path(&self) -> &'static str;

    /// Returns the type path of the value type.
    fn value_type_path(&self) -> &'static str;
}
