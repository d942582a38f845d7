//! Static storage for the type paths of generic types.
//!
//! A `static CELL` inside a generic function is shared by every
//! instantiation, so the cell is keyed by [`TypeId`].

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use std::sync::{PoisonError, RwLock};

use sg_utils::TypeIdMap;

/// Container for the composed type path of a generic type.
///
/// See [`TypePath`](crate::info::TypePath) for an example.
pub struct GenericTypePathCell(RwLock<TypeIdMap<&'static String>>);

impl GenericTypePathCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the path stored for type `G`, computing it with `f` on first access.
    ///
    /// The string is leaked and lives for the rest of the program.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> String) -> &'static str {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> String) -> &'static str {
        match self.get_by_type_id(type_id) {
            Some(path) => path,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static str> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
            .map(String::as_str)
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: String) -> &'static str {
        let path: &'static String = *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)));
        path.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::GenericTypePathCell;
    use crate::impls::concat;

    #[test]
    fn keyed_by_type() {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        let a = CELL.get_or_insert::<u8>(|| concat(&["a<", "u8", ">"]));
        let b = CELL.get_or_insert::<u16>(|| concat(&["a<", "u16", ">"]));
        let again = CELL.get_or_insert::<u8>(|| unreachable!());
        assert_eq!(a, "a<u8>");
        assert_eq!(b, "a<u16>");
        assert!(core::ptr::eq(a, again));
    }
}
