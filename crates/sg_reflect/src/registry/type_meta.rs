use alloc::boxed::Box;
use core::any::TypeId;
use core::ops::Deref;

use sg_utils::TypeIdMap;

use crate::info::{TypePath, TypePathTable};
use crate::registry::{TypeRegistry, TypeTrait};

// -----------------------------------------------------------------------------
// TypeMeta

/// Registration data of one type: its path information and the
/// [`TypeTrait`]s it supports.
///
/// # Examples
///
/// ```
/// use sg_reflect::registry::{FromType, TypeMeta, TypeTraitDefault};
///
/// let mut meta = TypeMeta::of::<u64>();
/// assert_eq!(meta.type_path(), "u64");
/// assert!(!meta.has_trait::<TypeTraitDefault>());
///
/// meta.insert_trait(<TypeTraitDefault as FromType<u64>>::from_type());
/// assert!(meta.has_trait::<TypeTraitDefault>());
/// ```
pub struct TypeMeta {
    type_id: TypeId,
    type_path_table: TypePathTable,
    trait_table: TypeIdMap<Box<dyn TypeTrait>>,
}

impl TypeMeta {
    /// Creates an empty `TypeMeta` for `T`.
    #[inline]
    pub fn of<T: TypePath>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_path_table: TypePathTable::of::<T>(),
            trait_table: TypeIdMap::new(),
        }
    }

    #[inline(always)]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline(always)]
    pub const fn type_path_table(&self) -> &TypePathTable {
        &self.type_path_table
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.type_path_table.path()
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_path_table.name()
    }

    /// Inserts a type trait, replacing any previous one of the same type.
    #[inline(always)]
    pub fn insert_trait<T: TypeTrait>(&mut self, data: T) {
        self.insert_trait_by_id(TypeId::of::<T>(), Box::new(data));
    }

    #[inline(never)]
    fn insert_trait_by_id(&mut self, id: TypeId, val: Box<dyn TypeTrait>) {
        self.trait_table.insert(id, val);
    }

    #[inline]
    pub fn get_trait<T: TypeTrait>(&self) -> Option<&T> {
        self.trait_table
            .get(&TypeId::of::<T>())
            .map(Deref::deref)
            .and_then(<dyn TypeTrait>::downcast_ref)
    }

    #[inline]
    pub fn get_trait_mut<T: TypeTrait>(&mut self) -> Option<&mut T> {
        match self.trait_table.get_mut(&TypeId::of::<T>()) {
            Some(type_trait) => type_trait.downcast_mut(),
            None => None,
        }
    }

    #[inline]
    pub fn has_trait<T: TypeTrait>(&self) -> bool {
        self.trait_table.contains(&TypeId::of::<T>())
    }

    #[inline]
    pub fn trait_len(&self) -> usize {
        self.trait_table.len()
    }
}

impl core::fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeMeta")
            .field("type_path", &self.type_path())
            .field("trait_len", &self.trait_len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// GetTypeMeta

/// Creates the [`TypeMeta`] of a type.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) and by
/// every built-in reflected type.
pub trait GetTypeMeta: TypePath {
    /// Returns the registration data of this type.
    fn get_type_meta() -> TypeMeta;

    /// Registers the types this type contains, such as field types.
    ///
    /// Called once, the first time this type is registered.
    #[inline(always)]
    fn register_dependencies(_registry: &mut TypeRegistry) {}
}
