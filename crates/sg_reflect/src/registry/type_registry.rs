use alloc::string::String;
use core::any::TypeId;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use sg_utils::TypeIdMap;
use sg_utils::hash::{HashMap, HashSet};

use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTrait};

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of reflected types, indexed by [`TypeId`], type path and
/// short type name.
///
/// Reading a serialized graph looks every declared type up here, so a type
/// must be registered before it can be rebuilt.
///
/// # Examples
///
/// ```
/// use sg_reflect::{derive::Reflect, registry::TypeRegistry};
///
/// #[derive(Reflect, Default)]
/// #[reflect(default, type_path = "survey::Site")]
/// struct Site {
///     depth: Vec<f32>,
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Site>();
///
/// assert!(registry.get_with_type_path("survey::Site").is_some());
/// // field types are registered too
/// assert!(registry.get_with_type_path("alloc::vec::Vec<f32>").is_some());
/// assert!(registry.get_with_type_name("Site").is_some());
/// ```
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for TypeRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates a registry without any types.
    #[inline]
    pub fn empty() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::default(),
            type_name_to_id: HashMap::default(),
            ambiguous_names: HashSet::default(),
        }
    }

    /// Creates a registry with every scalar type registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<u128>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<String>();
        registry
    }

    // The type must not be registered yet.
    fn add_new_type_indices(
        type_meta: &TypeMeta,
        type_path_to_id: &mut HashMap<&'static str, TypeId>,
        type_name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        let type_name = type_meta.type_name();
        let type_id = type_meta.type_id();

        if !ambiguous_names.contains(type_name) {
            if type_name_to_id.contains_key(type_name) {
                type_name_to_id.remove(type_name);
                ambiguous_names.insert(type_name);
            } else {
                type_name_to_id.insert(type_name, type_id);
            }
        }

        type_path_to_id.insert(type_meta.type_path(), type_id);
    }

    // Returns `false` and does nothing if the type is already registered.
    fn register_internal(
        &mut self,
        type_id: TypeId,
        get_type_meta: impl FnOnce() -> TypeMeta,
    ) -> bool {
        self.type_meta_table.try_insert(type_id, || {
            let meta = get_type_meta();
            Self::add_new_type_indices(
                &meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            meta
        })
    }

    /// Registers `T` and, the first time, the types it depends on.
    pub fn register<T: GetTypeMeta>(&mut self) {
        if self.register_internal(TypeId::of::<T>(), T::get_type_meta) {
            T::register_dependencies(self);
        }
    }

    /// Registers the type of `value`.
    #[inline]
    pub fn register_by_val<T: GetTypeMeta>(&mut self, _: &T) {
        self.register::<T>();
    }

    /// Inserts a registered type's meta, replacing any previous entry.
    pub fn insert_type_meta(&mut self, type_meta: TypeMeta) {
        if !self.type_meta_table.contains(&type_meta.type_id()) {
            Self::add_new_type_indices(
                &type_meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
        }
        self.type_meta_table.insert(type_meta.type_id(), type_meta);
    }

    /// Registers every type marked `#[reflect(auto_register)]`.
    ///
    /// Returns `false` if static registration is unavailable, either because
    /// the `auto_register` feature is off or the platform lacks support.
    ///
    /// ```
    /// use sg_reflect::{derive::Reflect, registry::TypeRegistry};
    ///
    /// #[derive(Reflect, Default)]
    /// #[reflect(default, auto_register)]
    /// struct Probe {
    ///     id: u8,
    /// }
    ///
    /// let mut registry = TypeRegistry::new();
    /// if registry.auto_register() {
    ///     assert!(registry.contains(core::any::TypeId::of::<Probe>()));
    /// }
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            use crate::__macro_exports::auto_register;
            if self.contains(TypeId::of::<auto_register::__AvailFlag>()) {
                return true;
            }
            auto_register::__register_types(self);
            self.contains(TypeId::of::<auto_register::__AvailFlag>())
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Adds a type trait to an already registered type.
    ///
    /// # Panics
    ///
    /// Panics if `T` is not registered.
    pub fn register_type_trait<T: GetTypeMeta, D: TypeTrait + FromType<T>>(&mut self) {
        match self.type_meta_table.get_mut(&TypeId::of::<T>()) {
            Some(type_meta) => type_meta.insert_trait(D::from_type()),
            None => panic!(
                "called `TypeRegistry::register_type_trait` for `{}` before registering it",
                T::type_path(),
            ),
        }
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    #[inline]
    pub fn get_mut(&mut self, type_id: TypeId) -> Option<&mut TypeMeta> {
        self.type_meta_table.get_mut(&type_id)
    }

    /// Looks a type up by its full [`type_path`](crate::info::TypePath::type_path).
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Looks a type up by its short [`type_name`](crate::info::TypePath::type_name).
    ///
    /// Names shared by several registered types are ambiguous and never match.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeMeta> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    pub fn get_type_trait<T: TypeTrait>(&self, type_id: TypeId) -> Option<&T> {
        match self.get(type_id) {
            Some(type_meta) => type_meta.get_trait::<T>(),
            None => None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }
}

// -----------------------------------------------------------------------------
// TypeRegistryArc

/// A shared [`TypeRegistry`] behind a read-write lock.
#[derive(Clone, Default)]
pub struct TypeRegistryArc {
    pub internal: Arc<RwLock<TypeRegistry>>,
}

impl TypeRegistryArc {
    pub fn read(&self) -> RwLockReadGuard<'_, TypeRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, TypeRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for TypeRegistryArc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.read().type_path_to_id.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use core::any::TypeId;

    use super::TypeRegistry;
    use crate::registry::TypeTraitDefault;

    #[test]
    fn scalars_are_constructible() {
        let registry = TypeRegistry::new();
        for path in ["bool", "i32", "u128", "f64", "alloc::string::String"] {
            let meta = registry.get_with_type_path(path).unwrap();
            assert!(meta.has_trait::<TypeTraitDefault>(), "{path}");
        }
        assert!(registry.get_with_type_path("i256").is_none());
    }

    #[test]
    fn register_dependencies_once() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Option<Vec<String>>>();

        assert!(registry.contains(TypeId::of::<Vec<String>>()));
        assert!(registry.contains(TypeId::of::<String>()));
        assert_eq!(registry.len(), 3);

        registry.register::<Vec<String>>();
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn ambiguous_names() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Vec<u8>>();
        registry.register::<alloc::collections::VecDeque<u8>>();
        assert!(registry.get_with_type_name("Vec<u8>").is_some());

        mod a {
            #[derive(crate::derive::Reflect)]
            pub struct Twin;
        }
        mod b {
            #[derive(crate::derive::Reflect)]
            pub struct Twin;
        }
        registry.register::<a::Twin>();
        registry.register::<b::Twin>();

        assert!(registry.is_ambiguous("Twin"));
        assert!(registry.get_with_type_name("Twin").is_none());
    }

    #[cfg(feature = "auto_register")]
    #[derive(crate::derive::Reflect, Default)]
    #[reflect(default, auto_register, type_path = "registry_tests::Marked")]
    struct Marked {
        level: u8,
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn auto_register_marked_types() {
        let mut registry = TypeRegistry::empty();
        assert!(registry.auto_register());

        let meta = registry.get_with_type_path("registry_tests::Marked").unwrap();
        assert!(meta.has_trait::<TypeTraitDefault>());
        // field types come along
        assert!(registry.contains(TypeId::of::<u8>()));
        assert!(registry.auto_register());
    }
}
