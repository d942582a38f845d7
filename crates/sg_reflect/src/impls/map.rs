use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::hash::Hash;

use sg_utils::hash::FixedHashState;

use crate::Reflect;
use crate::impls::{GenericTypePathCell, concat};
use crate::info::TypePath;
use crate::ops::{Map, MapIter};
use crate::reflection::impl_reflect_cast_fn;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeRegistry, TypeTraitDefault};

macro_rules! impl_map {
    ($map:ty, $ident:literal, $module:literal, $($key_bound:tt)+) => {
        impl<K: TypePath, V: TypePath> TypePath for $map {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[
                        $module, "::", $ident, "<", K::type_path(), ", ", V::type_path(), ">",
                    ])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[$ident, "<", K::type_name(), ", ", V::type_name(), ">"])
                })
            }

            #[inline]
            fn type_ident() -> &'static str {
                $ident
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl<K, V> Reflect for $map
        where
            K: Reflect + TypePath + $($key_bound)+,
            V: Reflect + TypePath,
        {
            impl_reflect_cast_fn!(Map);
        }

        impl<K, V> Map for $map
        where
            K: Reflect + TypePath + $($key_bound)+,
            V: Reflect + TypePath,
        {
            #[inline]
            fn len(&self) -> usize {
                <$map>::len(self)
            }

            fn iter(&self) -> MapIter<'_> {
                Box::new(
                    <$map>::iter(self)
                        .map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)),
                )
            }

            #[inline]
            fn clear(&mut self) {
                <$map>::clear(self);
            }

            fn insert_boxed(
                &mut self,
                key: Box<dyn Reflect>,
                value: Box<dyn Reflect>,
            ) -> Result<(), Box<dyn Reflect>> {
                let key = K::from_boxed(key)?;
                let value = V::from_boxed(value)?;
                <$map>::insert(self, key, value);
                Ok(())
            }

            #[inline]
            fn key_type_path(&self) -> &'static str {
                K::type_path()
            }

            #[inline]
            fn value_type_path(&self) -> &'static str {
                V::type_path()
            }
        }

        impl<K, V> GetTypeMeta for $map
        where
            K: GetTypeMeta + Reflect + $($key_bound)+,
            V: GetTypeMeta + Reflect,
        {
            fn get_type_meta() -> TypeMeta {
                let mut meta = TypeMeta::of::<Self>();
                meta.insert_trait(<TypeTraitDefault as FromType<Self>>::from_type());
                meta
            }

            fn register_dependencies(registry: &mut TypeRegistry) {
                registry.register::<K>();
                registry.register::<V>();
            }
        }
    };
}

impl_map!(BTreeMap<K, V>, "BTreeMap", "alloc::collections", Ord);

impl_map!(
    std::collections::HashMap<K, V>,
    "HashMap",
    "std::collections",
    Eq + Hash
);

impl_map!(
    sg_utils::hash::HashMap<K, V, FixedHashState>,
    "HashMap",
    "sg_utils::hash",
    Eq + Hash
);

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;

    use crate::Reflect;
    use crate::info::TypePath;
    use crate::ops::Map;

    #[test]
    fn type_paths() {
        assert_eq!(
            <BTreeMap<String, u8>>::type_path(),
            "alloc::collections::BTreeMap<alloc::string::String, u8>"
        );
        assert_eq!(
            <std::collections::HashMap<u8, u8>>::type_path(),
            "std::collections::HashMap<u8, u8>"
        );
        assert_eq!(
            <sg_utils::hash::HashMap<u8, bool>>::type_path(),
            "sg_utils::hash::HashMap<u8, bool>"
        );
        assert_eq!(<BTreeMap<u8, Vec<u8>>>::type_name(), "BTreeMap<u8, Vec<u8>>");
    }

    #[test]
    fn insert_rejects_wrong_types() {
        let mut map: BTreeMap<u8, String> = BTreeMap::new();
        let rejected = map
            .insert_boxed(1_u8.into_boxed_reflect(), 2_u8.into_boxed_reflect())
            .unwrap_err();
        assert!(rejected.is::<u8>());
        assert!(map.is_empty());

        map.insert_boxed(1_u8.into_boxed_reflect(), String::new().into_boxed_reflect())
            .unwrap();
        assert_eq!(Map::len(&map), 1);
    }
}
