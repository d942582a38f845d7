use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::{GenericTypePathCell, concat};
use crate::info::TypePath;
use crate::ops::Optional;
use crate::reflection::impl_reflect_cast_fn;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeRegistry, TypeTraitDefault};

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["core::option::Option<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Option<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Option"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::option")
    }
}

// The contained type needs `Default` so a null slot can be filled in place.
impl<T: Reflect + TypePath + Default> Reflect for Option<T> {
    /// Accepts an `Option<T>` or a bare `T`.
    fn from_boxed(value: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        match value.downcast::<Self>() {
            Ok(option) => Ok(*option),
            Err(value) => T::from_boxed(value).map(Some),
        }
    }

    impl_reflect_cast_fn!(Optional);
}

impl<T: Reflect + TypePath + Default> Optional for Option<T> {
    #[inline]
    fn value(&self) -> Option<&dyn Reflect> {
        match self {
            Some(value) => Some(value),
            None => None,
        }
    }

    #[inline]
    fn value_mut(&mut self) -> Option<&mut dyn Reflect> {
        match self {
            Some(value) => Some(value),
            None => None,
        }
    }

    #[inline]
    fn clear(&mut self) {
        *self = None;
    }

    #[inline]
    fn get_or_insert_default(&mut self) -> &mut dyn Reflect {
        self.get_or_insert_with(T::default)
    }

    #[inline]
    fn item_type_path(&self) -> &'static str {
        T::type_path()
    }
}

impl<T: GetTypeMeta + Reflect + Default> GetTypeMeta for Option<T> {
    fn get_type_meta() -> TypeMeta {
        let mut meta = TypeMeta::of::<Self>();
        meta.insert_trait(<TypeTraitDefault as FromType<Self>>::from_type());
        meta
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::TypePath;
    use crate::ops::{Optional, ReflectRef};

    #[test]
    fn type_path() {
        assert_eq!(
            <Option<Vec<u8>>>::type_path(),
            "core::option::Option<alloc::vec::Vec<u8>>"
        );
        assert_eq!(<Option<Vec<u8>>>::type_name(), "Option<Vec<u8>>");
    }

    #[test]
    fn set_accepts_inner() {
        let mut slot: Option<String> = None;
        slot.set(String::from("x").into_boxed_reflect()).unwrap();
        assert_eq!(slot.as_deref(), Some("x"));

        slot.set(None::<String>.into_boxed_reflect()).unwrap();
        assert_eq!(slot, None);

        assert!(slot.set(1_u8.into_boxed_reflect()).is_err());
    }

    #[test]
    fn optional_view() {
        let value = Some(3_i16);
        let ReflectRef::Optional(opt) = value.reflect_ref() else {
            panic!("expected an optional");
        };
        assert_eq!(opt.value().unwrap().downcast_ref::<i16>(), Some(&3));
        assert_eq!(opt.item_type_path(), "i16");
    }
}
