use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Reflect;
use crate::impls::{GenericTypePathCell, concat};
use crate::info::TypePath;
use crate::ops::{List, ListItemIter};
use crate::reflection::impl_reflect_cast_fn;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeRegistry, TypeTraitDefault};

macro_rules! impl_list {
    ($ty:ident, $module:literal, $push:ident, $view:ty) => {
        impl<T: TypePath> TypePath for $ty<T> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[$module, "::", stringify!($ty), "<", T::type_path(), ">"])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[stringify!($ty), "<", T::type_name(), ">"])
                })
            }

            #[inline]
            fn type_ident() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl<T: Reflect + TypePath> Reflect for $ty<T> {
            impl_reflect_cast_fn!(List);
        }

        impl<T: Reflect + TypePath> List for $ty<T> {
            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                match <$view>::get(self, index) {
                    Some(value) => Some(value),
                    None => None,
                }
            }

            #[inline]
            fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
                match <$view>::get_mut(self, index) {
                    Some(value) => Some(value),
                    None => None,
                }
            }

            #[inline]
            fn len(&self) -> usize {
                <$ty<T>>::len(self)
            }

            #[inline]
            fn clear(&mut self) {
                <$ty<T>>::clear(self);
            }

            fn push_boxed(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
                let value = T::from_boxed(value)?;
                self.$push(value);
                Ok(())
            }

            #[inline]
            fn item_type_path(&self) -> &'static str {
                T::type_path()
            }

            #[inline]
            fn iter(&self) -> ListItemIter<'_> {
                ListItemIter::new(self)
            }
        }

        impl<T: GetTypeMeta + Reflect> GetTypeMeta for $ty<T> {
            fn get_type_meta() -> TypeMeta {
                let mut meta = TypeMeta::of::<Self>();
                meta.insert_trait(<TypeTraitDefault as FromType<Self>>::from_type());
                meta
            }

            fn register_dependencies(registry: &mut TypeRegistry) {
                registry.register::<T>();
            }
        }
    };
}

impl_list!(Vec, "alloc::vec", push, [T]);
impl_list!(VecDeque, "alloc::collections", push_back, VecDeque<T>);

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;

    use crate::Reflect;
    use crate::info::TypePath;
    use crate::ops::List;

    #[test]
    fn type_paths() {
        assert_eq!(<Vec<i32>>::type_path(), "alloc::vec::Vec<i32>");
        assert_eq!(
            <VecDeque<String>>::type_path(),
            "alloc::collections::VecDeque<alloc::string::String>"
        );
        assert_eq!(<Vec<Vec<u8>>>::type_name(), "Vec<Vec<u8>>");
    }

    #[test]
    fn push_keeps_order() {
        let mut deque: VecDeque<char> = VecDeque::new();
        for c in ['a', 'b', 'c'] {
            deque.push_boxed(c.into_boxed_reflect()).unwrap();
        }
        let collected: String = List::iter(&deque)
            .map(|v| *v.downcast_ref::<char>().unwrap())
            .collect();
        assert_eq!(collected, "abc");
    }

    #[test]
    fn polymorphic_items() {
        let mut list: Vec<Box<dyn Reflect>> = Vec::new();
        list.push_boxed(1_u8.into_boxed_reflect()).unwrap();
        list.push_boxed(String::from("two").into_boxed_reflect()).unwrap();
        assert!(list[0].is::<u8>());
        assert!(list[1].is::<String>());
    }
}
