//! Items used by code generated in other crates.
//!
//! Not public API.

pub mod macro_utils {
    pub use alloc::boxed::Box;
}

#[cfg(feature = "auto_register")]
pub mod auto_register {
    use crate::info::TypePath;
    use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

    pub use inventory;

    /// A registration function submitted by `#[reflect(auto_register)]`.
    pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

    inventory::collect!(__AutoRegisterFunc);

    pub trait __RegisterType {
        fn __register(registry: &mut TypeRegistry);
    }

    impl<T: GetTypeMeta> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut TypeRegistry) {
            registry.register::<T>();
        }
    }

    /// Registered through `inventory` like any user type; its presence in a
    /// registry proves static registration works on this platform.
    pub struct __AvailFlag;

    impl TypePath for __AvailFlag {
        fn type_path() -> &'static str {
            "sg_reflect::__macro_exports::auto_register::__AvailFlag"
        }

        fn type_name() -> &'static str {
            "__AvailFlag"
        }

        fn type_ident() -> &'static str {
            "__AvailFlag"
        }
    }

    impl GetTypeMeta for __AvailFlag {
        fn get_type_meta() -> TypeMeta {
            TypeMeta::of::<Self>()
        }
    }

    inventory::submit! {
        __AutoRegisterFunc(<__AvailFlag as __RegisterType>::__register)
    }

    pub fn __register_types(registry: &mut TypeRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}
