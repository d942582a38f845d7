//! Paths into `sg_reflect` used by generated code.
//!
//! Keeping them here means a change to the `sg_reflect` layout only needs
//! to be mirrored in one place.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `sg_reflect` crate.
///
/// 1. For crates that depend on `sg_reflect`, `::sg_reflect` is returned.
/// 2. For crates that depend on `sg_core`, `::sg_core::reflect` is returned.
/// 3. Otherwise `::sg_reflect` is returned, which may be incorrect.
///
/// This reads the caller's `Cargo.toml`, so the result is computed once per
/// derive and passed around.
pub(crate) fn sg_reflect() -> syn::Path {
    sg_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("sg_reflect"))
}

// -----------------------------------------------------------------------------
// Internal API

macro_rules! define_paths {
    ($($name:ident => $($segment:ident)::+;)*) => {
        $(
            #[inline(always)]
            pub(crate) fn $name(sg_reflect_path: &syn::Path) -> TokenStream {
                quote! { #sg_reflect_path::$($segment)::+ }
            }
        )*
    };
}

define_paths! {
    reflect_ => Reflect;
    type_path_ => info::TypePath;
    reflect_kind_ => info::ReflectKind;
    reflect_ref_ => ops::ReflectRef;
    reflect_mut_ => ops::ReflectMut;
    struct_ => ops::Struct;
    struct_field_iter_ => ops::StructFieldIter;
    get_type_meta_ => registry::GetTypeMeta;
    type_meta_ => registry::TypeMeta;
    type_registry_ => registry::TypeRegistry;
    type_trait_default_ => registry::TypeTraitDefault;
    from_type_ => registry::FromType;
    generic_type_path_cell_ => impls::GenericTypePathCell;
    concat_ => impls::concat;
    macro_utils_ => __macro_exports::macro_utils;
}

#[cfg(feature = "auto_register")]
define_paths! {
    auto_register_ => __macro_exports::auto_register;
}
