// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod opaque_kind;
mod struct_kind;
mod trait_get_type_meta;
mod trait_type_path;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::{ReflectMeta, ReflectStruct, TypeAttributes};

/// Generate every impl of `#[derive(Reflect)]`.
pub(crate) fn match_reflect_impls(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;
    let meta = ReflectMeta::new(attrs, &ast.ident, &ast.generics)?;

    let tokens = if meta.attrs().opaque.is_some() {
        let type_path = trait_type_path::impl_trait_type_path(&meta);
        let reflect = opaque_kind::impl_opaque(&meta);
        let get_type_meta = trait_get_type_meta::impl_trait_get_type_meta(&meta, &[], &[]);
        let auto_register = auto_register::get_auto_register_impl(&meta);
        quote! {
            #type_path
            #reflect
            #get_type_meta
            #auto_register
        }
    } else {
        let info = ReflectStruct::new(meta, ast)?;
        let meta = info.meta();

        let reflect_bounds = struct_kind::reflect_bounds(&info);
        let type_path = trait_type_path::impl_trait_type_path(meta);
        let reflect = struct_kind::impl_struct(&info, &reflect_bounds);
        let get_type_meta =
            trait_get_type_meta::impl_trait_get_type_meta(meta, &info.active_types(), &reflect_bounds);
        let auto_register = auto_register::get_auto_register_impl(meta);
        quote! {
            #type_path
            #reflect
            #get_type_meta
            #auto_register
        }
    };

    Ok(quote! {
        const _: () = {
            #tokens
        };
    })
}
