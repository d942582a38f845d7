use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use crate::derive_data::ReflectMeta;

/// Generate implementation codes for `GetTypeMeta`
///
/// `field_types` are registered as dependencies.
pub(crate) fn impl_trait_get_type_meta(
    meta: &ReflectMeta,
    field_types: &[&Type],
    reflect_bounds: &[TokenStream],
) -> TokenStream {
    let sg_reflect_path = meta.sg_reflect_path();

    let get_type_meta_ = crate::path::get_type_meta_(sg_reflect_path);
    let type_meta_ = crate::path::type_meta_(sg_reflect_path);
    let type_registry_ = crate::path::type_registry_(sg_reflect_path);
    let type_trait_default_ = crate::path::type_trait_default_(sg_reflect_path);
    let from_type_ = crate::path::from_type_(sg_reflect_path);

    let ident = meta.ident();
    let (impl_generics, ty_generics, _) = meta.generics().split_for_impl();

    let mut bounds = if meta.attrs().opaque.is_some() {
        super::opaque_kind::opaque_bounds(meta)
    } else {
        reflect_bounds.to_vec()
    };
    if meta.impl_with_generic() {
        bounds.extend(field_types.iter().map(|ty| quote! { #ty: #get_type_meta_ }));
        if meta.attrs().default.is_some() {
            bounds.push(quote! { Self: ::core::default::Default });
        }
    }
    let where_clause = meta.where_clause_with(&bounds);

    let insert_default = meta.attrs().default.map(|_| {
        quote! {
            meta.insert_trait(<#type_trait_default_ as #from_type_<Self>>::from_type());
        }
    });

    let register_dependencies = if field_types.is_empty() {
        TokenStream::new()
    } else {
        quote! {
            fn register_dependencies(registry: &mut #type_registry_) {
                #(registry.register::<#field_types>();)*
            }
        }
    };

    quote! {
        impl #impl_generics #get_type_meta_ for #ident #ty_generics #where_clause {
            fn get_type_meta() -> #type_meta_ {
                #[allow(unused_mut)]
                let mut meta = #type_meta_::of::<Self>();
                #insert_default
                meta
            }

            #register_dependencies
        }
    }
}
