use proc_macro2::TokenStream;
use quote::quote;
use syn::LitStr;

use crate::derive_data::ReflectMeta;

fn static_path_cell(meta: &ReflectMeta, generator: TokenStream) -> TokenStream {
    let path_cell_ = crate::path::generic_type_path_cell_(meta.sg_reflect_path());

    quote! {
        static CELL: #path_cell_ = #path_cell_::new();
        CELL.get_or_insert::<Self>(|| {
            #generator
        })
    }
}

/// `concat(&[base, "<", T::method(), ", ", U::method(), ">"])`
fn generic_concat(meta: &ReflectMeta, base: TokenStream, method: TokenStream) -> TokenStream {
    let concat_ = crate::path::concat_(meta.sg_reflect_path());
    let type_path_ = crate::path::type_path_(meta.sg_reflect_path());

    let mut parts = vec![base, quote!("<")];
    for (index, ident) in meta.type_params().enumerate() {
        if index > 0 {
            parts.push(quote!(", "));
        }
        parts.push(quote! { <#ident as #type_path_>::#method() });
    }
    parts.push(quote!(">"));

    quote! { #concat_(&[ #(#parts),* ]) }
}

/// Generate implementation codes for `TypePath`
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let type_path_ = crate::path::type_path_(meta.sg_reflect_path());
    let ident = meta.ident();

    let type_ident = LitStr::new(&meta.type_ident(), ident.span());
    let module_path = meta.module_path();

    let (type_path, type_name, inline_flag) = if meta.impl_with_generic() {
        (
            static_path_cell(
                meta,
                generic_concat(meta, meta.base_type_path(), quote!(type_path)),
            ),
            static_path_cell(
                meta,
                generic_concat(meta, quote!(#type_ident), quote!(type_name)),
            ),
            TokenStream::new(),
        )
    } else {
        (meta.base_type_path(), quote!(#type_ident), quote!(#[inline]))
    };

    let (impl_generics, ty_generics, _) = meta.generics().split_for_impl();
    let where_clause = meta.where_clause_with(&meta.type_param_bounds(&type_path_));

    quote! {
        impl #impl_generics #type_path_ for #ident #ty_generics #where_clause {
            #inline_flag
            fn type_path() -> &'static str {
                #type_path
            }

            #inline_flag
            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn type_ident() -> &'static str {
                #type_ident
            }

            #[inline]
            fn module_path() -> ::core::option::Option<&'static str> {
                #module_path
            }
        }
    }
}
