use proc_macro2::TokenStream;
use quote::quote;
use syn::{Index, LitStr};

use crate::derive_data::ReflectStruct;

/// Extra where predicates of the `Reflect` impls.
///
/// Non-generic structs need none; a missing `Reflect` impl on a field then
/// shows up at the field access itself.
pub(crate) fn reflect_bounds(info: &ReflectStruct) -> Vec<TokenStream> {
    let meta = info.meta();
    if !meta.impl_with_generic() {
        return Vec::new();
    }

    let sg_reflect_path = meta.sg_reflect_path();
    let type_path_ = crate::path::type_path_(sg_reflect_path);
    let reflect_ = crate::path::reflect_(sg_reflect_path);

    let mut bounds = meta.type_param_bounds(&quote! {
        #type_path_ + ::core::marker::Send + ::core::marker::Sync
    });
    bounds.extend(info.active_types().into_iter().map(|ty| quote! { #ty: #reflect_ }));
    bounds
}

/// Generate implementation codes for `Reflect` and `Struct`
pub(crate) fn impl_struct(info: &ReflectStruct, bounds: &[TokenStream]) -> TokenStream {
    let meta = info.meta();
    let sg_reflect_path = meta.sg_reflect_path();

    let reflect_ = crate::path::reflect_(sg_reflect_path);
    let struct_ = crate::path::struct_(sg_reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(sg_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(sg_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(sg_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(sg_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(sg_reflect_path);

    let ident = meta.ident();
    let (impl_generics, ty_generics, _) = meta.generics().split_for_impl();
    let where_clause = meta.where_clause_with(bounds);

    let field_idents: Vec<_> = info.active_fields().map(|field| field.ident).collect();
    let field_names: Vec<_> = info
        .active_fields()
        .map(|field| LitStr::new(&field.name, field.ident.span()))
        .collect();
    let field_indices: Vec<_> = (0..field_idents.len()).map(Index::from).collect();
    let field_len = field_idents.len();

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            fn set(
                &mut self,
                value: #macro_utils_::Box<dyn #reflect_>,
            ) -> ::core::result::Result<(), #macro_utils_::Box<dyn #reflect_>> {
                *self = <Self as #reflect_>::from_boxed(value)?;
                ::core::result::Result::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Struct(self)
            }
        }

        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> ::core::option::Option<&dyn #reflect_> {
                match name {
                    #(#field_names => ::core::option::Option::Some(&self.#field_idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> ::core::option::Option<&mut dyn #reflect_> {
                match name {
                    #(#field_names => ::core::option::Option::Some(&mut self.#field_idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                match index {
                    #(#field_indices => ::core::option::Option::Some(&self.#field_idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => ::core::option::Option::Some(&mut self.#field_idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn name_at(&self, index: usize) -> ::core::option::Option<&str> {
                match index {
                    #(#field_indices => ::core::option::Option::Some(#field_names),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn index_of(&self, name: &str) -> ::core::option::Option<usize> {
                match name {
                    #(#field_names => ::core::option::Option::Some(#field_indices),)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}
