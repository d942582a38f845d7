use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Extra where predicates of the `Reflect` impl of an opaque type.
pub(crate) fn opaque_bounds(meta: &ReflectMeta) -> Vec<TokenStream> {
    let type_path_ = crate::path::type_path_(meta.sg_reflect_path());
    meta.type_param_bounds(&quote! {
        #type_path_ + ::core::marker::Send + ::core::marker::Sync
    })
}

/// Generate implementation codes for `Reflect` of an opaque type
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    let sg_reflect_path = meta.sg_reflect_path();

    let reflect_ = crate::path::reflect_(sg_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(sg_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(sg_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(sg_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(sg_reflect_path);

    let ident = meta.ident();
    let (impl_generics, ty_generics, _) = meta.generics().split_for_impl();
    let where_clause = meta.where_clause_with(&opaque_bounds(meta));

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
                #reflect_kind_::Opaque
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Opaque(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Opaque(self)
            }
        }
    }
}
