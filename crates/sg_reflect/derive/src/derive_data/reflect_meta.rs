use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{GenericParam, Generics, Ident, LitStr, Path, spanned::Spanned};

use super::TypeAttributes;

/// Type-level information shared by every generated impl.
pub(crate) struct ReflectMeta<'a> {
    sg_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("sg_reflect_path", &self.sg_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> syn::Result<Self> {
        for param in &generics.params {
            match param {
                GenericParam::Type(_) => {}
                GenericParam::Lifetime(_) | GenericParam::Const(_) => {
                    return Err(syn::Error::new(
                        param.span(),
                        "`Reflect` only supports type parameters",
                    ));
                }
            }
        }

        Ok(Self {
            sg_reflect_path: crate::path::sg_reflect(),
            attrs,
            ident,
            generics,
        })
    }

    #[inline]
    pub fn sg_reflect_path(&self) -> &Path {
        &self.sg_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn generics(&self) -> &Generics {
        self.generics
    }

    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }

    pub fn type_params(&self) -> impl Iterator<Item = &Ident> {
        self.generics.type_params().map(|param| &param.ident)
    }

    /// `T: #bounds` for every type parameter.
    pub fn type_param_bounds(&self, bounds: &TokenStream) -> Vec<TokenStream> {
        self.type_params()
            .map(|ident| quote! { #ident: #bounds })
            .collect()
    }

    /// The declared where clause extended with `predicates`.
    pub fn where_clause_with(&self, predicates: &[TokenStream]) -> TokenStream {
        let declared = self
            .generics
            .where_clause
            .iter()
            .flat_map(|clause| clause.predicates.iter());

        if self.generics.where_clause.is_none() && predicates.is_empty() {
            return TokenStream::new();
        }

        quote! { where #(#declared,)* #(#predicates,)* }
    }

    /// The short identifier, from `type_path` if given.
    pub fn type_ident(&self) -> String {
        match &self.attrs.type_path {
            Some(lit) => {
                let path = lit.value();
                match path.rsplit_once("::") {
                    Some((_, ident)) => ident.to_owned(),
                    None => path,
                }
            }
            None => self.ident.to_string(),
        }
    }

    /// A `&'static str` expression of the type path without generics.
    pub fn base_type_path(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => lit.to_token_stream(),
            None => {
                let ident = LitStr::new(&self.ident.to_string(), self.ident.span());
                quote! { ::core::concat!(::core::module_path!(), "::", #ident) }
            }
        }
    }

    /// An `Option<&'static str>` expression of the module path.
    pub fn module_path(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => match lit.value().rsplit_once("::") {
                Some((module, _)) => {
                    let module = LitStr::new(module, lit.span());
                    quote! { ::core::option::Option::Some(#module) }
                }
                None => quote! { ::core::option::Option::None },
            },
            None => quote! { ::core::option::Option::Some(::core::module_path!()) },
        }
    }
}
