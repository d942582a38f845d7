use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Ident, Type, spanned::Spanned};

use super::{FieldAttributes, ReflectMeta};

/// A named field of a reflected struct.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    /// The field name as written to serialized data, without `r#`.
    pub name: String,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

/// A struct whose named fields are exposed through `Struct`.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn new(meta: ReflectMeta<'a>, ast: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new(
                ast.ident.span(),
                "`Reflect` can only decompose structs, mark the type `#[reflect(opaque)]`",
            ));
        };

        let fields = match &data.fields {
            Fields::Named(named) => named
                .named
                .iter()
                .map(|field| {
                    let ident = field.ident.as_ref().ok_or_else(|| {
                        syn::Error::new(field.span(), "expected a named field")
                    })?;
                    Ok(StructField {
                        ident,
                        name: ident.unraw().to_string(),
                        ty: &field.ty,
                        attrs: FieldAttributes::parse_attrs(&field.attrs)?,
                    })
                })
                .collect::<syn::Result<Vec<_>>>()?,
            Fields::Unit => Vec::new(),
            Fields::Unnamed(unnamed) => {
                return Err(syn::Error::new(
                    unnamed.span(),
                    "`Reflect` does not decompose tuple structs, \
                     use named fields or mark the type `#[reflect(opaque)]`",
                ));
            }
        };

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Fields without `#[reflect(skip)]`, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.attrs.skip.is_none())
    }

    /// Distinct types of the active fields.
    pub fn active_types(&self) -> Vec<&'a Type> {
        let mut types: Vec<&'a Type> = Vec::new();
        for field in self.active_fields() {
            if !types.contains(&field.ty) {
                types.push(field.ty);
            }
        }
        types
    }
}
