use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

fn set_flag(flag: &mut Option<Span>, meta: &ParseNestedMeta) -> syn::Result<()> {
    if flag.is_some() {
        return Err(meta.error("duplicate reflect attribute"));
    }
    *flag = Some(meta.path.get_ident().map_or_else(Span::call_site, |i| i.span()));
    Ok(())
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Type-level `#[reflect(...)]` attributes.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `type_path = "..."`
    pub type_path: Option<LitStr>,
    /// `default`
    pub default: Option<Span>,
    /// `opaque`
    pub opaque: Option<Span>,
    /// `auto_register`
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    if res.type_path.is_some() {
                        return Err(meta.error("duplicate `type_path` attribute"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    check_type_path(&lit)?;
                    res.type_path = Some(lit);
                    Ok(())
                } else if meta.path.is_ident("default") {
                    set_flag(&mut res.default, &meta)
                } else if meta.path.is_ident("opaque") {
                    set_flag(&mut res.opaque, &meta)
                } else if meta.path.is_ident("auto_register") {
                    set_flag(&mut res.auto_register, &meta)
                } else {
                    Err(meta.error(
                        "unsupported reflect attribute, expected one of \
                         `type_path`, `default`, `opaque`, `auto_register`",
                    ))
                }
            })?;
        }

        Ok(res)
    }
}

fn check_type_path(lit: &LitStr) -> syn::Result<()> {
    let path = lit.value();
    let valid = !path.is_empty()
        && !path.starts_with("::")
        && !path.contains(['<', '>', ' '])
        && path.split("::").all(|segment| !segment.is_empty());
    if valid {
        Ok(())
    } else {
        Err(syn::Error::new(
            lit.span(),
            "`type_path` must look like `crate_name::module::Type`, without generics",
        ))
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Field-level `#[reflect(...)]` attributes.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `skip`
    pub skip: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    set_flag(&mut res.skip, &meta)
                } else {
                    Err(meta.error("unsupported reflect field attribute, expected `skip`"))
                }
            })?;
        }

        Ok(res)
    }
}
