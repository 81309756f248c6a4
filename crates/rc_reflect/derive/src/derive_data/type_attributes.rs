use proc_macro2::Span;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Attributes given as `#[reflect(...)]` on the type.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `default`: the type implements `Default`.
    pub default: Option<Span>,
    /// `clone`: the type implements `Clone`.
    pub clone: Option<Span>,
    /// `auto_register`
    pub auto_register: Option<Span>,
    /// `type_path = "..."`
    pub type_path: Option<LitStr>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();
        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                let span = meta.path.get_ident().map(syn::Ident::span);
                if meta.path.is_ident("default") {
                    res.default = span;
                } else if meta.path.is_ident("clone") {
                    res.clone = span;
                } else if meta.path.is_ident("auto_register") {
                    res.auto_register = span;
                } else if meta.path.is_ident("type_path") {
                    let lit: LitStr = meta.value()?.parse()?;
                    let path = lit.value();
                    if path.is_empty() || path.starts_with("::") || path.ends_with("::") {
                        return Err(syn::Error::new(lit.span(), "expected a path such as `my_crate::Foo`"));
                    }
                    res.type_path = Some(lit);
                } else {
                    return Err(meta.error(
                        "unknown attribute, expected `default`, `clone`, `auto_register` or `type_path`",
                    ));
                }
                Ok(())
            })?;
        }
        Ok(res)
    }
}
