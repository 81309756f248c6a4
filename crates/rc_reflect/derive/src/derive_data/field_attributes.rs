use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Attributes given as `#[reflect(...)]` on a field.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub rename: Option<LitStr>,
    pub ignore: bool,
    pub read_only: bool,
    pub base: bool,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();
        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "field name cannot be empty"));
                    }
                    res.rename = Some(lit);
                } else if meta.path.is_ident("ignore") {
                    res.ignore = true;
                } else if meta.path.is_ident("read_only") {
                    res.read_only = true;
                } else if meta.path.is_ident("base") {
                    res.base = true;
                } else {
                    return Err(meta.error(
                        "unknown field attribute, expected `rename`, `ignore`, `read_only` or `base`",
                    ));
                }
                Ok(())
            })?;
        }
        Ok(res)
    }
}
