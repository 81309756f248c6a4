use std::collections::BTreeMap;

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, Type, Visibility};

use super::{FieldAttributes, TypeAttributes};

/// A field of the deriving struct.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
    pub is_public: bool,
}

impl StructField<'_> {
    /// The reflected name, the record key of the field.
    pub fn name(&self) -> String {
        match &self.attrs.rename {
            Some(lit) => lit.value(),
            None => self.ident.to_string(),
        }
    }
}

/// A struct accepted by `#[derive(Reflect)]`.
pub(crate) struct ReflectStruct<'a> {
    rc_reflect_path: syn::Path,
    ident: &'a Ident,
    attrs: TypeAttributes,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new(
                ast.generics.span(),
                "`#[derive(Reflect)]` does not support generic types",
            ));
        }

        let fields = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => fields.named.iter().collect::<Vec<_>>(),
                Fields::Unit => Vec::new(),
                Fields::Unnamed(fields) => {
                    return Err(syn::Error::new(
                        fields.span(),
                        "`#[derive(Reflect)]` only supports structs with named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`#[derive(Reflect)]` does not support enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`#[derive(Reflect)]` does not support unions",
                ));
            }
        };

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let mut res = Vec::with_capacity(fields.len());
        let mut names = BTreeMap::new();
        let mut has_base = false;
        for field in fields {
            let Some(ident) = field.ident.as_ref() else {
                return Err(syn::Error::new(field.span(), "expected a named field"));
            };
            let field = StructField {
                ident,
                ty: &field.ty,
                attrs: FieldAttributes::parse_attrs(&field.attrs)?,
                is_public: matches!(field.vis, Visibility::Public(_)),
            };

            if field.attrs.ignore {
                if field.attrs.base || field.attrs.read_only || field.attrs.rename.is_some() {
                    return Err(syn::Error::new(
                        ident.span(),
                        "`ignore` cannot be combined with other field attributes",
                    ));
                }
                res.push(field);
                continue;
            }
            if field.attrs.base {
                if has_base {
                    return Err(syn::Error::new(ident.span(), "a struct can have at most one `base` field"));
                }
                has_base = true;
            }
            if names.insert(field.name(), ident.span()).is_some() {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("duplicate reflected field name `{}`", field.name()),
                ));
            }
            res.push(field);
        }

        Ok(Self {
            rc_reflect_path: crate::path::rc_reflect(),
            ident: &ast.ident,
            attrs,
            fields: res,
        })
    }

    #[inline]
    pub fn rc_reflect_path(&self) -> &syn::Path {
        &self.rc_reflect_path
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    /// All fields, ignored ones included.
    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Fields visible to reflection, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| !field.attrs.ignore)
    }

    /// Field types of the active fields, without duplicates.
    pub fn active_types(&self) -> Vec<&Type> {
        let mut seen = BTreeMap::new();
        for field in self.active_fields() {
            seen.entry(field.ty.to_token_stream().to_string())
                .or_insert(field.ty);
        }
        seen.into_values().collect()
    }

    /// Expression of the `type_path`, `type_ident` and `module_path` strings.
    pub fn type_path_tokens(&self) -> (TokenStream, TokenStream, TokenStream) {
        match &self.attrs.type_path {
            Some(lit) => {
                let path = lit.value();
                let (module, ident) = match path.rsplit_once("::") {
                    Some((module, ident)) => (quote!(::core::option::Option::Some(#module)), ident.to_owned()),
                    None => (quote!(::core::option::Option::None), path.clone()),
                };
                (quote!(#lit), quote!(#ident), module)
            }
            None => {
                let ident = self.ident.to_string();
                (
                    quote!(::core::concat!(::core::module_path!(), "::", #ident)),
                    quote!(#ident),
                    quote!(::core::option::Option::Some(::core::module_path!())),
                )
            }
        }
    }
}
