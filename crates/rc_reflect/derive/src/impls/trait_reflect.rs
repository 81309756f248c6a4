use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generates the `Reflect` implementation of a struct.
pub(crate) fn impl_trait_reflect(info: &ReflectStruct) -> TokenStream {
    let rc_reflect_path = info.rc_reflect_path();
    let reflect_ = crate::path::reflect_(rc_reflect_path);
    let from_reflect_ = crate::path::from_reflect_(rc_reflect_path);
    let info_ = crate::path::info_(rc_reflect_path);
    let ops_ = crate::path::ops_(rc_reflect_path);
    let impls_ = crate::path::impls_(rc_reflect_path);
    let alloc_utils_ = crate::path::alloc_utils_(rc_reflect_path);
    let ident = info.ident();

    let reflect_clone_tokens = get_struct_clone_impl(info);

    quote! {
        impl #reflect_ for #ident {
            fn set(
                &mut self,
                value: #alloc_utils_::Box<dyn #reflect_>,
            ) -> ::core::result::Result<(), #alloc_utils_::Box<dyn #reflect_>> {
                *self = <Self as #from_reflect_>::take_from_reflect(value)?;
                ::core::result::Result::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #info_::ReflectKind {
                #info_::ReflectKind::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #ops_::ReflectRef<'_> {
                #ops_::ReflectRef::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #ops_::ReflectMut<'_> {
                #ops_::ReflectMut::Struct(self)
            }

            #[inline]
            fn reflect_owned(self: #alloc_utils_::Box<Self>) -> #ops_::ReflectOwned {
                #ops_::ReflectOwned::Struct(self)
            }

            #reflect_clone_tokens

            #[inline]
            fn reflect_partial_eq(&self, other: &dyn #reflect_) -> ::core::option::Option<bool> {
                #impls_::struct_partial_eq(self, other)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #impls_::struct_debug(self, f)
            }
        }
    }
}

/// `reflect_clone` through `Clone` with `#[reflect(clone)]`, otherwise
/// field by field, filling ignored fields with `Default::default()`.
fn get_struct_clone_impl(info: &ReflectStruct) -> TokenStream {
    let rc_reflect_path = info.rc_reflect_path();
    let reflect_ = crate::path::reflect_(rc_reflect_path);
    let from_reflect_ = crate::path::from_reflect_(rc_reflect_path);
    let info_ = crate::path::info_(rc_reflect_path);
    let ops_ = crate::path::ops_(rc_reflect_path);
    let alloc_utils_ = crate::path::alloc_utils_(rc_reflect_path);

    let body = if info.attrs().clone.is_some() {
        quote! {
            ::core::result::Result::Ok(#alloc_utils_::Box::new(<Self as ::core::clone::Clone>::clone(self)))
        }
    } else {
        let fields = info.fields().iter().map(|field| {
            let member = field.ident;
            let ty = field.ty;
            if field.attrs.ignore {
                return quote!(#member: ::core::default::Default::default());
            }
            let name = field.name();
            quote! {
                #member: <#ty as #from_reflect_>::take_from_reflect(
                    #reflect_::reflect_clone(&self.#member)?
                )
                .map_err(|_| #ops_::ReflectCloneError::FieldNotCloneable {
                    type_path: #alloc_utils_::Cow::Borrowed(<Self as #info_::TypePath>::type_path()),
                    field: #alloc_utils_::Cow::Borrowed(#name),
                })?
            }
        });
        quote! {
            ::core::result::Result::Ok(#alloc_utils_::Box::new(Self {
                #(#fields,)*
            }))
        }
    };

    quote! {
        fn reflect_clone(
            &self,
        ) -> ::core::result::Result<#alloc_utils_::Box<dyn #reflect_>, #ops_::ReflectCloneError> {
            #body
        }
    }
}
