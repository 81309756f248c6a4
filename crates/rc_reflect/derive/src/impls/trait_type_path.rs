use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generates the `TypePath` implementation.
pub(crate) fn impl_trait_type_path(info: &ReflectStruct) -> TokenStream {
    let info_ = crate::path::info_(info.rc_reflect_path());
    let ident = info.ident();
    let (type_path, type_ident, module_path) = info.type_path_tokens();

    quote! {
        impl #info_::TypePath for #ident {
            #[inline]
            fn type_path() -> &'static str {
                #type_path
            }

            #[inline]
            fn type_name() -> &'static str {
                #type_ident
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
