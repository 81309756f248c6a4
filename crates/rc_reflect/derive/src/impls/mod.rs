//! Code generation, one file per generated trait.

// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod struct_kind;
mod trait_get_type_meta;
mod trait_reflect;
mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use auto_register::get_auto_register_impl;
use struct_kind::impl_trait_struct;
use trait_get_type_meta::impl_trait_get_type_meta;
use trait_reflect::impl_trait_reflect;
use trait_type_path::impl_trait_type_path;
use trait_typed::impl_trait_typed;

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Implements full reflection for a struct.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let type_path_trait_tokens = impl_trait_type_path(info);
    let typed_trait_tokens = impl_trait_typed(info);
    let struct_trait_tokens = impl_trait_struct(info);
    let reflect_trait_tokens = impl_trait_reflect(info);
    let get_type_meta_tokens = impl_trait_get_type_meta(info);
    let auto_register_tokens = get_auto_register_impl(info);

    let from_reflect_ = crate::path::from_reflect_(info.rc_reflect_path());
    let ident = info.ident();

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens

        impl #from_reflect_ for #ident {}

        #get_type_meta_tokens

        #auto_register_tokens
    }
}
