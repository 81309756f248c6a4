use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::derive_data::ReflectStruct;

/// Generates the `GetTypeMeta` implementation.
///
/// The field types are the dependencies of the type.
pub(crate) fn impl_trait_get_type_meta(info: &ReflectStruct) -> TokenStream {
    let registry_ = crate::path::registry_(info.rc_reflect_path());
    let ident = info.ident();
    let dependencies = info.active_types();

    let body = match info.attrs().default {
        Some(span) => quote_spanned! { span =>
            let mut meta = #registry_::TypeMeta::with_capacity::<Self>(1);
            meta.insert_trait::<#registry_::TypeTraitDefault>(
                <#registry_::TypeTraitDefault as #registry_::FromType<Self>>::from_type()
            );
            meta
        },
        None => quote! {
            #registry_::TypeMeta::of::<Self>()
        },
    };

    quote! {
        impl #registry_::GetTypeMeta for #ident {
            fn get_type_meta() -> #registry_::TypeMeta {
                #body
            }

            fn register_dependencies(_registry: &mut #registry_::TypeRegistry) {
                #(_registry.register::<#dependencies>();)*
            }
        }
    }
}
