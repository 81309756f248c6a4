use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generates the `Typed` implementation, building a `StructInfo` once.
pub(crate) fn impl_trait_typed(info: &ReflectStruct) -> TokenStream {
    let rc_reflect_path = info.rc_reflect_path();
    let info_ = crate::path::info_(rc_reflect_path);
    let impls_ = crate::path::impls_(rc_reflect_path);
    let ident = info.ident();

    let fields = info.active_fields().map(|field| {
        let ty = field.ty;
        let name = field.name();
        let visibility = if field.is_public {
            quote!(#info_::Visibility::Public)
        } else {
            quote!(#info_::Visibility::NonPublic)
        };
        let read_only = field.attrs.read_only;
        let base = field.attrs.base;
        quote! {
            #info_::NamedField::new::<#ty>(#name)
                .with_visibility(#visibility)
                .with_read_only(#read_only)
                .with_base(#base)
        }
    });

    quote! {
        impl #info_::Typed for #ident {
            fn type_info() -> &'static #info_::TypeInfo {
                static CELL: #impls_::NonGenericTypeInfoCell = #impls_::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    #info_::TypeInfo::Struct(#info_::StructInfo::new::<Self>(&[
                        #(#fields),*
                    ]))
                })
            }
        }
    }
}
