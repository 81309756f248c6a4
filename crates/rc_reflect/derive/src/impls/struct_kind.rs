use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generates the `Struct` implementation over the active fields.
pub(crate) fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let rc_reflect_path = info.rc_reflect_path();
    let ops_ = crate::path::ops_(rc_reflect_path);
    let reflect_ = crate::path::reflect_(rc_reflect_path);
    let ident = info.ident();

    let names = info.active_fields().map(|field| field.name()).collect::<Vec<_>>();
    let members = info.active_fields().map(|field| field.ident).collect::<Vec<_>>();
    let indices = (0..members.len()).map(syn::Index::from).collect::<Vec<_>>();
    let field_count = members.len();

    quote! {
        impl #ops_::Struct for #ident {
            fn field(&self, name: &str) -> ::core::option::Option<&dyn #reflect_> {
                match name {
                    #(#names => ::core::option::Option::Some(&self.#members),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> ::core::option::Option<&mut dyn #reflect_> {
                match name {
                    #(#names => ::core::option::Option::Some(&mut self.#members),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                match index {
                    #(#indices => ::core::option::Option::Some(&self.#members),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #reflect_> {
                match index {
                    #(#indices => ::core::option::Option::Some(&mut self.#members),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn name_at(&self, index: usize) -> ::core::option::Option<&str> {
                match index {
                    #(#indices => ::core::option::Option::Some(#names),)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> #ops_::StructFieldIter<'_> {
                #ops_::StructFieldIter::new(self)
            }
        }
    }
}
