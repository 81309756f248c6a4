//! Paths into `rc_reflect` used by the generated code.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// The path of the `rc_reflect` crate, as seen from the deriving crate.
///
/// - `::rc_reflect` for crates depending on `rc_reflect`.
/// - `::recast::reflect` for crates depending on `recast`.
/// - `::rc_reflect` otherwise, which may be wrong.
///
/// Reads the caller's `Cargo.toml`, so it is resolved once per derive.
pub(crate) fn rc_reflect() -> syn::Path {
    rc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("rc_reflect"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn reflect_(rc_reflect_path: &syn::Path) -> TokenStream {
    quote!(#rc_reflect_path::Reflect)
}

#[inline(always)]
pub(crate) fn from_reflect_(rc_reflect_path: &syn::Path) -> TokenStream {
    quote!(#rc_reflect_path::FromReflect)
}

#[inline(always)]
pub(crate) fn info_(rc_reflect_path: &syn::Path) -> TokenStream {
    quote!(#rc_reflect_path::info)
}

#[inline(always)]
pub(crate) fn ops_(rc_reflect_path: &syn::Path) -> TokenStream {
    quote!(#rc_reflect_path::ops)
}

#[inline(always)]
pub(crate) fn registry_(rc_reflect_path: &syn::Path) -> TokenStream {
    quote!(#rc_reflect_path::registry)
}

#[inline(always)]
pub(crate) fn impls_(rc_reflect_path: &syn::Path) -> TokenStream {
    quote!(#rc_reflect_path::impls)
}

#[inline(always)]
pub(crate) fn alloc_utils_(rc_reflect_path: &syn::Path) -> TokenStream {
    quote!(#rc_reflect_path::__macro_exports::alloc_utils)
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(rc_reflect_path: &syn::Path) -> TokenStream {
    quote!(#rc_reflect_path::__macro_exports::auto_register)
}
