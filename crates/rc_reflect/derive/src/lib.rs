//! `#[derive(Reflect)]` for `rc_reflect`.
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection for structs
///
/// `#[derive(Reflect)]` implements `TypePath`, `Typed`, `Struct`, `Reflect`,
/// `FromReflect` and `GetTypeMeta` for a struct with named fields, or a unit
/// struct. Enums, tuple structs and generic structs are rejected.
///
/// Public (`pub`) fields are public properties; every other field is
/// non-public.
///
/// ## Type attributes
///
/// - `default`: the type implements `Default`. Registers the default
///   constructor (`TypeTraitDefault`), which conversions need to create
///   instances of the type.
/// - `clone`: the type implements `Clone`, used by `reflect_clone` instead
///   of cloning field by field.
/// - `type_path = "my_crate::models::Foo"`: overrides the type path, which
///   defaults to `module_path!()` joined with the identifier.
/// - `auto_register`: collect the type for `TypeRegistry::auto_register`.
///   No-op without the `auto_register` feature.
///
/// ```rust, ignore
/// #[derive(Reflect, Default, Clone)]
/// #[reflect(default, clone, auto_register)]
/// struct Order { /* ... */ }
/// ```
///
/// ## Field attributes
///
/// - `rename = "Name"`: the reflected name, i.e. the record key, differs
///   from the Rust identifier.
/// - `ignore`: the field is invisible to reflection. Field-wise cloning
///   fills it with `Default::default()`.
/// - `read_only`: the property can be read but conversions never write it.
/// - `base`: the field holds the base part of the type. Its properties are
///   inherited by this type; the base field itself is not a property. At
///   most one field can be a base.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Customer {
///     #[reflect(base)]
///     entity: Entity,
///     #[reflect(rename = "DisplayName")]
///     pub display_name: String,
///     #[reflect(read_only)]
///     pub version: u32,
///     #[reflect(ignore)]
///     cache: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectStruct::from_ast(&ast) {
        Ok(info) => impls::impl_struct(&info).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
