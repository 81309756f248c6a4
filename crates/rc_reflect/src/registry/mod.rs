//! Capability tables for reflected types.
//!
//! - [`TypeTrait`]: a capability of a type, such as building a default value.
//! - [`FromType`]: creates a `TypeTrait` for a concrete type.
//! - [`TypeMeta`]: a [`TypeInfo`](crate::info::TypeInfo) together with a
//!   table of `TypeTrait`s.
//! - [`GetTypeMeta`]: builds the `TypeMeta` of a type.
//! - [`TypeRegistry`]: `TypeMeta`s by `TypeId`, type path or type name.
//! - [`TypeTraitDefault`]: the default constructor of a type.
//!
//! A registry is optional for conversions: the `TypeMeta` of any reflected
//! type is reachable through its [`Type`](crate::info::Type).
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`]. Registration at link time relies on
//! the [`inventory`](https://docs.rs/inventory) crate; on platforms it does
//! not support, `auto_register` does nothing and returns `false`.

// -----------------------------------------------------------------------------
// Modules

mod default;
mod from_type;
mod type_meta;
mod type_registry;
mod type_trait;

// -----------------------------------------------------------------------------
// Exports

pub use default::TypeTraitDefault;
pub use from_type::FromType;
pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::TypeRegistry;
pub use type_trait::TypeTrait;
