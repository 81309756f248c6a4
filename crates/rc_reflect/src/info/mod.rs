//! Compile-time type information.
//!
//! - [`TypePath`]: stable names for a type (`type_path`, `type_name`, ...).
//! - [`Type`]: a `TypeId` together with its path table and a constructor
//!   for the type's [`TypeMeta`](crate::registry::TypeMeta).
//! - [`TypeInfo`]: a tagged variant over the reflected kinds:
//!     - [`StructInfo`]: named fields, visibility and an optional base field.
//!     - [`ListInfo`]: item type and a way to collect items into the list type.
//!     - [`OptionalInfo`]: the wrapped type of an `Option<T>`.
//!     - [`RecordInfo`]: the untyped [`Record`](crate::Record).
//!     - [`OpaqueInfo`]: everything treated as a single value (numbers, strings...).
//! - [`Shape`]: how a value of the type takes part in a conversion.
//! - [`Typed`]: obtains the static `TypeInfo` of a type.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod list_info;
mod opaque_info;
mod optional_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::{NamedField, Visibility};
pub use list_info::{CollectFn, ListInfo};
pub use opaque_info::{OpaqueInfo, RecordInfo};
pub use optional_info::OptionalInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, Shape, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath, TypePathTable};
pub use typed::{DynamicTyped, Typed};
