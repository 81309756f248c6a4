//! Per-kind access to reflected values.
//!
//! - [`Struct`]: named fields of a struct, by name or by index.
//! - [`List`]: ordered items of `Vec<T>`, `Box<[T]>` or [`DynamicList`].
//! - [`Optional`]: the value inside an `Option<T>`, if any.
//!
//! [`ReflectRef`], [`ReflectMut`] and [`ReflectOwned`] select the matching
//! trait for a `dyn Reflect`. [`Record`](crate::Record) is accessed directly.
//!
//! [`DynamicList`] is the untyped sequence found in loosely typed payloads:
//! its kind is `List`, but its `TypeInfo` is opaque since the item type is
//! only known per item.

// -----------------------------------------------------------------------------
// Modules

mod clone_error;
mod kind;
mod list_ops;
mod optional_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use clone_error::ReflectCloneError;
pub use kind::{ReflectMut, ReflectOwned, ReflectRef};
pub use list_ops::{DynamicList, List, ListItemIter};
pub use optional_ops::Optional;
pub use struct_ops::{Struct, StructFieldIter};
