//! Compile-time type descriptors and dynamic value access.
//!
//! Types opt in with `#[derive(Reflect)]` (or a hand-written impl for
//! primitives and containers) and can then be inspected and mutated through
//! `&dyn Reflect` without knowing the concrete type:
//!
//! - [`info`]: static descriptors ([`TypeInfo`](info::TypeInfo)), including
//!   the [`Shape`](info::Shape) used to decide how a value is converted.
//! - [`ops`]: per-kind access traits such as [`Struct`](ops::Struct) and
//!   [`List`](ops::List).
//! - [`registry`]: [`TypeMeta`](registry::TypeMeta) capability tables
//!   (e.g. the default constructor) and the [`TypeRegistry`](registry::TypeRegistry).
//! - [`Record`]: the loosely typed string-keyed map used as the dynamic side
//!   of a conversion.
//!
//! # Example
//!
//! ```
//! use rc_reflect::{Reflect, derive::Reflect, info::Typed, ops::ReflectMut};
//!
//! #[derive(Reflect, Default)]
//! #[reflect(default)]
//! struct Point {
//!     pub x: i32,
//!     pub y: i32,
//! }
//!
//! let mut point = Point::default();
//! let ReflectMut::Struct(fields) = point.reflect_mut() else { unreachable!() };
//! fields.field_mut("x").unwrap().set(Box::new(4_i32)).unwrap();
//!
//! assert_eq!(point.x, 4);
//! assert_eq!(Point::type_info().type_name(), "Point");
//! ```

// -----------------------------------------------------------------------------
// Extern Self

// Derive output names items through `::rc_reflect`, which must also resolve
// inside this crate.
extern crate self as rc_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod record;
mod reflection;

pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use rc_reflect_derive as derive;
pub use record::{Record, RecordIntoIter, RecordIter};
pub use reflection::{FromReflect, Reflect};
