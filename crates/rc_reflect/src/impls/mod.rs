//! Reflection for foreign types and shared helpers for implementations.
//!
//! Implemented here:
//!
//! - `bool` `char` `f32` `f64` `String`
//! - `i8` `i16` `i32` `i64` `i128` `isize`
//! - `u8` `u16` `u32` `u64` `u128` `usize`
//! - `Vec<T>`, `Box<[T]>`
//! - `Option<T>`
//!
//! The `*_debug` and `*_partial_eq` functions implement the matching
//! [`Reflect`] methods by kind and are used by derived code.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod list;
mod option;
mod primitives;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeCell, NonGenericTypeCell};
pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

use core::fmt;

use crate::Reflect;
use crate::ops::{List, Optional, ReflectRef, Struct};

/// Concatenates string slices with a single allocation.
///
/// Used to build the paths of generic types.
///
/// ```
/// let s = rc_reflect::impls::concat(&["alloc::vec::Vec", "<", "u8", ">"]);
/// assert_eq!(s, "alloc::vec::Vec<u8>");
/// assert_eq!(s.capacity(), 19);
/// ```
#[inline(never)]
pub fn concat(parts: &[&str]) -> alloc::string::String {
    let len = parts.iter().map(|part| part.len()).sum();
    let mut res = alloc::string::String::with_capacity(len);
    for part in parts {
        res.push_str(part);
    }
    res
}

// -----------------------------------------------------------------------------
// Debug

/// Formats a struct as `TypeName { field: value, .. }`.
pub fn struct_debug(data: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(data.reflect_type_name());
    for (name, value) in data.iter_fields() {
        debug.field(name, &value as &dyn fmt::Debug);
    }
    debug.finish()
}

/// Formats a list as `[a, b, ..]`.
pub fn list_debug(data: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(data.iter()).finish()
}

/// Formats an optional as `Some(value)` or `None`.
pub fn optional_debug(data: &dyn Optional, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match data.value() {
        Some(value) => f.debug_tuple("Some").field(&value).finish(),
        None => f.write_str("None"),
    }
}

// -----------------------------------------------------------------------------
// PartialEq

/// Field-wise equality of two structs of the same type.
pub fn struct_partial_eq(data: &dyn Struct, other: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Struct(other) = other.reflect_ref() else {
        return Some(false);
    };
    if data.ty_id() != other.ty_id() || data.field_len() != other.field_len() {
        return Some(false);
    }
    for (name, value) in data.iter_fields() {
        let Some(other_value) = other.field(name) else {
            return Some(false);
        };
        if !value.reflect_partial_eq(other_value)? {
            return Some(false);
        }
    }
    Some(true)
}

/// Item-wise equality of two lists, regardless of their concrete types.
pub fn list_partial_eq(data: &dyn List, other: &dyn Reflect) -> Option<bool> {
    let ReflectRef::List(other) = other.reflect_ref() else {
        return Some(false);
    };
    if data.len() != other.len() {
        return Some(false);
    }
    for (a, b) in data.iter().zip(other.iter()) {
        if !a.reflect_partial_eq(b)? {
            return Some(false);
        }
    }
    Some(true)
}

/// Equality of two optionals by their contained values.
pub fn optional_partial_eq(data: &dyn Optional, other: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Optional(other) = other.reflect_ref() else {
        return Some(false);
    };
    match (data.value(), other.value()) {
        (Some(a), Some(b)) => a.reflect_partial_eq(b),
        (None, None) => Some(true),
        _ => Some(false),
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;

    #[test]
    fn lists_compare_across_types() {
        let vec = vec![1_i32, 2];
        let boxed: Box<[i32]> = Box::new([1, 2]);
        assert_eq!(vec.reflect_partial_eq(&boxed), Some(true));
        assert_eq!(vec.reflect_partial_eq(&vec![1_i32]), Some(false));
        assert_eq!(vec.reflect_partial_eq(&1_i32), Some(false));
    }

    #[test]
    fn optionals_compare_by_value() {
        assert_eq!(Some(1_u8).reflect_partial_eq(&Some(1_u8)), Some(true));
        assert_eq!(Some(1_u8).reflect_partial_eq(&None::<u8>), Some(false));
        assert_eq!(None::<u8>.reflect_partial_eq(&None::<u8>), Some(true));
    }
}
