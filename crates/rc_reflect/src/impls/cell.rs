//! Static storage for lazily built type information.
//!
//! A `static` inside a generic function is shared by every instantiation,
//! so generic types key their entries by `TypeId` ([`GenericTypeCell`]),
//! while non-generic types use a plain [`OnceLock`] ([`NonGenericTypeCell`]).
//!
//! ```
//! use rc_reflect::impls::{GenericTypeInfoCell, NonGenericTypeInfoCell};
//! use rc_reflect::info::{OpaqueInfo, TypeInfo};
//!
//! fn info_of<T: rc_reflect::registry::GetTypeMeta>() -> &'static TypeInfo {
//!     static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
//!     CELL.get_or_insert::<T>(|| TypeInfo::Opaque(OpaqueInfo::new::<T>()))
//! }
//!
//! assert!(info_of::<u8>().type_is::<u8>());
//! assert!(info_of::<u16>().type_is::<u16>());
//! assert!(core::ptr::eq(info_of::<u8>(), info_of::<u8>()));
//! # let _ = NonGenericTypeInfoCell::new();
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use rc_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;
    use alloc::string::String;

    pub trait TypedProperty: Send + Sync + 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

/// Lazily initialized storage for a non-generic type.
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// Stores the [`TypeInfo`] of a non-generic type.
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> T) -> &T {
        self.0.get_or_init(f)
    }
}

/// Per-instantiation storage for a generic type.
///
/// Values are leaked once created, so the returned references live as long
/// as the cell.
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

/// Stores the [`TypeInfo`] of each instantiation of a generic type.
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Stores the type path (or name) of each instantiation of a generic type.
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        let cached = self
            .0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied();
        match cached {
            Some(value) => value,
            // `f` may need other cells, so it runs without holding the lock.
            None => {
                let value = f();
                let mut table = self.0.write().unwrap_or_else(PoisonError::into_inner);
                *table.get_or_insert(type_id, || &*Box::leak(Box::new(value)))
            }
        }
    }
}
