use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// Provides the static [`TypeInfo`] of a type.
///
/// Implementations build the info once and keep it in a static cell, see
/// [`NonGenericTypeInfoCell`](crate::impls::NonGenericTypeInfoCell) and
/// [`GenericTypeInfoCell`](crate::impls::GenericTypeInfoCell).
///
/// # Examples
///
/// ```
/// use rc_reflect::info::{Typed, ReflectKind};
///
/// assert_eq!(<Vec<i32>>::type_info().kind(), ReflectKind::List);
/// assert_eq!(<Option<i32>>::type_info().kind(), ReflectKind::Optional);
/// ```
pub trait Typed: TypePath {
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Object-safe access to [`Typed`] through a value.
pub trait DynamicTyped {
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
