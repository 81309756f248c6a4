use crate::info::{Type, impl_type_fn};
use crate::registry::GetTypeMeta;

/// Type information of a value without reflected structure.
///
/// Numbers, `bool`, `char` and `String` are opaque, and so are the dynamic
/// containers whose structure is only known per value.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<T: GetTypeMeta>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}

/// Type information of [`Record`](crate::Record).
#[derive(Debug, Clone)]
pub struct RecordInfo {
    ty: Type,
}

impl RecordInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<T: GetTypeMeta>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
