use core::any::{Any, TypeId};

use crate::info::{Type, TypeInfo, Typed, impl_type_fn};
use crate::registry::GetTypeMeta;

/// Type information of `Option<T>`.
///
/// Conversions treat an optional property like its wrapped type and wrap
/// the converted value in `Some`.
#[derive(Clone, Debug)]
pub struct OptionalInfo {
    ty: Type,
    inner_id: TypeId,
    inner_info: fn() -> &'static TypeInfo,
}

impl OptionalInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<TOption: GetTypeMeta, TInner: Typed>() -> Self {
        Self {
            ty: Type::of::<TOption>(),
            inner_id: TypeId::of::<TInner>(),
            inner_info: TInner::type_info,
        }
    }

    #[inline]
    pub const fn inner_id(&self) -> TypeId {
        self.inner_id
    }

    #[inline]
    pub fn inner_is<T: Any>(&self) -> bool {
        self.inner_id == TypeId::of::<T>()
    }

    #[inline]
    pub fn inner_info(&self) -> &'static TypeInfo {
        (self.inner_info)()
    }
}
