use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::ops::ReflectCloneError;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTraitDefault};
use crate::{FromReflect, Reflect};

// Opaque values that are `Clone + PartialEq + Debug + Default`.
macro_rules! impl_reflect_opaque {
    ($ty:ty, $name:literal) => {
        impl_reflect_opaque!(@impl $ty, $name, $name, None);
    };
    ($ty:ty, $name:literal, $module:literal) => {
        impl_reflect_opaque!(@impl $ty, concat!($module, "::", $name), $name, Some($module));
    };
    (@impl $ty:ty, $path:expr, $name:literal, $module:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            crate::reflection::impl_reflect_cast_fn!(Opaque);

            #[inline]
            fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
                Ok(Box::new(Clone::clone(self)))
            }

            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                Some(other.downcast_ref::<Self>().is_some_and(|other| self == other))
            }

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }

        impl FromReflect for $ty {}

        impl GetTypeMeta for $ty {
            fn get_type_meta() -> TypeMeta {
                let mut meta = TypeMeta::with_capacity::<Self>(1);
                meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
                meta
            }
        }
    };
}

impl_reflect_opaque!(bool, "bool");
impl_reflect_opaque!(char, "char");
impl_reflect_opaque!(f32, "f32");
impl_reflect_opaque!(f64, "f64");
impl_reflect_opaque!(i8, "i8");
impl_reflect_opaque!(i16, "i16");
impl_reflect_opaque!(i32, "i32");
impl_reflect_opaque!(i64, "i64");
impl_reflect_opaque!(i128, "i128");
impl_reflect_opaque!(isize, "isize");
impl_reflect_opaque!(u8, "u8");
impl_reflect_opaque!(u16, "u16");
impl_reflect_opaque!(u32, "u32");
impl_reflect_opaque!(u64, "u64");
impl_reflect_opaque!(u128, "u128");
impl_reflect_opaque!(usize, "usize");
impl_reflect_opaque!(String, "String", "alloc::string");

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::registry::{GetTypeMeta, TypeTraitDefault};

    #[test]
    fn primitive_paths() {
        assert_eq!(i32::type_path(), "i32");
        assert_eq!(i32::module_path(), None);
        assert_eq!(String::type_path(), "alloc::string::String");
        assert_eq!(String::type_name(), "String");
        assert_eq!(f64::type_info().kind(), ReflectKind::Opaque);
    }

    #[test]
    fn primitives_have_default() {
        let meta = u16::get_type_meta();
        let value = meta.get_trait::<TypeTraitDefault>().unwrap().default();
        assert_eq!(value.downcast_ref::<u16>(), Some(&0));
    }

    #[test]
    fn equality_requires_same_type() {
        assert_eq!(1_i32.reflect_partial_eq(&1_i32), Some(true));
        assert_eq!(1_i32.reflect_partial_eq(&1_i64), Some(false));
        assert_eq!(f32::NAN.reflect_partial_eq(&f32::NAN), Some(false));
    }
}
