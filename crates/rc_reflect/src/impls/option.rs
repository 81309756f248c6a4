use alloc::boxed::Box;

use crate::impls::{self, GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{OptionalInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Optional, ReflectCloneError};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeRegistry, TypeTraitDefault};
use crate::{FromReflect, Reflect};

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| impls::concat(&["core::option::Option<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| impls::concat(&["Option<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Option"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::option")
    }
}

impl<T: FromReflect + GetTypeMeta> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Optional(OptionalInfo::new::<Self, T>()))
    }
}

impl<T: FromReflect + GetTypeMeta> Reflect for Option<T> {
    crate::reflection::impl_reflect_cast_fn!(Optional);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let Some(value) = self else {
            return Ok(Box::new(None::<T>));
        };
        let value = T::take_from_reflect(value.reflect_clone()?).map_err(|_| {
            ReflectCloneError::NotSupport {
                type_path: Self::type_path().into(),
            }
        })?;
        Ok(Box::new(Some(value)))
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        impls::optional_partial_eq(self, other)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        impls::optional_debug(self, f)
    }
}

impl<T: FromReflect + GetTypeMeta> FromReflect for Option<T> {
    /// Accepts an `Option<T>` as is, or a value `T` wrapped in `Some`.
    fn take_from_reflect(reflect: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        match reflect.take::<Self>() {
            Ok(value) => Ok(value),
            Err(reflect) => T::take_from_reflect(reflect).map(Some),
        }
    }
}

impl<T: FromReflect + GetTypeMeta> Optional for Option<T> {
    #[inline]
    fn value(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(Reflect::as_reflect)
    }

    #[inline]
    fn value_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(Reflect::as_reflect_mut)
    }
}

impl<T: FromReflect + GetTypeMeta> GetTypeMeta for Option<T> {
    fn get_type_meta() -> TypeMeta {
        let mut meta = TypeMeta::with_capacity::<Self>(1);
        meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
        meta
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use crate::info::{TypePath, Typed};
    use crate::{FromReflect, Reflect};

    #[test]
    fn option_info() {
        assert_eq!(<Option<i32>>::type_path(), "core::option::Option<i32>");
        assert_eq!(<Option<Vec<u8>>>::type_name(), "Option<Vec<u8>>");

        let info = <Option<String>>::type_info().as_optional().unwrap();
        assert!(info.inner_is::<String>());
        assert!(info.inner_info().type_is::<String>());
    }

    #[test]
    fn set_wraps_bare_values() {
        let mut value: Option<u64> = None;
        value.set(Box::new(9_u64)).unwrap();
        assert_eq!(value, Some(9));

        value.set(Box::new(None::<u64>)).unwrap();
        assert_eq!(value, None);

        assert!(value.set(Box::new(9_i64)).is_err());
    }

    #[test]
    fn nested_options_take_innermost() {
        let value = <Option<Option<u8>>>::take_from_reflect(Box::new(4_u8)).unwrap();
        assert_eq!(value, Some(Some(4)));
    }

    #[test]
    fn clone_and_debug() {
        let value = Some(String::from("x"));
        let copy = value.reflect_clone().unwrap();
        assert_eq!(copy.downcast_ref::<Option<String>>(), Some(&value));
        assert_eq!(format!("{copy:?}"), "Some(\"x\")");
        assert_eq!(format!("{:?}", &None::<u8> as &dyn Reflect), "None");
    }
}
