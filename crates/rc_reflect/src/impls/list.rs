use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::impls::{self, GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{ListInfo, TypeInfo, TypePath, Typed};
use crate::ops::{List, ListItemIter, ReflectCloneError};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeRegistry, TypeTraitDefault};
use crate::{FromReflect, Reflect};

// Clones every item, keeping the item type.
fn clone_items<T: FromReflect + TypePath>(items: &[T]) -> Result<Vec<T>, ReflectCloneError> {
    items
        .iter()
        .map(|item| {
            T::take_from_reflect(item.reflect_clone()?).map_err(|_| {
                ReflectCloneError::NotSupport {
                    type_path: T::type_path().into(),
                }
            })
        })
        .collect()
}

macro_rules! impl_reflect_list {
    ($ty:ty, $ident:literal, $prefix:literal, $suffix:literal, $module:literal) => {
        impl<T: TypePath> TypePath for $ty {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    impls::concat(&[$module, "::", $prefix, T::type_path(), $suffix])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| impls::concat(&[$prefix, T::type_name(), $suffix]))
            }

            #[inline]
            fn type_ident() -> &'static str {
                $ident
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl<T: FromReflect + GetTypeMeta> Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
            }
        }

        impl<T: FromReflect + GetTypeMeta> Reflect for $ty {
            crate::reflection::impl_reflect_cast_fn!(List);

            fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
                let items = clone_items::<T>(self)?;
                Ok(Box::new(items.into_iter().collect::<Self>()))
            }

            #[inline]
            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                impls::list_partial_eq(self, other)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                impls::list_debug(self, f)
            }
        }

        impl<T: FromReflect + GetTypeMeta> FromReflect for $ty {}

        impl<T: FromReflect + GetTypeMeta> GetTypeMeta for $ty {
            fn get_type_meta() -> TypeMeta {
                let mut meta = TypeMeta::with_capacity::<Self>(1);
                meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
                meta
            }

            fn register_dependencies(registry: &mut TypeRegistry) {
                registry.register::<T>();
            }
        }
    };
}

impl_reflect_list!(Vec<T>, "Vec", "Vec<", ">", "alloc::vec");
impl_reflect_list!(Box<[T]>, "Box", "Box<[", "]>", "alloc::boxed");

impl<T: FromReflect + GetTypeMeta> List for Vec<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(Reflect::as_reflect_mut)
    }

    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        Vec::push(self, T::take_from_reflect(value)?);
        Ok(())
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }

    fn drain(self: Box<Self>) -> Vec<Box<dyn Reflect>> {
        (*self).into_iter().map(Reflect::into_boxed_reflect).collect()
    }
}

impl<T: FromReflect + GetTypeMeta> List for Box<[T]> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        Err(value)
    }

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }

    fn drain(self: Box<Self>) -> Vec<Box<dyn Reflect>> {
        Vec::from(*self)
            .into_iter()
            .map(Reflect::into_boxed_reflect)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::{List, ReflectOwned};

    #[test]
    fn generic_paths() {
        assert_eq!(<Vec<Vec<u8>>>::type_path(), "alloc::vec::Vec<alloc::vec::Vec<u8>>");
        assert_eq!(<Box<[String]>>::type_path(), "alloc::boxed::Box<[alloc::string::String]>");
        assert_eq!(<Box<[String]>>::type_name(), "Box<[String]>");
        assert!(<Box<[u8]>>::type_info().as_list().unwrap().item_is::<u8>());
    }

    #[test]
    fn boxed_slice_is_fixed_size() {
        let mut items: Box<[u8]> = Box::new([1, 2]);
        assert!(List::push(&mut items, Box::new(3_u8)).is_err());
        assert_eq!(List::len(&items), 2);
    }

    #[test]
    fn push_checks_item_type() {
        let mut items = vec![1_u8];
        List::push(&mut items, Box::new(2_u8)).unwrap();
        assert!(List::push(&mut items, Box::new(3_u16)).is_err());
        assert_eq!(items, [1, 2]);
    }

    #[test]
    fn owned_drain() {
        let items: Box<dyn Reflect> = Box::new(vec![String::from("a"), String::from("b")]);
        let ReflectOwned::List(list) = items.reflect_owned() else {
            panic!("expected a list");
        };
        let drained = list.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[1].downcast_ref::<String>().unwrap(), "b");
    }

    #[test]
    fn clone_keeps_type() {
        let items: Box<[i64]> = Box::new([4, 5]);
        let copy = items.reflect_clone().unwrap();
        assert_eq!(copy.downcast_ref::<Box<[i64]>>().map(|b| &b[..]), Some(&[4_i64, 5][..]));
    }
}
