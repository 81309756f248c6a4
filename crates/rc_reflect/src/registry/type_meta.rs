use alloc::boxed::Box;
use core::any::TypeId;
use core::ops::{Deref, DerefMut};

use rc_utils::TypeIdMap;

use crate::info::{Type, TypeInfo, Typed};
use crate::registry::{TypeRegistry, TypeTrait};

// -----------------------------------------------------------------------------
// TypeMeta

/// The [`TypeInfo`] of a type together with its [`TypeTrait`] table.
///
/// Usually produced by [`GetTypeMeta::get_type_meta`], which
/// `#[derive(Reflect)]` implements.
///
/// # Examples
///
/// ```
/// use rc_reflect::registry::{FromType, TypeMeta, TypeTraitDefault};
///
/// let mut meta = TypeMeta::of::<String>();
/// meta.insert_trait::<TypeTraitDefault>(FromType::<String>::from_type());
///
/// let ctor = meta.get_trait::<TypeTraitDefault>().unwrap();
/// assert_eq!(ctor.default().take::<String>().unwrap(), "");
/// ```
pub struct TypeMeta {
    ty: &'static Type,
    type_info: &'static TypeInfo,
    trait_table: TypeIdMap<Box<dyn TypeTrait>>,
}

impl TypeMeta {
    /// Creates a `TypeMeta` with an empty trait table.
    #[inline]
    pub fn of<T: Typed>() -> Self {
        Self::with_capacity::<T>(0)
    }

    #[inline]
    pub fn with_capacity<T: Typed>(capacity: usize) -> Self {
        let type_info = T::type_info();
        Self {
            ty: type_info.ty(),
            type_info,
            trait_table: TypeIdMap::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }

    #[inline(always)]
    pub const fn ty(&self) -> &'static Type {
        self.ty
    }

    crate::info::impl_type_fn!();

    /// Inserts a [`TypeTrait`], replacing one of the same type.
    #[inline(always)]
    pub fn insert_trait<T: TypeTrait>(&mut self, data: T) {
        self.insert_trait_by_id(TypeId::of::<T>(), Box::new(data));
    }

    #[inline(never)]
    fn insert_trait_by_id(&mut self, id: TypeId, value: Box<dyn TypeTrait>) {
        self.trait_table.insert(id, value);
    }

    /// Removes a [`TypeTrait`], returning it if it was present.
    pub fn remove_trait<T: TypeTrait>(&mut self) -> Option<T> {
        let value = self.trait_table.remove(&TypeId::of::<T>())?;
        let value: Box<dyn core::any::Any> = value;
        value.downcast::<T>().ok().map(|value| *value)
    }

    #[inline]
    pub fn get_trait<T: TypeTrait>(&self) -> Option<&T> {
        self.get_trait_by_id(TypeId::of::<T>())
            .and_then(<dyn TypeTrait>::downcast_ref)
    }

    pub fn get_trait_by_id(&self, type_id: TypeId) -> Option<&dyn TypeTrait> {
        self.trait_table.get(&type_id).map(Deref::deref)
    }

    #[inline]
    pub fn get_trait_mut<T: TypeTrait>(&mut self) -> Option<&mut T> {
        self.trait_table
            .get_mut(&TypeId::of::<T>())
            .map(DerefMut::deref_mut)
            .and_then(<dyn TypeTrait>::downcast_mut)
    }

    #[inline]
    pub fn has_trait<T: TypeTrait>(&self) -> bool {
        self.trait_table.contains(&TypeId::of::<T>())
    }

    #[inline]
    pub fn trait_len(&self) -> usize {
        self.trait_table.len()
    }

    /// Iterates over `(TypeId, &dyn TypeTrait)` pairs in arbitrary order.
    pub fn trait_iter(&self) -> impl ExactSizeIterator<Item = (TypeId, &dyn TypeTrait)> {
        self.trait_table.iter().map(|(id, value)| (*id, value.deref()))
    }
}

impl Clone for TypeMeta {
    fn clone(&self) -> Self {
        let mut trait_table = TypeIdMap::with_capacity(self.trait_len());
        for (id, value) in self.trait_table.iter() {
            trait_table.insert(*id, (**value).clone_type_trait());
        }
        Self {
            ty: self.ty,
            type_info: self.type_info,
            trait_table,
        }
    }
}

impl core::fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeMeta")
            .field("type_info", &self.type_info)
            .field("trait_table", &self.trait_table)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// GetTypeMeta

/// Builds the [`TypeMeta`] of a type.
///
/// Implemented by `#[derive(Reflect)]`. `#[reflect(default)]` adds
/// [`TypeTraitDefault`](crate::registry::TypeTraitDefault) to the table.
///
/// ```
/// use rc_reflect::{derive::Reflect, registry::{GetTypeMeta, TypeTraitDefault}};
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct A {
///     pub value: i32,
/// }
///
/// #[derive(Reflect)]
/// struct B {
///     pub value: i32,
/// }
///
/// assert!(A::get_type_meta().has_trait::<TypeTraitDefault>());
/// assert!(!B::get_type_meta().has_trait::<TypeTraitDefault>());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `GetTypeMeta` so cannot provide type registration information",
    note = "consider annotating `{Self}` with `#[derive(Reflect)]`"
)]
pub trait GetTypeMeta: Typed {
    fn get_type_meta() -> TypeMeta;

    /// Registers the types this type depends on, e.g. its field types.
    fn register_dependencies(_registry: &mut TypeRegistry) {}
}

#[cfg(test)]
mod tests {
    use super::TypeMeta;
    use crate::registry::{FromType, GetTypeMeta, TypeTraitDefault};

    #[test]
    fn trait_table() {
        let mut meta = TypeMeta::of::<i32>();
        assert_eq!(meta.trait_len(), 0);
        assert_eq!(meta.type_path(), "i32");

        meta.insert_trait::<TypeTraitDefault>(FromType::<i32>::from_type());
        let copy = meta.clone();
        assert!(meta.remove_trait::<TypeTraitDefault>().is_some());
        assert!(!meta.has_trait::<TypeTraitDefault>());
        assert!(copy.has_trait::<TypeTraitDefault>());
    }

    #[test]
    fn containers_have_default() {
        let meta = <Vec<String>>::get_type_meta();
        let value = meta.get_trait::<TypeTraitDefault>().unwrap().default();
        assert_eq!(value.downcast_ref::<Vec<String>>(), Some(&Vec::new()));

        let meta = <Option<u8>>::get_type_meta();
        let value = meta.get_trait::<TypeTraitDefault>().unwrap().default();
        assert_eq!(value.downcast_ref::<Option<u8>>(), Some(&None));
    }
}
