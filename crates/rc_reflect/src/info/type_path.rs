use core::any::{Any, TypeId};
use core::fmt;

use crate::registry::{GetTypeMeta, TypeMeta};

// -----------------------------------------------------------------------------
// TypePath

/// Stable, human readable names for a type.
///
/// Unlike [`core::any::type_name`], the strings returned here are part of the
/// type's contract: they are used as lookup keys by the
/// [`TypeRegistry`](crate::registry::TypeRegistry) and appear in conversion errors.
///
/// None of the names carry a leading `::`.
///
/// # Examples
///
/// ```
/// use rc_reflect::info::TypePath;
///
/// assert_eq!(<Vec<u8> as TypePath>::type_path(), "alloc::vec::Vec<u8>");
/// assert_eq!(<Vec<u8> as TypePath>::type_name(), "Vec<u8>");
/// assert_eq!(<Vec<u8> as TypePath>::type_ident(), "Vec");
/// assert_eq!(<Vec<u8> as TypePath>::module_path(), Some("alloc::vec"));
/// ```
pub trait TypePath: 'static {
    /// Full path including generics, e.g. `alloc::vec::Vec<u8>`.
    fn type_path() -> &'static str;

    /// Path without the module prefix, e.g. `Vec<u8>`.
    fn type_name() -> &'static str;

    /// Bare identifier without module or generics, e.g. `Vec`.
    fn type_ident() -> &'static str;

    /// Module path, `None` for primitives.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Object-safe access to [`TypePath`] through a value.
pub trait DynamicTypePath {
    fn reflect_type_path(&self) -> &'static str;

    fn reflect_type_name(&self) -> &'static str;

    fn reflect_type_ident(&self) -> &'static str;

    fn reflect_module_path(&self) -> Option<&'static str>;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }

    #[inline]
    fn reflect_type_ident(&self) -> &'static str {
        Self::type_ident()
    }

    #[inline]
    fn reflect_module_path(&self) -> Option<&'static str> {
        Self::module_path()
    }
}

// -----------------------------------------------------------------------------
// TypePathTable

/// The [`TypePath`] functions of one type, stored as function pointers.
#[derive(Clone, Copy)]
pub struct TypePathTable {
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
    type_ident: fn() -> &'static str,
    module_path: fn() -> Option<&'static str>,
}

impl TypePathTable {
    #[inline]
    pub const fn of<T: TypePath>() -> Self {
        Self {
            type_path: T::type_path,
            type_name: T::type_name,
            type_ident: T::type_ident,
            module_path: T::module_path,
        }
    }

    #[inline(always)]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    #[inline(always)]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    #[inline(always)]
    pub fn ident(&self) -> &'static str {
        (self.type_ident)()
    }

    #[inline(always)]
    pub fn module_path(&self) -> Option<&'static str> {
        (self.module_path)()
    }

    /// First segment of the module path.
    #[inline]
    pub fn crate_name(&self) -> Option<&'static str> {
        let path = self.module_path()?;
        Some(path.split_once("::").map_or(path, |(head, _)| head))
    }
}

impl fmt::Debug for TypePathTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypePathTable")
            .field("type_path", &self.path())
            .field("type_name", &self.name())
            .field("type_ident", &self.ident())
            .field("module_path", &self.module_path())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Type

/// Identity of a reflected type.
///
/// Besides the [`TypeId`] and the path table, a `Type` knows how to build the
/// type's [`TypeMeta`]. That makes capabilities such as the default
/// constructor reachable from any `&'static TypeInfo`, without a registry.
///
/// Equality and hashing only consider the `TypeId`.
///
/// # Examples
///
/// ```
/// use rc_reflect::info::Type;
/// use rc_reflect::registry::TypeTraitDefault;
///
/// let ty = Type::of::<String>();
/// assert!(ty.is::<String>());
///
/// let meta = ty.type_meta();
/// let value = meta.get_trait::<TypeTraitDefault>().unwrap().default();
/// assert_eq!(value.downcast_ref::<String>(), Some(&String::new()));
/// ```
#[derive(Copy, Clone)]
pub struct Type {
    type_path_table: TypePathTable,
    type_id: TypeId,
    type_meta: fn() -> TypeMeta,
}

impl Type {
    #[inline]
    pub const fn of<T: GetTypeMeta>() -> Self {
        Self {
            type_path_table: TypePathTable::of::<T>(),
            type_id: TypeId::of::<T>(),
            type_meta: T::get_type_meta,
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.type_id
    }

    #[inline(always)]
    pub const fn path_table(&self) -> TypePathTable {
        self.type_path_table
    }

    /// Builds a fresh [`TypeMeta`] for this type.
    ///
    /// The result is not cached; callers that resolve capabilities
    /// repeatedly should keep what they need.
    #[inline]
    pub fn type_meta(&self) -> TypeMeta {
        (self.type_meta)()
    }

    #[inline]
    pub fn path(&self) -> &'static str {
        self.type_path_table.path()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.type_path_table.name()
    }

    #[inline]
    pub fn ident(&self) -> &'static str {
        self.type_path_table.ident()
    }

    #[inline]
    pub fn module_path(&self) -> Option<&'static str> {
        self.type_path_table.module_path()
    }

    #[inline]
    pub fn crate_name(&self) -> Option<&'static str> {
        self.type_path_table.crate_name()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl core::hash::Hash for Type {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

// Forwards the `Type` accessors for info structs holding a `ty` field.
macro_rules! impl_type_fn {
    ($field:ident) => {
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }
        $crate::info::impl_type_fn!();
    };
    () => {
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().id() == ::core::any::TypeId::of::<T>()
        }

        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.ty().name()
        }

        #[inline]
        pub fn type_ident(&self) -> &'static str {
            self.ty().ident()
        }

        #[inline]
        pub fn module_path(&self) -> Option<&'static str> {
            self.ty().module_path()
        }
    };
}

pub(crate) use impl_type_fn;

#[cfg(test)]
mod tests {
    use super::{Type, TypePathTable};

    #[test]
    fn crate_name_is_first_segment() {
        let table = TypePathTable::of::<String>();
        assert_eq!(table.module_path(), Some("alloc::string"));
        assert_eq!(table.crate_name(), Some("alloc"));

        assert_eq!(TypePathTable::of::<i32>().crate_name(), None);
    }

    #[test]
    fn equality_uses_type_id() {
        assert_eq!(Type::of::<u8>(), Type::of::<u8>());
        assert_ne!(Type::of::<u8>(), Type::of::<i8>());
        assert_eq!(format!("{:?}", Type::of::<Vec<i32>>()), "alloc::vec::Vec<i32>");
    }
}
