use alloc::string::String;
use core::any::TypeId;

use rc_utils::TypeIdMap;
use rc_utils::hash::{FixedHashState, HashMap, HashSet};

use crate::info::{TypeInfo, Typed};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTrait};

// -----------------------------------------------------------------------------
// TypeRegistry

/// [`TypeMeta`]s of reflected types, by `TypeId`, type path or type name.
///
/// Conversions do not need a registry, but it is the place to look types up
/// by name, e.g. when the target type comes from configuration.
///
/// # Example
///
/// ```
/// use rc_reflect::info::DynamicTypePath;
/// use rc_reflect::registry::{TypeRegistry, TypeTraitDefault};
///
/// let registry = TypeRegistry::new();
/// let ctor = registry
///     .get_with_type_name("String").unwrap()
///     .get_trait::<TypeTraitDefault>().unwrap();
///
/// let value = ctor.default();
/// assert_eq!(value.reflect_type_path(), "alloc::string::String");
/// ```
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates a registry without any type.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            type_name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
        }
    }

    /// Creates a registry holding the primitive types and `String`.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<u128>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<String>();
        registry
    }

    // The type must not be registered yet.
    fn add_new_type_indices(
        type_meta: &TypeMeta,
        type_path_to_id: &mut HashMap<&'static str, TypeId>,
        type_name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        let ty = type_meta.ty();
        let type_name = ty.name();

        if !ambiguous_names.contains(type_name) {
            if type_name_to_id.contains_key(type_name) {
                type_name_to_id.remove(type_name);
                ambiguous_names.insert(type_name);
            } else {
                type_name_to_id.insert(type_name, ty.id());
            }
        }

        type_path_to_id.insert(ty.path(), ty.id());
    }

    fn register_internal(
        &mut self,
        type_id: TypeId,
        get_type_meta: impl FnOnce() -> TypeMeta,
    ) -> bool {
        self.type_meta_table.try_insert(type_id, || {
            let meta = get_type_meta();
            Self::add_new_type_indices(
                &meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            meta
        })
    }

    /// Inserts `type_meta` unless its type is already registered.
    ///
    /// Returns `true` if it was inserted. Dependencies are not registered.
    pub fn try_insert_type_meta(&mut self, type_meta: TypeMeta) -> bool {
        self.register_internal(type_meta.ty_id(), || type_meta)
    }

    /// Registers `T` and, the first time, its dependencies.
    ///
    /// ```
    /// # use core::any::TypeId;
    /// # use rc_reflect::{derive::Reflect, registry::{TypeRegistry, TypeTraitDefault}};
    /// #[derive(Reflect, Default)]
    /// #[reflect(default)]
    /// struct Foo {
    ///     pub name: Option<String>,
    ///     pub value: i32,
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// registry.register::<Foo>();
    ///
    /// assert!(registry.contains(TypeId::of::<Foo>()));
    /// assert!(registry.contains(TypeId::of::<Option<String>>()));
    /// assert!(registry.contains(TypeId::of::<String>()));
    /// assert!(registry.get_type_trait::<TypeTraitDefault>(TypeId::of::<Foo>()).is_some());
    /// ```
    pub fn register<T: GetTypeMeta>(&mut self) {
        if self.register_internal(TypeId::of::<T>(), T::get_type_meta) {
            T::register_dependencies(self);
        }
    }

    /// Registers every non-generic type annotated with
    /// `#[reflect(auto_register)]`.
    ///
    /// Returns `true` if registration at link time works on this platform.
    /// Always `false` without the `auto_register` feature. Repeated calls
    /// are cheap.
    ///
    /// ```no_run
    /// # use core::any::TypeId;
    /// # use rc_reflect::{derive::Reflect, registry::TypeRegistry};
    /// #[derive(Reflect)]
    /// #[reflect(auto_register)]
    /// struct Foo {
    ///     pub value: i32,
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains(TypeId::of::<Foo>()));
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            use crate::__macro_exports::auto_register;

            if self.contains(TypeId::of::<auto_register::__AvailFlag>()) {
                return true;
            }
            auto_register::__register_types(self);
            self.contains(TypeId::of::<auto_register::__AvailFlag>())
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Adds the type trait `D` to the registered type `T`.
    ///
    /// Returns `false` if `T` is not registered.
    pub fn register_type_trait<T: Typed, D: TypeTrait + FromType<T>>(&mut self) -> bool {
        match self.type_meta_table.get_mut(&TypeId::of::<T>()) {
            Some(type_meta) => {
                type_meta.insert_trait(D::from_type());
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    #[inline]
    pub fn get_mut(&mut self, type_id: TypeId) -> Option<&mut TypeMeta> {
        self.type_meta_table.get_mut(&type_id)
    }

    /// Looks a type up by its full [type path](crate::info::TypePath::type_path).
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Looks a type up by its [type name](crate::info::TypePath::type_name).
    ///
    /// Returns `None` if the name is [ambiguous](Self::is_ambiguous).
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeMeta> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns `true` if several registered types share `type_name`.
    ///
    /// ```
    /// # use rc_reflect::registry::TypeRegistry;
    /// mod foo {
    ///     #[derive(rc_reflect::derive::Reflect)]
    ///     pub struct Item;
    /// }
    /// mod bar {
    ///     #[derive(rc_reflect::derive::Reflect)]
    ///     pub struct Item;
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// registry.register::<foo::Item>();
    /// registry.register::<bar::Item>();
    /// assert!(registry.is_ambiguous("Item"));
    /// assert!(registry.get_with_type_name("Item").is_none());
    /// ```
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    pub fn get_type_trait<T: TypeTrait>(&self, type_id: TypeId) -> Option<&T> {
        match self.get(type_id) {
            Some(type_meta) => type_meta.get_trait::<T>(),
            None => None,
        }
    }

    pub fn get_type_info(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.get(type_id).map(TypeMeta::type_info)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_meta_table.is_empty()
    }

    /// Iterates over the registered [`TypeMeta`]s in arbitrary order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }

    /// Iterates over the registered types that carry the type trait `T`.
    pub fn iter_with_trait<T: TypeTrait>(&self) -> impl Iterator<Item = (&TypeMeta, &T)> {
        self.type_meta_table
            .values()
            .filter_map(|meta| meta.get_trait::<T>().map(|data| (meta, data)))
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::TypeRegistry;
    use crate::registry::TypeTraitDefault;

    #[test]
    fn lookups() {
        let registry = TypeRegistry::new();
        assert!(registry.contains(TypeId::of::<u64>()));
        assert!(registry.get_with_type_path("alloc::string::String").is_some());
        assert!(registry.get_with_type_name("f32").is_some());
        assert!(registry.get_with_type_name("Vec<u8>").is_none());
        assert_eq!(registry.iter_with_trait::<TypeTraitDefault>().count(), registry.len());
    }

    #[test]
    fn register_is_idempotent() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Vec<Option<i32>>>();
        let len = registry.len();
        assert_eq!(len, 3);

        registry.register::<Vec<Option<i32>>>();
        assert_eq!(registry.len(), len);
        assert!(!registry.is_ambiguous("Vec<Option<i32>>"));
    }
}
