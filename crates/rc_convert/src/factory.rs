use core::any::TypeId;
use core::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rc_reflect::info::TypeInfo;
use rc_reflect::registry::TypeTraitDefault;
use rc_reflect::{Record, Reflect};
use rc_utils::TypeIdMap;

use crate::ConvertError;

// -----------------------------------------------------------------------------
// ConstructorCache

/// Resolved default constructors, keyed by type.
///
/// Entries are resolved lazily, including the absence of a constructor, and
/// never evicted. Lookups share a read lock. A miss is resolved outside any
/// lock and then stored under the write lock only if no other caller stored
/// an entry first, so concurrent misses on one type may resolve it twice but
/// always agree on the stored result.
///
/// Lookups are not lock-free: a lookup blocks while another caller holds
/// the write lock to store a new entry. The write lock is held only for the
/// insertion itself, never during resolution.
pub struct ConstructorCache {
    entries: RwLock<TypeIdMap<Option<TypeTraitDefault>>>,
}

impl Default for ConstructorCache {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ConstructorCache {
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: RwLock::new(TypeIdMap::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, TypeIdMap<Option<TypeTraitDefault>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, TypeIdMap<Option<TypeTraitDefault>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the cached entry, `None` if the type was never resolved.
    ///
    /// A resolved type without a default constructor is `Some(None)`.
    pub fn get(&self, type_id: TypeId) -> Option<Option<TypeTraitDefault>> {
        self.read().get(&type_id).copied()
    }

    /// Returns the default constructor of the described type, resolving
    /// and caching it on first request.
    pub fn get_or_resolve(&self, info: &TypeInfo) -> Option<TypeTraitDefault> {
        let type_id = info.ty_id();
        if let Some(entry) = self.get(type_id) {
            return entry;
        }

        let resolved = resolve(info);

        let mut entries = self.write();
        if let Some(stored) = entries.get(&type_id) {
            log::debug!("constructor of `{}` was resolved concurrently", info.type_path());
            return *stored;
        }
        entries.insert(type_id, resolved);
        log::debug!(
            "resolved constructor of `{}`: {}",
            info.type_path(),
            if resolved.is_some() { "default" } else { "none" },
        );
        resolved
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.read().contains(&type_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl fmt::Debug for ConstructorCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorCache")
            .field("len", &self.len())
            .finish()
    }
}

// Side-effect free: builds the type's meta and reads its default trait.
fn resolve(info: &TypeInfo) -> Option<TypeTraitDefault> {
    info.ty()
        .type_meta()
        .get_trait::<TypeTraitDefault>()
        .copied()
}

// -----------------------------------------------------------------------------
// InstanceFactory

static GLOBAL_FACTORY: InstanceFactory = InstanceFactory::new();

/// Creates default instances of reflected types.
///
/// # Examples
///
/// ```
/// use rc_convert::{ConvertError, InstanceFactory};
/// use rc_reflect::{Record, derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Order {
///     pub id: u64,
/// }
///
/// #[derive(Reflect)]
/// struct Handle {
///     pub raw: u64,
/// }
///
/// let factory = InstanceFactory::global();
///
/// let order = factory.get_or_create(Order::type_info()).unwrap();
/// assert!(order.is::<Order>());
///
/// let record = factory.get_or_create(Record::type_info()).unwrap();
/// assert!(record.is::<Record>());
///
/// let err = factory.get_or_create(Handle::type_info()).unwrap_err();
/// assert!(matches!(err, ConvertError::MissingDefaultConstructor { .. }));
/// ```
#[derive(Debug, Default)]
pub struct InstanceFactory {
    cache: ConstructorCache,
}

impl InstanceFactory {
    /// Creates a factory with its own, empty cache.
    #[inline]
    pub const fn new() -> Self {
        Self {
            cache: ConstructorCache::new(),
        }
    }

    /// The process-wide factory used by the free conversion functions.
    #[inline]
    pub fn global() -> &'static Self {
        &GLOBAL_FACTORY
    }

    #[inline]
    pub fn cache(&self) -> &ConstructorCache {
        &self.cache
    }

    /// Returns the default constructor of the described type, if any.
    #[inline]
    pub fn constructor_of(&self, info: &TypeInfo) -> Option<TypeTraitDefault> {
        self.cache.get_or_resolve(info)
    }

    /// Creates a default instance of the described type.
    ///
    /// A [`Record`] target is created directly, without consulting the cache.
    pub fn get_or_create(&self, info: &TypeInfo) -> Result<Box<dyn Reflect>, ConvertError> {
        if let TypeInfo::Record(_) = info {
            return Ok(Box::new(Record::new()));
        }
        match self.constructor_of(info) {
            Some(ctor) => Ok(ctor.default()),
            None => Err(ConvertError::MissingDefaultConstructor {
                type_path: info.type_path(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use rc_reflect::Record;
    use rc_reflect::derive::Reflect;
    use rc_reflect::info::Typed;

    use super::InstanceFactory;
    use crate::ConvertError;

    #[derive(Reflect, Default)]
    #[reflect(default)]
    struct Sample {
        pub value: i32,
    }

    #[derive(Reflect)]
    struct NoDefault {
        pub value: i32,
    }

    #[test]
    fn absence_is_cached() {
        let factory = InstanceFactory::new();
        let info = NoDefault::type_info();

        let err = factory.get_or_create(info).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MissingDefaultConstructor { type_path } if type_path == info.type_path()
        ));
        assert_eq!(factory.cache().get(info.ty_id()).map(|e| e.is_none()), Some(true));
        assert!(factory.get_or_create(info).is_err());
        assert_eq!(factory.cache().len(), 1);
    }

    #[test]
    fn record_bypasses_cache() {
        let factory = InstanceFactory::new();
        let value = factory.get_or_create(Record::type_info()).unwrap();
        assert_eq!(value.downcast_ref::<Record>().map(Record::len), Some(0));
        assert!(factory.cache().is_empty());
    }

    #[test]
    fn instances_are_fresh() {
        let factory = InstanceFactory::new();
        let mut first = factory.get_or_create(Sample::type_info()).unwrap();
        first.downcast_mut::<Sample>().unwrap().value = 3;

        let second = factory.get_or_create(Sample::type_info()).unwrap();
        assert_eq!(second.downcast_ref::<Sample>().unwrap().value, 0);
        assert!(factory.cache().contains(Sample::type_info().ty_id()));
    }

    #[test]
    fn concurrent_resolution() {
        let factory = InstanceFactory::new();
        let info = Sample::type_info();

        thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..64 {
                        let value = factory.get_or_create(info).unwrap();
                        assert!(value.is::<Sample>());
                    }
                });
            }
        });

        assert_eq!(factory.cache().len(), 1);
        assert!(factory.constructor_of(info).is_some());
    }
}
