use alloc::borrow::Cow;
use alloc::boxed::Box;
use core::fmt;

use rc_utils::hash::FixedHashState;
use rc_utils::index::IndexMap;
use rc_utils::index::indexmap::map;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{RecordInfo, TypeInfo, TypePath, Typed};
use crate::ops::ReflectCloneError;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTraitDefault};
use crate::{FromReflect, Reflect};

type Entry = (Cow<'static, str>, Option<Box<dyn Reflect>>);

// -----------------------------------------------------------------------------
// Record

/// A string-keyed map of loosely typed values.
///
/// Values are `Option<Box<dyn Reflect>>`, where `None` stands for `null`.
/// Keys are unique; entries keep their insertion order, and re-inserting a
/// key replaces its value in place.
///
/// Nested objects are nested `Record`s, and arrays of mixed values are
/// [`DynamicList`](crate::ops::DynamicList)s.
///
/// # Examples
///
/// ```
/// use rc_reflect::Record;
///
/// let mut record = Record::new();
/// record.insert("Name", String::from("widget"));
/// record.insert("Count", 3_i32);
/// record.insert_null("Note");
///
/// assert_eq!(record.len(), 3);
/// assert_eq!(record.get_as::<i32>("Count"), Some(&3));
/// assert!(record.is_null("Note"));
/// assert!(record.get("Note").is_none());
/// assert_eq!(record.keys().collect::<Vec<_>>(), ["Name", "Count", "Note"]);
/// ```
pub struct Record {
    entries: IndexMap<Cow<'static, str>, Option<Box<dyn Reflect>>>,
}

impl TypePath for Record {
    #[inline]
    fn type_path() -> &'static str {
        "rc_reflect::Record"
    }

    #[inline]
    fn type_name() -> &'static str {
        "Record"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Record"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("rc_reflect")
    }
}

impl Typed for Record {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Record(RecordInfo::new::<Self>()))
    }
}

impl Default for Record {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Record {
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: IndexMap::with_hasher(FixedHashState),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity_and_hasher(capacity, FixedHashState),
        }
    }

    /// Inserts an entry, `None` being `null`.
    ///
    /// Returns the previous value of the key if it was present.
    #[inline]
    pub fn insert_entry(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: Option<Box<dyn Reflect>>,
    ) -> Option<Option<Box<dyn Reflect>>> {
        self.entries.insert(key.into(), value)
    }

    #[inline]
    pub fn insert_boxed(&mut self, key: impl Into<Cow<'static, str>>, value: Box<dyn Reflect>) {
        self.insert_entry(key, Some(value));
    }

    #[inline]
    pub fn insert<T: Reflect>(&mut self, key: impl Into<Cow<'static, str>>, value: T) {
        self.insert_entry(key, Some(Box::new(value)));
    }

    #[inline]
    pub fn insert_null(&mut self, key: impl Into<Cow<'static, str>>) {
        self.insert_entry(key, None);
    }

    /// Returns the value of `key`, `None` if it is absent or `null`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&dyn Reflect> {
        self.get_entry(key).flatten()
    }

    /// Returns `Some(None)` for a `null` value and `None` for an absent key.
    #[inline]
    pub fn get_entry(&self, key: &str) -> Option<Option<&dyn Reflect>> {
        self.entries.get(key).map(|value| value.as_deref())
    }

    #[inline]
    pub fn get_as<T: Reflect>(&self, key: &str) -> Option<&T> {
        self.get(key).and_then(<dyn Reflect>::downcast_ref)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut dyn Reflect> {
        self.entries.get_mut(key)?.as_mut().map(|value| &mut **value)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns `true` if `key` is present with a `null` value.
    #[inline]
    pub fn is_null(&self, key: &str) -> bool {
        matches!(self.get_entry(key), Some(None))
    }

    /// Removes `key`, keeping the order of the other entries.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Option<Box<dyn Reflect>>> {
        self.entries.shift_remove(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> RecordIter<'_> {
        RecordIter {
            inner: self.entries.iter(),
        }
    }

    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.keys().map(|key| key.as_ref())
    }

    /// Copies every entry with [`Reflect::reflect_clone`].
    pub fn try_clone(&self) -> Result<Self, ReflectCloneError> {
        let mut record = Self::with_capacity(self.len());
        for (key, value) in self.entries.iter() {
            let value = value.as_deref().map(|value| value.reflect_clone()).transpose()?;
            record.insert_entry(key.clone(), value);
        }
        Ok(record)
    }
}

impl Reflect for Record {
    crate::reflection::impl_reflect_cast_fn!(Record);

    #[inline]
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        Ok(Box::new(self.try_clone()?))
    }

    /// Entry-wise equality, ignoring the order of entries.
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        let Some(other) = other.downcast_ref::<Self>() else {
            return Some(false);
        };
        if self.len() != other.len() {
            return Some(false);
        }
        for (key, value) in self.iter() {
            let equal = match (value, other.get_entry(key)) {
                (Some(a), Some(Some(b))) => a.reflect_partial_eq(b)?,
                (None, Some(None)) => true,
                _ => false,
            };
            if !equal {
                return Some(false);
            }
        }
        Some(true)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Null;

        impl fmt::Debug for Null {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("null")
            }
        }

        let mut debug = f.debug_map();
        for (key, value) in self.iter() {
            match value {
                Some(value) => debug.entry(&key, &value),
                None => debug.entry(&key, &Null),
            };
        }
        debug.finish()
    }
}

impl FromReflect for Record {}

impl GetTypeMeta for Record {
    fn get_type_meta() -> TypeMeta {
        let mut meta = TypeMeta::with_capacity::<Self>(1);
        meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
        meta
    }
}

impl fmt::Debug for Record {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl<K: Into<Cow<'static, str>>> FromIterator<(K, Box<dyn Reflect>)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Box<dyn Reflect>)>>(entries: I) -> Self {
        let mut record = Record::new();
        for (key, value) in entries {
            record.insert_boxed(key, value);
        }
        record
    }
}

impl<K: Into<Cow<'static, str>>> FromIterator<(K, Option<Box<dyn Reflect>>)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Option<Box<dyn Reflect>>)>>(entries: I) -> Self {
        let mut record = Record::new();
        for (key, value) in entries {
            record.insert_entry(key, value);
        }
        record
    }
}

impl IntoIterator for Record {
    type Item = Entry;
    type IntoIter = RecordIntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        RecordIntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a str, Option<&'a dyn Reflect>);
    type IntoIter = RecordIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// -----------------------------------------------------------------------------
// Iterators

/// Iterator over the entries of a [`Record`], in insertion order.
pub struct RecordIter<'a> {
    inner: map::Iter<'a, Cow<'static, str>, Option<Box<dyn Reflect>>>,
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = (&'a str, Option<&'a dyn Reflect>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, value)| (key.as_ref(), value.as_deref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for RecordIter<'_> {}

/// Owning iterator over the entries of a [`Record`], in insertion order.
pub struct RecordIntoIter {
    inner: map::IntoIter<Cow<'static, str>, Option<Box<dyn Reflect>>>,
}

impl Iterator for RecordIntoIter {
    type Item = Entry;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for RecordIntoIter {}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use super::Record;
    use crate::Reflect;
    use crate::info::{ReflectKind, Shape, Typed};
    use crate::ops::DynamicList;

    #[test]
    fn reinsert_keeps_position() {
        let mut record = Record::new();
        record.insert("a", 1_i32);
        record.insert("b", 2_i32);
        let old = record.insert_entry("a", Some(Box::new(3_i32)));

        assert_eq!(old.flatten().and_then(|v| v.take::<i32>().ok()), Some(1));
        assert_eq!(record.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(record.get_as::<i32>("a"), Some(&3));
    }

    #[test]
    fn remove_keeps_order() {
        let mut record: Record = [("a", 1_u8), ("b", 2), ("c", 3)]
            .into_iter()
            .map(|(k, v)| (k, Box::new(v) as Box<dyn Reflect>))
            .collect();

        assert!(record.remove("a").is_some());
        assert!(record.remove("a").is_none());
        assert_eq!(record.get_as::<u8>("c"), Some(&3));
        record.insert("c", 4_u8);
        assert_eq!(record.keys().collect::<Vec<_>>(), ["b", "c"]);
    }

    #[test]
    fn null_and_absent() {
        let mut record = Record::new();
        record.insert_null("x");

        assert!(record.contains_key("x"));
        assert!(record.is_null("x"));
        assert!(record.get_entry("x").is_some());
        assert!(!record.is_null("y"));
        assert!(record.get_entry("y").is_none());
    }

    #[test]
    fn reflect_record() {
        let mut inner = Record::new();
        inner.insert("X", 1_i64);

        let mut record = Record::new();
        record.insert("Inner", inner);
        record.insert("Items", [1_i32, 2].into_iter().collect::<DynamicList>());
        record.insert_null("Gone");

        assert_eq!(record.reflect_kind(), ReflectKind::Record);
        assert_eq!(Record::type_info().shape(), Shape::Compound);

        let copy = record.reflect_clone().unwrap();
        assert_eq!(record.reflect_partial_eq(copy.as_ref()), Some(true));
        assert_eq!(
            format!("{record:?}"),
            "{\"Inner\": {\"X\": 1}, \"Items\": DynamicList([1, 2]), \"Gone\": null}"
        );
    }

    #[test]
    fn equality_ignores_order() {
        let mut a = Record::new();
        a.insert("x", 1_u8);
        a.insert_null("y");

        let mut b = Record::new();
        b.insert_null("y");
        b.insert("x", 1_u8);
        assert_eq!(a.reflect_partial_eq(&b), Some(true));

        b.insert("y", 2_u8);
        assert_eq!(a.reflect_partial_eq(&b), Some(false));
    }
}
