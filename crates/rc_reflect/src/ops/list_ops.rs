use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::ops::ReflectCloneError;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTraitDefault};
use crate::{FromReflect, Reflect};

// -----------------------------------------------------------------------------
// Dynamic List

/// An untyped, growable sequence of reflected values.
///
/// Items may be of different types. This is the sequence form of a loosely
/// typed payload, before its items are collected into a typed list.
///
/// # Examples
///
/// ```
/// use rc_reflect::{Reflect, ops::{DynamicList, List}};
///
/// let mut list: DynamicList = [1_i32, 2, 3].into_iter().collect();
/// list.push(Box::new("four".to_string()));
///
/// assert_eq!(list.len(), 4);
/// assert_eq!(list.get(1).and_then(|v| v.downcast_ref::<i32>()), Some(&2));
/// assert!(list.get(3).unwrap().is::<String>());
/// ```
#[derive(Default)]
pub struct DynamicList {
    values: Vec<Box<dyn Reflect>>,
}

impl TypePath for DynamicList {
    #[inline]
    fn type_path() -> &'static str {
        "rc_reflect::ops::DynamicList"
    }

    #[inline]
    fn type_name() -> &'static str {
        "DynamicList"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "DynamicList"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("rc_reflect::ops")
    }
}

impl Typed for DynamicList {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl DynamicList {
    #[inline]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn extend<T: Reflect>(&mut self, value: T) {
        self.values.push(Box::new(value));
    }
}

impl<T: Reflect> FromIterator<T> for DynamicList {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self {
            values: values
                .into_iter()
                .map(Reflect::into_boxed_reflect)
                .collect(),
        }
    }
}

impl FromIterator<Box<dyn Reflect>> for DynamicList {
    fn from_iter<I: IntoIterator<Item = Box<dyn Reflect>>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl Reflect for DynamicList {
    crate::reflection::impl_reflect_cast_fn!(List);

    #[inline]
    fn is_dynamic(&self) -> bool {
        true
    }

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let values = self
            .values
            .iter()
            .map(|value| value.reflect_clone())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Box::new(Self { values }))
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        crate::impls::list_partial_eq(self, other)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynamicList(")?;
        crate::impls::list_debug(self, f)?;
        write!(f, ")")
    }
}

impl FromReflect for DynamicList {}

impl GetTypeMeta for DynamicList {
    fn get_type_meta() -> TypeMeta {
        let mut meta = TypeMeta::with_capacity::<Self>(1);
        meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
        meta
    }
}

impl fmt::Debug for DynamicList {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl IntoIterator for DynamicList {
    type Item = Box<dyn Reflect>;
    type IntoIter = alloc::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a DynamicList {
    type Item = &'a dyn Reflect;
    type IntoIter = ListItemIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// -----------------------------------------------------------------------------
// List trait

/// Access to an ordered sequence of reflected items.
///
/// Implemented by `Vec<T>`, `Box<[T]>` (fixed size, so
/// [`push`](List::push) always fails) and [`DynamicList`].
pub trait List: Reflect {
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Appends an item, handing it back if it is not assignable to the
    /// item type or the list cannot grow.
    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> ListItemIter<'_>;

    /// Consumes the list, returning its items in order.
    fn drain(self: Box<Self>) -> Vec<Box<dyn Reflect>>;
}

impl List for DynamicList {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.values.get(index).map(core::ops::Deref::deref)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.values.get_mut(index).map(|value| &mut **value)
    }

    #[inline]
    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        self.values.push(value);
        Ok(())
    }

    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }

    #[inline]
    fn drain(self: Box<Self>) -> Vec<Box<dyn Reflect>> {
        self.values
    }
}

impl dyn List {
    #[inline]
    pub fn get_as<T: Reflect>(&self, index: usize) -> Option<&T> {
        self.get(index).and_then(<dyn Reflect>::downcast_ref)
    }
}

// -----------------------------------------------------------------------------
// List Iterator

/// Iterator over the items of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl ListItemIter<'_> {
    #[inline(always)]
    pub const fn new(list: &dyn List) -> ListItemIter<'_> {
        ListItemIter { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use super::{DynamicList, List};
    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};

    #[test]
    fn kind_is_list_but_info_is_opaque() {
        let list = DynamicList::new();
        assert_eq!(list.reflect_kind(), ReflectKind::List);
        assert_eq!(DynamicList::type_info().kind(), ReflectKind::Opaque);
        assert!(list.is_dynamic());
    }

    #[test]
    fn drain_keeps_order() {
        let list: DynamicList = ["a", "b", "c"].into_iter().map(String::from).collect();
        let items = Box::new(list).drain();
        let items: Vec<_> = items
            .into_iter()
            .map(|v| v.take::<String>().unwrap())
            .collect();
        assert_eq!(items, ["a", "b", "c"]);
    }

    #[test]
    fn clone_and_compare() {
        let mut list = DynamicList::new();
        list.extend(1_u8);
        list.extend(String::from("x"));

        let copy = list.reflect_clone().unwrap();
        assert_eq!(list.reflect_partial_eq(copy.as_ref()), Some(true));

        list.push(Box::new(2_u8)).unwrap();
        assert_eq!(list.reflect_partial_eq(copy.as_ref()), Some(false));
        assert_eq!(format!("{list:?}"), "DynamicList([1, \"x\", 2])");
    }
}
