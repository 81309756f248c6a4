use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::{Any, TypeId};

use crate::info::{Type, TypeInfo, Typed, impl_type_fn};
use crate::ops::List;
use crate::registry::GetTypeMeta;
use crate::{FromReflect, Reflect};

/// Builds a list value from boxed items.
///
/// On failure returns the index of the first rejected item together with
/// the item itself.
pub type CollectFn = fn(Vec<Box<dyn Reflect>>) -> Result<Box<dyn Reflect>, (usize, Box<dyn Reflect>)>;

/// Type information of a list-like type such as `Vec<T>` or `Box<[T]>`.
///
/// # Examples
///
/// ```
/// use rc_reflect::{Reflect, info::Typed};
///
/// let info = <Vec<i32>>::type_info().as_list().unwrap();
/// assert!(info.item_is::<i32>());
///
/// let items: Vec<Box<dyn Reflect>> = vec![Box::new(1_i32), Box::new(2_i32)];
/// let list = info.collect(items).unwrap();
/// assert_eq!(list.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2]));
///
/// let mixed: Vec<Box<dyn Reflect>> = vec![Box::new(1_i32), Box::new("x".to_string())];
/// let (index, rejected) = info.collect(mixed).unwrap_err();
/// assert_eq!(index, 1);
/// assert!(rejected.is::<String>());
/// ```
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    item_id: TypeId,
    // Created on first access.
    item_info: fn() -> &'static TypeInfo,
    collect: CollectFn,
}

impl ListInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<TList, TItem>() -> Self
    where
        TList: List + GetTypeMeta + FromIterator<TItem>,
        TItem: FromReflect + Typed,
    {
        Self {
            ty: Type::of::<TList>(),
            item_id: TypeId::of::<TItem>(),
            item_info: TItem::type_info,
            collect: collect_items::<TList, TItem>,
        }
    }

    #[inline]
    pub const fn item_id(&self) -> TypeId {
        self.item_id
    }

    #[inline]
    pub fn item_is<T: Any>(&self) -> bool {
        self.item_id == TypeId::of::<T>()
    }

    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }

    /// Allocates a new list of this type holding `items` in order.
    ///
    /// Every item must be assignable to the item type as by
    /// [`FromReflect::take_from_reflect`]; no conversion is attempted.
    #[inline]
    pub fn collect(
        &self,
        items: Vec<Box<dyn Reflect>>,
    ) -> Result<Box<dyn Reflect>, (usize, Box<dyn Reflect>)> {
        (self.collect)(items)
    }
}

fn collect_items<TList, TItem>(
    items: Vec<Box<dyn Reflect>>,
) -> Result<Box<dyn Reflect>, (usize, Box<dyn Reflect>)>
where
    TList: List + FromIterator<TItem>,
    TItem: FromReflect,
{
    let mut values = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        values.push(TItem::take_from_reflect(item).map_err(|item| (index, item))?);
    }
    Ok(Box::new(values.into_iter().collect::<TList>()))
}
