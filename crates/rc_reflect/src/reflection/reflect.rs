use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{ReflectCloneError, ReflectMut, ReflectOwned, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// A value that can be inspected and modified without knowing its type.
///
/// `Reflect` is object safe; conversions work on `&dyn Reflect`,
/// `&mut dyn Reflect` and `Box<dyn Reflect>`. Per-kind access goes through
/// [`reflect_ref`](Reflect::reflect_ref) and friends, which expose the
/// matching sub-trait ([`Struct`](crate::ops::Struct),
/// [`List`](crate::ops::List), ...).
///
/// Implement it with `#[derive(Reflect)]`.
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// The `TypeId` of the concrete type behind the trait object.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns `true` for dynamic containers such as
    /// [`DynamicList`](crate::ops::DynamicList).
    #[inline]
    fn is_dynamic(&self) -> bool {
        false
    }

    /// Replaces `self` with `value`.
    ///
    /// Fails, handing `value` back, when it is not assignable as by
    /// [`FromReflect::take_from_reflect`](crate::FromReflect::take_from_reflect).
    /// `self` is unchanged on failure.
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    fn reflect_kind(&self) -> ReflectKind;

    fn reflect_ref(&self) -> ReflectRef<'_>;

    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    fn reflect_owned(self: Box<Self>) -> ReflectOwned;

    /// Deep copy of the value, keeping its concrete type.
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError>;

    /// Value equality, `None` when the type cannot tell.
    #[inline]
    fn reflect_partial_eq(&self, _other: &dyn Reflect) -> Option<bool> {
        None
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::List(data) => impls::list_debug(data, f),
            ReflectRef::Optional(data) => impls::optional_debug(data, f),
            ReflectRef::Record(data) => fmt::Debug::fmt(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the concrete type is `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the box, handing it back if the type is not `T`.
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type id was checked"),
        }
    }

    /// Moves the value out of the box, handing it back if the type is not `T`.
    ///
    /// ```
    /// use rc_reflect::Reflect;
    ///
    /// let value: Box<dyn Reflect> = Box::new(String::from("x"));
    /// let value = value.take::<u32>().unwrap_err();
    /// assert_eq!(value.take::<String>().unwrap(), "x");
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

// The kind-dependent part of a `Reflect` impl.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = <Self as $crate::FromReflect>::take_from_reflect(value)?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }

        #[inline]
        fn reflect_owned(self: ::alloc::boxed::Box<Self>) -> $crate::ops::ReflectOwned {
            $crate::ops::ReflectOwned::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use crate::Reflect;

    #[test]
    fn downcast_round_trip() {
        let mut value: Box<dyn Reflect> = Box::new(5_i64);
        assert!(value.is::<i64>());
        assert!(!value.is::<i32>());

        *value.downcast_mut::<i64>().unwrap() += 1;
        assert_eq!(value.downcast_ref::<i64>(), Some(&6));

        let value = value.downcast::<u8>().unwrap_err();
        assert_eq!(*value.downcast::<i64>().unwrap(), 6);
    }

    #[test]
    fn set_rejects_other_types() {
        let mut value = 1_u32;
        let rejected = value.set(Box::new(2_u64)).unwrap_err();
        assert_eq!(value, 1);
        assert!(rejected.is::<u64>());

        value.set(Box::new(3_u32)).unwrap();
        assert_eq!(value, 3);
    }

    #[test]
    fn debug_goes_through_reflect() {
        let value: Box<dyn Reflect> = Box::new(vec![1_u8, 2]);
        assert_eq!(format!("{value:?}"), "[1, 2]");
    }
}
