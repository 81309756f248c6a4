use crate::Reflect;

/// Access to the value inside an `Option<T>`.
///
/// ```
/// use rc_reflect::{Reflect, ops::ReflectRef};
///
/// let value = Some(3_u8);
/// let ReflectRef::Optional(optional) = value.reflect_ref() else { unreachable!() };
/// assert_eq!(optional.value().and_then(|v| v.downcast_ref::<u8>()), Some(&3));
/// ```
pub trait Optional: Reflect {
    fn value(&self) -> Option<&dyn Reflect>;

    fn value_mut(&mut self) -> Option<&mut dyn Reflect>;

    #[inline]
    fn is_some(&self) -> bool {
        self.value().is_some()
    }
}
