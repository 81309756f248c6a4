use alloc::boxed::Box;

use crate::Reflect;

/// Takes a concrete value out of a `Box<dyn Reflect>`.
///
/// This is the assignment rule of the crate: a value can be stored into a
/// location of type `Self` exactly when `take_from_reflect` accepts it.
/// The default implementation accepts values of type `Self` only;
/// `Option<T>` additionally accepts a bare `T` and wraps it in `Some`.
///
/// No conversion between representations is ever attempted, so an `i64`
/// is not accepted where an `i32` is expected.
///
/// # Examples
///
/// ```
/// use rc_reflect::{FromReflect, Reflect};
///
/// let value: Box<dyn Reflect> = Box::new(7_u8);
/// assert_eq!(<Option<u8>>::take_from_reflect(value).unwrap(), Some(7));
///
/// let value: Box<dyn Reflect> = Box::new(7_u16);
/// assert!(u8::take_from_reflect(value).is_err());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `FromReflect` so cannot be created through reflection",
    note = "consider annotating `{Self}` with `#[derive(Reflect)]`"
)]
pub trait FromReflect: Reflect + Sized {
    /// Returns the concrete value, or gives the box back if it is not
    /// assignable to `Self`.
    #[inline]
    fn take_from_reflect(reflect: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        reflect.take::<Self>()
    }
}
