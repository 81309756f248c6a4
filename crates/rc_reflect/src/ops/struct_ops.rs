use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct trait

/// Access to the reflected fields of a struct.
///
/// Fields are addressed by their *reflected* name (see
/// [`NamedField::name`](crate::info::NamedField::name)) or by index in
/// declaration order. Fields marked `#[reflect(ignore)]` are not visible.
///
/// # Examples
///
/// ```
/// use rc_reflect::{Reflect, derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct User {
///     #[reflect(rename = "UserName")]
///     name: String,
///     age: u8,
/// }
///
/// let mut user = User { name: "ann".into(), age: 30 };
///
/// assert_eq!(user.field_len(), 2);
/// assert_eq!(user.name_at(0), Some("UserName"));
/// assert!(user.field("name").is_none());
///
/// *user.get_field_mut::<u8>("age").unwrap() += 1;
/// assert_eq!(user.age, 31);
/// ```
pub trait Struct: Reflect {
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    fn name_at(&self, index: usize) -> Option<&str>;

    fn field_len(&self) -> usize;

    fn iter_fields(&self) -> StructFieldIter<'_>;

    /// Typed shortcut for [`field`](Struct::field).
    fn get_field<T: Reflect>(&self, name: &str) -> Option<&T>
    where
        Self: Sized,
    {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }

    /// Typed shortcut for [`field_mut`](Struct::field_mut).
    fn get_field_mut<T: Reflect>(&mut self, name: &str) -> Option<&mut T>
    where
        Self: Sized,
    {
        self.field_mut(name).and_then(<dyn Reflect>::downcast_mut)
    }
}

impl dyn Struct {
    #[inline]
    pub fn get_field<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }

    #[inline]
    pub fn get_field_mut<T: Reflect>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name).and_then(<dyn Reflect>::downcast_mut)
    }
}

// -----------------------------------------------------------------------------
// Struct field iterator

/// Iterator over the `(name, value)` pairs of a [`Struct`].
pub struct StructFieldIter<'a> {
    inner: &'a dyn Struct,
    index: usize,
}

impl StructFieldIter<'_> {
    #[inline(always)]
    pub const fn new(inner: &dyn Struct) -> StructFieldIter<'_> {
        StructFieldIter { inner, index: 0 }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.inner.name_at(self.index)?;
        let value = self.inner.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.inner.field_len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
