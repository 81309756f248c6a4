use crate::info::Typed;

/// Creates a [`TypeTrait`](crate::registry::TypeTrait) for the type `T`.
///
/// Used by `#[derive(Reflect)]` to fill the trait table passed to
/// [`TypeMeta::insert_trait`](crate::registry::TypeMeta::insert_trait).
///
/// ```
/// use rc_reflect::registry::{FromType, TypeMeta, TypeTraitDefault};
///
/// let mut meta = TypeMeta::of::<String>();
/// meta.insert_trait::<TypeTraitDefault>(FromType::<String>::from_type());
/// assert!(meta.has_trait::<TypeTraitDefault>());
/// ```
pub trait FromType<T: Typed> {
    fn from_type() -> Self;
}
