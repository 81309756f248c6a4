use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// Visibility

/// Declared visibility of a struct field.
///
/// Only a plain `pub` counts as [`Public`](Visibility::Public); restricted
/// forms such as `pub(crate)` are [`NonPublic`](Visibility::NonPublic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    Public,
    #[default]
    NonPublic,
}

// -----------------------------------------------------------------------------
// NamedField

/// A reflected named field of a struct.
///
/// The [`name`](NamedField::name) is the *reflected* name, which is the
/// record key a conversion matches against. It equals the Rust identifier
/// unless the field carries `#[reflect(rename = "...")]`.
///
/// # Examples
///
/// ```
/// use rc_reflect::info::{NamedField, Visibility};
///
/// let field = NamedField::new::<u32>("Id")
///     .with_visibility(Visibility::Public)
///     .with_read_only(true);
///
/// assert_eq!(field.name(), "Id");
/// assert!(field.type_is::<u32>());
/// assert!(!field.is_writable());
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // Created on first access.
    type_info: fn() -> &'static TypeInfo,
    visibility: Visibility,
    read_only: bool,
    base: bool,
}

impl NamedField {
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
            visibility: Visibility::NonPublic,
            read_only: false,
            base: false,
        }
    }

    #[inline]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Marks the field as readable but not assignable by conversions.
    #[inline]
    pub const fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Marks the field as holding the base part of its struct.
    ///
    /// The fields of a base are inherited properties of the owner; the base
    /// field itself is not a property.
    #[inline]
    pub const fn with_base(mut self, base: bool) -> Self {
        self.base = base;
        self
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub const fn is_public(&self) -> bool {
        matches!(self.visibility, Visibility::Public)
    }

    #[inline]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    #[inline]
    pub const fn is_writable(&self) -> bool {
        !self.read_only && !self.base
    }

    #[inline]
    pub const fn is_base(&self) -> bool {
        self.base
    }
}
