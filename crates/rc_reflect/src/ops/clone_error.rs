use alloc::borrow::Cow;
use core::fmt;

/// Error returned by [`Reflect::reflect_clone`](crate::Reflect::reflect_clone).
#[derive(Debug)]
pub enum ReflectCloneError {
    /// The type cannot be cloned through reflection.
    NotSupport { type_path: Cow<'static, str> },
    /// A field's clone did not produce a value of the field's type.
    FieldNotCloneable {
        type_path: Cow<'static, str>,
        field: Cow<'static, str>,
    },
}

impl fmt::Display for ReflectCloneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupport { type_path } => {
                write!(f, "`reflect_clone` not supported for `{type_path}`")
            }
            Self::FieldNotCloneable { type_path, field } => {
                write!(f, "field `{type_path}::{field}` cannot be cloned through reflection")
            }
        }
    }
}

impl core::error::Error for ReflectCloneError {}
