use std::borrow::Cow;

use rc_reflect::ops::ReflectCloneError;
use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Error returned by record conversions.
///
/// Every variant aborts the whole call; nothing is retried and no partial
/// result is returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The target type, or a nested compound type reached while converting,
    /// has no registered default constructor (`#[reflect(default)]`).
    #[error("Unable to create an instance of `{type_path}`: no default constructor")]
    MissingDefaultConstructor { type_path: &'static str },

    /// A converted value is not assignable to the property it targets.
    ///
    /// `property` is the record key, or `Key[index]` for an element of a
    /// collection property.
    #[error("Cannot assign a value of type `{found}` to `{owner}::{property}` of type `{expected}`")]
    PropertyAssignment {
        owner: &'static str,
        property: Cow<'static, str>,
        expected: &'static str,
        found: &'static str,
    },

    /// An existing instance passed in for population is of another type.
    #[error("Instance mismatch: expected `{expected}`, found `{found}`")]
    InstanceMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// No registered type has the requested name or path.
    #[error("No registered type is named `{name}`")]
    UnknownType { name: String },

    /// A value could not be copied out of its source.
    #[error(transparent)]
    Clone(#[from] ReflectCloneError),
}

#[cfg(test)]
mod tests {
    use rc_reflect::ops::ReflectCloneError;

    use super::ConvertError;

    #[test]
    fn messages() {
        let err = ConvertError::PropertyAssignment {
            owner: "app::Order",
            property: "Lines[2]".into(),
            expected: "i32",
            found: "alloc::string::String",
        };
        assert_eq!(
            err.to_string(),
            "Cannot assign a value of type `alloc::string::String` to `app::Order::Lines[2]` of type `i32`"
        );

        let err = ConvertError::from(ReflectCloneError::NotSupport {
            type_path: "app::Handle".into(),
        });
        assert_eq!(err.to_string(), "`reflect_clone` not supported for `app::Handle`");
    }
}
