use core::{error, fmt};

use crate::info::{ListInfo, OpaqueInfo, OptionalInfo, RecordInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The kind of a reflected value.
///
/// Obtained from [`TypeInfo::kind`] or, for a value, from
/// [`Reflect::reflect_kind`](crate::Reflect::reflect_kind). The two can differ
/// for dynamic types: a [`DynamicList`](crate::ops::DynamicList) behaves as a
/// `List` although its `TypeInfo` is opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    List,
    Optional,
    Record,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Optional => f.pad("Optional"),
            Self::Record => f.pad("Record"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a [`TypeInfo`] is not of the expected kind.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// Shape

/// How values of a type take part in a record conversion.
///
/// | Kind | Shape |
/// |---|---|
/// | `Struct`, `Record` | `Compound` |
/// | `List` | `Collection` |
/// | `Opaque` | `Scalar` |
/// | `Optional` | shape of the wrapped type |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Assigned as-is.
    Scalar,
    /// Built from a nested record.
    Compound,
    /// Built element by element from a sequence.
    Collection,
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time information about a reflected type.
///
/// Retrieved through [`Typed::type_info`](crate::info::Typed::type_info) when
/// the type is known statically, through
/// [`DynamicTyped::reflect_type_info`](crate::info::DynamicTyped) for a
/// `dyn Reflect`, or from a [`TypeRegistry`](crate::registry::TypeRegistry)
/// by id, path or name.
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    List(ListInfo),
    Optional(OptionalInfo),
    Record(RecordInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the [`", stringify!($info), "`] if this is a `", stringify!($kind), "`.")]
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_optional: Optional => OptionalInfo);
    impl_cast_method!(as_record: Record => RecordInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the [`Type`] of the described type.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Optional(info) => info.ty(),
            Self::Record(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`] of the described type.
    ///
    /// ```
    /// use rc_reflect::info::{Typed, ReflectKind};
    ///
    /// assert_eq!(i32::type_info().kind(), ReflectKind::Opaque);
    /// ```
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Record(_) => ReflectKind::Record,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Strips any number of `Option` layers.
    ///
    /// ```
    /// use rc_reflect::info::Typed;
    ///
    /// let info = <Option<Option<u8>>>::type_info().unwrap_optional();
    /// assert!(info.type_is::<u8>());
    /// ```
    pub fn unwrap_optional(&self) -> &TypeInfo {
        let mut info = self;
        while let Self::Optional(optional) = info {
            info = optional.inner_info();
        }
        info
    }

    /// Returns the conversion [`Shape`] of the described type.
    ///
    /// ```
    /// use rc_reflect::{Record, info::{Shape, Typed}};
    ///
    /// assert_eq!(String::type_info().shape(), Shape::Scalar);
    /// assert_eq!(Record::type_info().shape(), Shape::Compound);
    /// assert_eq!(<Box<[u8]>>::type_info().shape(), Shape::Collection);
    /// assert_eq!(<Option<Vec<u8>>>::type_info().shape(), Shape::Collection);
    /// ```
    pub fn shape(&self) -> Shape {
        match self {
            Self::Struct(_) | Self::Record(_) => Shape::Compound,
            Self::List(_) => Shape::Collection,
            Self::Opaque(_) => Shape::Scalar,
            Self::Optional(info) => info.inner_info().shape(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::info::{ReflectKind, Shape, Typed};

    #[test]
    fn kind_cast_error() {
        let err = i32::type_info().as_struct().unwrap_err();
        assert_eq!(err.expected, ReflectKind::Struct);
        assert_eq!(err.received, ReflectKind::Opaque);
        assert_eq!(
            err.to_string(),
            "reflect kind mismatch: expected Struct, received Opaque"
        );
    }

    #[test]
    fn optional_shape_follows_inner() {
        assert_eq!(<Option<String>>::type_info().shape(), Shape::Scalar);
        assert_eq!(<Option<crate::Record>>::type_info().shape(), Shape::Compound);
    }
}
