use alloc::boxed::Box;

use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{List, Optional, Struct};
use crate::{Record, Reflect};

macro_rules! impl_kind_accessors {
    ($name:ident $(<$lt:lifetime>)?, $struct_:ty, $list:ty, $optional:ty, $record:ty, $opaque:ty) => {
        impl $(<$lt>)? $name $(<$lt>)? {
            /// Returns the [`ReflectKind`] of the wrapped value.
            pub fn kind(&self) -> ReflectKind {
                match self {
                    Self::Struct(_) => ReflectKind::Struct,
                    Self::List(_) => ReflectKind::List,
                    Self::Optional(_) => ReflectKind::Optional,
                    Self::Record(_) => ReflectKind::Record,
                    Self::Opaque(_) => ReflectKind::Opaque,
                }
            }

            pub fn as_struct(self) -> Result<$struct_, ReflectKindError> {
                match self {
                    Self::Struct(value) => Ok(value),
                    other => Err(ReflectKindError { expected: ReflectKind::Struct, received: other.kind() }),
                }
            }

            pub fn as_list(self) -> Result<$list, ReflectKindError> {
                match self {
                    Self::List(value) => Ok(value),
                    other => Err(ReflectKindError { expected: ReflectKind::List, received: other.kind() }),
                }
            }

            pub fn as_optional(self) -> Result<$optional, ReflectKindError> {
                match self {
                    Self::Optional(value) => Ok(value),
                    other => Err(ReflectKindError { expected: ReflectKind::Optional, received: other.kind() }),
                }
            }

            pub fn as_record(self) -> Result<$record, ReflectKindError> {
                match self {
                    Self::Record(value) => Ok(value),
                    other => Err(ReflectKindError { expected: ReflectKind::Record, received: other.kind() }),
                }
            }

            pub fn as_opaque(self) -> Result<$opaque, ReflectKindError> {
                match self {
                    Self::Opaque(value) => Ok(value),
                    other => Err(ReflectKindError { expected: ReflectKind::Opaque, received: other.kind() }),
                }
            }
        }
    };
}

/// An immutable view of a reflected value, by kind.
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Optional(&'a dyn Optional),
    Record(&'a Record),
    Opaque(&'a dyn Reflect),
}

/// A mutable view of a reflected value, by kind.
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Optional(&'a mut dyn Optional),
    Record(&'a mut Record),
    Opaque(&'a mut dyn Reflect),
}

/// An owned reflected value, by kind.
pub enum ReflectOwned {
    Struct(Box<dyn Struct>),
    List(Box<dyn List>),
    Optional(Box<dyn Optional>),
    Record(Box<Record>),
    Opaque(Box<dyn Reflect>),
}

impl_kind_accessors!(ReflectRef<'a>, &'a dyn Struct, &'a dyn List, &'a dyn Optional, &'a Record, &'a dyn Reflect);
impl_kind_accessors!(
    ReflectMut<'a>,
    &'a mut dyn Struct,
    &'a mut dyn List,
    &'a mut dyn Optional,
    &'a mut Record,
    &'a mut dyn Reflect
);
impl_kind_accessors!(ReflectOwned, Box<dyn Struct>, Box<dyn List>, Box<dyn Optional>, Box<Record>, Box<dyn Reflect>);
