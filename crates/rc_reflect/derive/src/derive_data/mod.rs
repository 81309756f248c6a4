//! Parsed input of `#[derive(Reflect)]`.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod reflect_struct;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use reflect_struct::{ReflectStruct, StructField};
pub(crate) use type_attributes::TypeAttributes;
