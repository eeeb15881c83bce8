//! Parsing of the derive input.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod record_derive;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use record_derive::RecordDerive;
pub(crate) use type_attributes::TypeAttributes;
