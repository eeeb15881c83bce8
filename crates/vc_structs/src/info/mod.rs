//! Compile-time information about reflected types.
//!
//! ## Menu
//!
//! - [`Kind`]: the shape of a reflected value, e.g. `Struct`, `Slice`, `Pointer`.
//! - [`TypeInfo`]: a small `Copy` descriptor holding a type's kind, name and
//!   (for containers) its element and key descriptors.
//! - [`Typed`]: obtains the [`TypeInfo`] of a type.
//! - [`DynamicTyped`]: dynamic dispatch for [`Typed`].
//! - [`RecordInfo`]: the static descriptor table of a record, generated by
//!   `#[derive(Record)]`.
//! - [`FieldInfo`]: one entry of that table: name, position, visibility,
//!   embedding and raw tags.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod kind;
mod record_info;
mod type_info;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::FieldInfo;
pub use kind::Kind;
pub use record_info::RecordInfo;
pub use type_info::{DynamicTyped, TypeInfo, Typed};
