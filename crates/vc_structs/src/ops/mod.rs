//! Data access interfaces for reflected values.
//!
//! ## Menu
//!
//! - [`Record`]: for records with named fields, implemented by `#[derive(Record)]`.
//! - [`List`]: for slices and arrays (e.g. `Vec<i32>`, `[u8; 4]`).
//! - [`Map`]: for map-like containers (e.g. `BTreeMap<String, i32>`).
//!
//! [`ReflectRef`] and [`ReflectMut`] are the borrowed views returned by
//! [`Reflect::reflect_ref`](crate::Reflect::reflect_ref) and
//! [`Reflect::reflect_mut`](crate::Reflect::reflect_mut).

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod map_ops;
mod record_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};
pub use list_ops::{List, ListItemIter};
pub use map_ops::{Map, MapIter};
pub use record_ops::{Record, RecordFieldIter};
