//! Tag-driven record introspection.
//!
//! `vc_structs` walks the fields of a record (any struct with
//! `#[derive(Record)]`) and turns it into dynamic data: a [`ValueMap`], a
//! positional list of [`Value`]s, or a set of [`FieldView`]s that can read and
//! write individual fields.
//!
//! What ends up in the output is driven by per-field tags. Each field can carry
//! a tag string per namespace, the active namespace being `"map"` unless a
//! different one is chosen:
//!
//! | Tag            | Meaning                                                  |
//! |----------------|----------------------------------------------------------|
//! | `"name"`       | emit the field under `name`                              |
//! | `"-"`          | skip the field                                           |
//! | `",omitempty"` | skip the field when it is empty                          |
//! | `",omitnested"`| do not recurse into nested records, keep the raw value   |
//! | `",flatten"`   | splice a nested map into the parent                      |
//! | `",string"`    | emit scalars (and `Display` types) as text               |
//!
//! # Examples
//!
//! ```
//! use vc_structs::{StructView, Value, derive::Record};
//!
//! #[derive(Record)]
//! struct Server {
//!     #[tag(map = "server_name")]
//!     pub name: String,
//!     pub id: i32,
//!     #[tag(map = ",omitempty")]
//!     pub enabled: bool,
//!     secret: String,
//! }
//!
//! let server = Server {
//!     name: "Arslan".into(),
//!     id: 123456,
//!     enabled: false,
//!     secret: "hidden".into(),
//! };
//!
//! let view = StructView::of(&server);
//! let map = view.map();
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map["server_name"], Value::from("Arslan"));
//! assert_eq!(map["id"], Value::Int(123456));
//!
//! assert_eq!(view.names(), ["name", "id", "enabled", "secret"]);
//! assert!(view.has_zero());
//! # let _ = &server.secret;
//! ```
//!
//! # Reflection
//!
//! The engine relies on the [`Reflect`] trait, which is implemented for
//! primitives, strings, `Option` (a nullable pointer), `Box`, `Vec`, arrays,
//! maps and [`Value`] itself. Records get it from `#[derive(Record)]`,
//! other leaf types can be registered with [`impl_reflect_opaque!`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::vc_structs::...` paths, which must also resolve
// inside this crate's own tests.
extern crate self as vc_structs;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod api;
mod encode;
mod error;
mod keys;
mod reflection;
mod view;

pub mod empty;
pub mod field;
pub mod impls;
pub mod info;
pub mod ops;
pub mod slice;
pub mod stringify;
pub mod tag;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use api::{fields, fields_with_tag, fill_map, fill_map_with_tag, for_each_field};
pub use api::{has_zero, has_zero_with_tag, is_zero, is_zero_with_tag};
pub use api::{is_struct, name, names, names_with_tag};
pub use api::{map, map_slice, map_slice_with_tag, map_with_tag, values, values_with_tag};
pub use encode::Encoder;
pub use error::{FieldError, StructError};
pub use field::FieldView;
pub use keys::{keys_int_of_map, keys_of_map};
pub use reflection::Reflect;
pub use slice::StructSlice;
pub use value::{Value, ValueMap};
pub use view::StructView;

pub use vc_structs_derive as derive;

/// The tag namespace used when none is chosen explicitly.
pub const DEFAULT_TAG_NAME: &str = "map";
