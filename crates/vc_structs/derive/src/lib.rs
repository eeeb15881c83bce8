//! See [`Record`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static RECORD_ATTRIBUTE_NAME: &str = "record";
static TAG_ATTRIBUTE_NAME: &str = "tag";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Record Derivation
///
/// `#[derive(Record)]` implements `Typed`, `Record` and `Reflect` for a struct
/// with named fields, so it can be walked by `vc_structs`.
///
/// Every field type must implement `Reflect` and `Typed`. Type parameters get
/// both bounds added automatically. Tuple structs, unit structs, enums, unions
/// and lifetime parameters are rejected.
///
/// A field is exported when it is declared `pub`. Only exported fields are
/// encoded; unexported ones are still listed and can be read through their
/// field views (but not their values).
///
/// ## Tags
///
/// Each field carries at most one tag string per namespace:
///
/// ```rust, ignore
/// #[derive(Record)]
/// struct User {
///     #[tag(map = "user_name,omitempty", json = "name")]
///     pub name: String,
///     #[tag(map = "-")]
///     pub password: String,
/// }
/// ```
///
/// Several `#[tag(...)]` attributes may be used; a namespace given twice is an
/// error.
///
/// ## Embedding
///
/// `#[record(embed)]` marks a field as embedded: when encoded, the fields of
/// the record it holds are merged into the parent, and field lookup by name
/// finds them through the parent.
///
/// ```rust, ignore
/// #[derive(Record)]
/// struct Admin {
///     #[record(embed)]
///     pub user: Option<Box<User>>,
///     pub level: u8,
/// }
/// ```
///
/// ## Display
///
/// `#[record(display)]` on the type exposes its `Display` implementation to
/// the `string` tag option.
///
/// ```rust, ignore
/// #[derive(Record)]
/// #[record(display)]
/// struct Version {
///     pub major: u32,
///     pub minor: u32,
/// }
///
/// impl core::fmt::Display for Version { /* ... */ }
/// ```
#[proc_macro_derive(Record, attributes(record, tag))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::RecordDerive::from_input(&ast) {
        Ok(record) => impls::impl_record(&record).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
