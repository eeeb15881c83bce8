use alloc::string::String;

use thiserror::Error;

use crate::info::Kind;

/// A caller handed the engine a value of the wrong shape.
///
/// These are contract violations: the input can never succeed, so callers
/// usually propagate them instead of recovering.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StructError {
    #[error("expected a struct, found `{type_path}`")]
    NotAStruct { type_path: &'static str },

    #[error("expected a map, found `{type_path}`")]
    NotAMap { type_path: &'static str },

    #[error("map key `{type_path}` is not a string")]
    KeyNotString { type_path: &'static str },

    #[error("map key `{type_path}` is not an integer")]
    KeyNotInteger { type_path: &'static str },

    #[error("expected a slice or array, found `{type_path}`")]
    NotASlice { type_path: &'static str },

    #[error("element {index} of the slice is `{type_path}`, not a struct")]
    ElementNotStruct { index: usize, type_path: &'static str },

    #[error("field `{name}` not found on element {index}")]
    FieldNotFound { name: String, index: usize },

    #[error("field `{name}` of element {index} is not exported")]
    FieldNotExported { name: String, index: usize },

    #[error("value at {index} is a {kind}, expected a number")]
    NotNumeric { index: usize, kind: Kind },

    #[error("value at {index} is a {kind}, expected a number or a string")]
    NotStringable { index: usize, kind: Kind },
}

/// A field read or write was refused. The field is left unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldError {
    #[error("field `{0}` is not exported")]
    NotExported(&'static str),

    #[error("field `{0}` is not settable")]
    NotSettable(&'static str),

    #[error("field `{field}` is `{expected}`, cannot assign `{found}`")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}
