//! Items referenced by `#[derive(Record)]` and `impl_reflect_opaque!`
//! expansions, so that the invoking crate needs no `extern crate alloc`.

pub use alloc::boxed::Box;
pub use alloc::vec::Vec;

pub use crate::impls::clone_value;
