//! [`Reflect`](crate::Reflect) implementations for foreign types, plus the
//! structural helpers the default trait methods are built on.
//!
//! | Type | Kind |
//! |------|------|
//! | `bool` | `Bool` |
//! | `i8` .. `i64`, `isize` | `Int` |
//! | `u8` .. `u64`, `usize` | `Uint` |
//! | `f32`, `f64` | `Float` |
//! | `String`, `&'static str`, `Cow<'static, str>` | `String` |
//! | `Option<T>` | `Pointer` |
//! | `Box<T>` | same as `T` |
//! | `Vec<T>`, `VecDeque<T>` | `Slice` |
//! | `[T; N]` | `Array` |
//! | `BTreeMap<K, V>`, `HashMap<K, V, S>` | `Map` |
//! | `char`, `()`, `Duration`, `i128`, `u128` | `Opaque` |
//!
//! 128-bit integers do not fit the 64-bit [`ReflectRef`](crate::ops::ReflectRef)
//! scalars, so they are opaque and render through `Display`.

// -----------------------------------------------------------------------------
// Modules

mod list;
mod map;
mod native;
mod opaque;
mod pointer;
mod utils;

// -----------------------------------------------------------------------------
// Exports

pub use utils::{clone_value, debug, is_zero_value, partial_eq};
