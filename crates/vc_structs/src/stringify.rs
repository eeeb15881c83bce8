//! Text conversion used by the `string` tag option.

use alloc::string::{String, ToString};

use crate::Reflect;
use crate::ops::ReflectRef;

/// Converts a value to text for the `string` tag option.
///
/// One level of pointer is followed (a nil pointer yields `None`). Booleans
/// and integers use their usual notation, floats the shortest text that reads
/// back to the same value, never in exponent form. Other values are converted
/// through their [`Display`](core::fmt::Display) capability
/// ([`Reflect::as_display`]); without one the result is `None`.
///
/// # Examples
///
/// ```
/// use vc_structs::stringify::to_string;
///
/// assert_eq!(to_string(&true).as_deref(), Some("true"));
/// assert_eq!(to_string(&-42_i8).as_deref(), Some("-42"));
/// assert_eq!(to_string(&Some(1.1_f32)).as_deref(), Some("1.1"));
/// assert_eq!(to_string(&1e21_f64).as_deref(), Some("1000000000000000000000"));
/// assert_eq!(to_string(&String::from("text")), None);
/// ```
pub fn to_string(value: &dyn Reflect) -> Option<String> {
    let target = match value.reflect_ref() {
        ReflectRef::Pointer(None) => return None,
        ReflectRef::Pointer(Some(inner)) => inner,
        _ => value,
    };

    if let Some(text) = number_to_string(target) {
        return Some(text);
    }

    value
        .as_display()
        .or_else(|| target.as_display())
        .map(|display| display.to_string())
}

/// Converts a bool, number or string key to text.
///
/// Used to build string keys for encoded maps.
pub fn scalar_to_string(value: &dyn Reflect) -> Option<String> {
    match value.reflect_ref() {
        ReflectRef::String(v) => Some(v.into()),
        _ => number_to_string(value),
    }
}

fn number_to_string(value: &dyn Reflect) -> Option<String> {
    match value.reflect_ref() {
        ReflectRef::Bool(v) => Some(v.to_string()),
        ReflectRef::Int(v) => Some(v.to_string()),
        ReflectRef::Uint(v) => Some(v.to_string()),
        ReflectRef::Float(v) => Some(match value.downcast_ref::<f32>() {
            Some(single) => format_float(*single as f64, single.to_string()),
            None => format_float(v, v.to_string()),
        }),
        _ => None,
    }
}

// `Display` for floats is already the shortest round-trip text without an
// exponent; only infinities need renaming.
fn format_float(value: f64, text: String) -> String {
    if value.is_infinite() {
        let sign = if value.is_sign_positive() { "+Inf" } else { "-Inf" };
        return sign.into();
    }
    text
}
