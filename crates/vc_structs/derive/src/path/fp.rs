//! Fully qualified paths of `core` items, safe against shadowing in the
//! invoking crate.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_fp {
    ($($name:ident => $($seg:ident)::+),+ $(,)?) => {$(
        pub(crate) struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                tokens.extend(quote!($(::$seg)+));
            }
        }
    )+};
}

define_fp! {
    OptionFP => core::option::Option,
    ResultFP => core::result::Result,
    DisplayFP => core::fmt::Display,
}
