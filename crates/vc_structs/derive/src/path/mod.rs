//! Paths of the items the generated code refers to.
//!
//! Keeping them in one place limits the changes needed when `vc_structs`
//! moves things around.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `vc_structs` crate.
///
/// 1. For crates that depend on `vc_structs`, `::vc_structs` is returned.
/// 2. For crates that depend on `vc_inspect`, `::vc_inspect::structs` is returned.
/// 3. Otherwise `::vc_structs` is returned, which may be incorrect.
///
/// This reads the invoking crate's manifest, so it is called once per
/// derive and the result passed around.
pub(crate) fn vc_structs() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_structs"))
}

// -----------------------------------------------------------------------------
// Modules

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn macro_exports_(vc_structs_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_structs_path::__macro_exports
    }
}

#[inline(always)]
pub(crate) fn reflect_(vc_structs_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_structs_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn typed_(vc_structs_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_structs_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(vc_structs_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_structs_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn kind_(vc_structs_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_structs_path::info::Kind
    }
}

#[inline(always)]
pub(crate) fn field_info_(vc_structs_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_structs_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn record_info_(vc_structs_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_structs_path::info::RecordInfo
    }
}

#[inline(always)]
pub(crate) fn record_(vc_structs_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_structs_path::ops::Record
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(vc_structs_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_structs_path::ops::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn reflect_mut_(vc_structs_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_structs_path::ops::ReflectMut
    }
}
