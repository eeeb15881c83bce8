//! Code generation for `#[derive(Record)]`.

// -----------------------------------------------------------------------------
// Modules

mod struct_clone;
mod trait_record;
mod trait_reflect;
mod trait_typed;

// -----------------------------------------------------------------------------
// Generation

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::RecordDerive;

/// Generates the `Typed`, `Record` and `Reflect` impls.
///
/// Everything is wrapped in an anonymous const so helper items cannot leak
/// into the user's namespace.
pub(crate) fn impl_record(record: &RecordDerive) -> TokenStream {
    let typed_impl = trait_typed::impl_trait_typed(record);
    let record_impl = trait_record::impl_trait_record(record);
    let reflect_impl = trait_reflect::impl_trait_reflect(record);

    quote! {
        const _: () = {
            #typed_impl

            #record_impl

            #reflect_impl
        };
    }
}
