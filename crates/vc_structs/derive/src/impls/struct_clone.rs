use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::RecordDerive;

// Generate `Reflect::reflect_clone` tokens, cloning field by field through
// their own `Reflect` impls.
pub(crate) fn get_struct_clone_impl(record: &RecordDerive) -> TokenStream {
    let vc_structs_path = record.vc_structs_path();
    let macro_exports_ = crate::path::macro_exports_(vc_structs_path);
    let reflect_ = crate::path::reflect_(vc_structs_path);

    let members: Vec<_> = record.fields.iter().map(|field| field.ident).collect();

    quote! {
        fn reflect_clone(&self) -> #macro_exports_::Box<dyn #reflect_> {
            #macro_exports_::Box::new(Self {
                #(#members: #macro_exports_::clone_value(&self.#members),)*
            })
        }
    }
}
