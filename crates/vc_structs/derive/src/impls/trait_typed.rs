use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::RecordDerive;

pub(crate) fn impl_trait_typed(record: &RecordDerive) -> TokenStream {
    let vc_structs_path = record.vc_structs_path();
    let typed_ = crate::path::typed_(vc_structs_path);
    let type_info_ = crate::path::type_info_(vc_structs_path);
    let kind_ = crate::path::kind_(vc_structs_path);

    let ident = record.ident;
    let generics = record.bounded_generics();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            #[inline]
            fn type_info() -> #type_info_ {
                #type_info_::new::<Self>(#kind_::Struct)
            }
        }
    }
}
