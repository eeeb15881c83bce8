use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::RecordDerive;
use crate::path::fp::OptionFP;

pub(crate) fn impl_trait_record(record: &RecordDerive) -> TokenStream {
    let vc_structs_path = record.vc_structs_path();
    let record_ = crate::path::record_(vc_structs_path);
    let record_info_ = crate::path::record_info_(vc_structs_path);
    let reflect_ = crate::path::reflect_(vc_structs_path);
    let macro_exports_ = crate::path::macro_exports_(vc_structs_path);

    let ident = record.ident;
    let name = ident.to_string();
    let generics = record.bounded_generics();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let field_infos = record
        .fields
        .iter()
        .map(|field| field.to_info_tokens(vc_structs_path));

    let members: Vec<_> = record.fields.iter().map(|field| field.ident).collect();
    let field_len = record.fields.len();

    let field_at_arms = record.fields.iter().map(|field| {
        let index = field.index;
        let member = field.ident;
        quote! { #index => #OptionFP::Some(&self.#member), }
    });
    let field_at_mut_arms = record.fields.iter().map(|field| {
        let index = field.index;
        let member = field.ident;
        quote! { #index => #OptionFP::Some(&mut self.#member), }
    });

    quote! {
        impl #impl_generics #record_ for #ident #ty_generics #where_clause {
            fn record_info(&self) -> &'static #record_info_ {
                // The table holds no generic data, so one static serves every
                // instantiation.
                static INFO: #record_info_ = #record_info_::new(#name, &[
                    #(#field_infos),*
                ]);
                &INFO
            }

            fn field_at(&self, index: usize) -> #OptionFP<&dyn #reflect_> {
                match index {
                    #(#field_at_arms)*
                    _ => #OptionFP::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #OptionFP<&mut dyn #reflect_> {
                match index {
                    #(#field_at_mut_arms)*
                    _ => #OptionFP::None,
                }
            }

            fn fields_mut(&mut self) -> #macro_exports_::Vec<&mut dyn #reflect_> {
                let fields: [&mut dyn #reflect_; #field_len] = [
                    #(&mut self.#members,)*
                ];
                #macro_exports_::Vec::from(fields)
            }

            #[inline]
            fn as_record(&self) -> &dyn #record_ {
                self
            }
        }
    }
}
