use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::derive_data::RecordDerive;
use crate::path::fp::{DisplayFP, OptionFP, ResultFP};

pub(crate) fn impl_trait_reflect(record: &RecordDerive) -> TokenStream {
    let vc_structs_path = record.vc_structs_path();
    let reflect_ = crate::path::reflect_(vc_structs_path);
    let kind_ = crate::path::kind_(vc_structs_path);
    let reflect_ref_ = crate::path::reflect_ref_(vc_structs_path);
    let reflect_mut_ = crate::path::reflect_mut_(vc_structs_path);
    let macro_exports_ = crate::path::macro_exports_(vc_structs_path);

    let ident = record.ident;
    let generics = record.bounded_generics();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let zero_fields = record.fields.iter().map(|field| {
        let ty = field.ty;
        let member = field.ident;
        quote! {
            <#ty as #reflect_>::set_zero(&mut self.#member);
        }
    });

    let clone_fn = super::struct_clone::get_struct_clone_impl(record);

    let display_fn = match record.attrs.display {
        Some(span) => quote_spanned! { span =>
            #[inline]
            fn as_display(&self) -> #OptionFP<&dyn #DisplayFP> {
                #OptionFP::Some(self)
            }
        },
        None => crate::utils::empty(),
    };

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #kind_ {
                #kind_::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Struct(self)
            }

            fn set(
                &mut self,
                value: #macro_exports_::Box<dyn #reflect_>,
            ) -> #ResultFP<(), #macro_exports_::Box<dyn #reflect_>> {
                *self = <dyn #reflect_>::take::<Self>(value)?;
                #ResultFP::Ok(())
            }

            fn set_zero(&mut self) {
                #(#zero_fields)*
            }

            #clone_fn

            #display_fn
        }
    }
}
