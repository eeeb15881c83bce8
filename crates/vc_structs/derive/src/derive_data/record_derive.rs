use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Fields, GenericParam, Generics, Ident, Path, Type, Visibility};

use super::{FieldAttributes, TypeAttributes};

// -----------------------------------------------------------------------------
// RecordField

/// One named field of the derive input.
pub(crate) struct RecordField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub index: usize,
    pub exported: bool,
    pub attrs: FieldAttributes,
}

impl RecordField<'_> {
    /// Generates the `FieldInfo` construction of this field.
    ///
    /// Similar to following:
    ///
    /// ```ignore
    /// _path_::FieldInfo::new("name", 0)
    ///     .with_exported(true)
    ///     .with_embedded(false)
    ///     .with_tags(&[("map", "key,omitempty")])
    /// ```
    pub fn to_info_tokens(&self, vc_structs_path: &Path) -> TokenStream {
        let field_info_ = crate::path::field_info_(vc_structs_path);
        let name = self.ident.to_string();
        let index = self.index;
        let exported = self.exported;
        let embedded = self.attrs.embed.is_some();

        let tags = self.attrs.tags.iter().map(|(namespace, tag)| {
            quote! { (#namespace, #tag) }
        });

        quote! {
            #field_info_::new(#name, #index)
                .with_exported(#exported)
                .with_embedded(#embedded)
                .with_tags(&[ #(#tags),* ])
        }
    }
}

// -----------------------------------------------------------------------------
// RecordDerive

/// The parsed input of `#[derive(Record)]`.
pub(crate) struct RecordDerive<'a> {
    vc_structs_path: Path,
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub attrs: TypeAttributes,
    pub fields: Vec<RecordField<'a>>,
}

impl<'a> RecordDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        if let Some(GenericParam::Lifetime(param)) = input
            .generics
            .params
            .iter()
            .find(|param| matches!(param, GenericParam::Lifetime(_)))
        {
            return Err(syn::Error::new_spanned(
                param,
                "`Record` cannot be derived for types with lifetime parameters",
            ));
        }

        let named = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => &fields.named,
                Fields::Unnamed(_) | Fields::Unit => {
                    return Err(syn::Error::new(
                        Span::call_site(),
                        "`Record` can only be derived for structs with named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new_spanned(
                    data.enum_token,
                    "`Record` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new_spanned(
                    data.union_token,
                    "`Record` cannot be derived for unions",
                ));
            }
        };

        let fields = named
            .iter()
            .enumerate()
            .map(|(index, field)| {
                Ok(RecordField {
                    // named fields always have an ident
                    ident: field.ident.as_ref().ok_or_else(|| {
                        syn::Error::new_spanned(field, "expected a named field")
                    })?,
                    ty: &field.ty,
                    index,
                    exported: matches!(field.vis, Visibility::Public(_)),
                    attrs: FieldAttributes::parse_attrs(&field.attrs)?,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self {
            vc_structs_path: crate::path::vc_structs(),
            ident: &input.ident,
            generics: &input.generics,
            attrs,
            fields,
        })
    }

    #[inline]
    pub fn vc_structs_path(&self) -> &Path {
        &self.vc_structs_path
    }

    /// Returns the generics with `Reflect + Typed` bounds added to every type
    /// parameter.
    pub fn bounded_generics(&self) -> Generics {
        let reflect_ = crate::path::reflect_(&self.vc_structs_path);
        let typed_ = crate::path::typed_(&self.vc_structs_path);

        let mut generics = self.generics.clone();
        for param in generics.type_params_mut() {
            param.bounds.push(syn::parse_quote!(#reflect_));
            param.bounds.push(syn::parse_quote!(#typed_));
        }
        generics
    }
}
