use proc_macro2::Span;
use syn::Attribute;

use crate::RECORD_ATTRIBUTE_NAME;

/// Type level `#[record(...)]` options.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[record(display)]`: the type implements `Display`.
    pub display: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if attr.path().is_ident(crate::TAG_ATTRIBUTE_NAME) {
                return Err(syn::Error::new_spanned(
                    attr,
                    "`#[tag(...)]` can only be applied to fields",
                ));
            }
            if !attr.path().is_ident(RECORD_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("display") {
                    if this.display.is_some() {
                        return Err(meta.error("duplicate `display` option"));
                    }
                    this.display = Some(meta.path.require_ident()?.span());
                    Ok(())
                } else if meta.path.is_ident("embed") {
                    Err(meta.error("`embed` can only be applied to fields"))
                } else {
                    Err(meta.error("unknown record option, expected `display`"))
                }
            })?;
        }

        Ok(this)
    }
}
