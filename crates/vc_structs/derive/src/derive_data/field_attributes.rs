use proc_macro2::Span;
use syn::{Attribute, LitStr};

use crate::{RECORD_ATTRIBUTE_NAME, TAG_ATTRIBUTE_NAME};

/// Field level `#[record(...)]` and `#[tag(...)]` attributes.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[record(embed)]`
    pub embed: Option<Span>,
    /// `#[tag(namespace = "tag")]` pairs, in declaration order.
    pub tags: Vec<(String, LitStr)>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if attr.path().is_ident(RECORD_ATTRIBUTE_NAME) {
                this.parse_record(attr)?;
            } else if attr.path().is_ident(TAG_ATTRIBUTE_NAME) {
                this.parse_tag(attr)?;
            }
        }

        Ok(this)
    }

    fn parse_record(&mut self, attr: &Attribute) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("embed") {
                if self.embed.is_some() {
                    return Err(meta.error("duplicate `embed` option"));
                }
                self.embed = Some(meta.path.require_ident()?.span());
                Ok(())
            } else if meta.path.is_ident("display") {
                Err(meta.error("`display` can only be applied to the type"))
            } else {
                Err(meta.error("unknown record option, expected `embed`"))
            }
        })
    }

    /// Format: `#[tag(namespace = "key,option,...", ...)]`
    fn parse_tag(&mut self, attr: &Attribute) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            let namespace = meta.path.require_ident()?.to_string();
            if self.tags.iter().any(|(name, _)| *name == namespace) {
                return Err(meta.error(format_args!("duplicate tag namespace `{namespace}`")));
            }
            let value: LitStr = meta.value()?.parse()?;
            self.tags.push((namespace, value));
            Ok(())
        })
    }
}
