//! Common parsing utilities
//!
//! Shared helper attribute handling for the derives.

use syn::{Attribute, LitStr};

// =============================================================================
// Helper Attribute Lookup
// =============================================================================

/// Find the single `#[name(...)]` attribute, rejecting repeats.
pub fn find_attr<'a>(attrs: &'a [Attribute], name: &str) -> syn::Result<Option<&'a Attribute>> {
    let mut found: Option<&Attribute> = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident(name)) {
        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                format!("duplicate `#[{}(...)]` attribute", name),
            ));
        }
        found = Some(attr);
    }
    Ok(found)
}

// =============================================================================
// Attribute Payload Parsing
// =============================================================================

/// Parse `#[attr(key = "value")]`, the only accepted key being `key`.
pub fn parse_key_str(attr: &Attribute, key: &str) -> syn::Result<LitStr> {
    let mut value: Option<LitStr> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident(key) {
            if value.is_some() {
                return Err(meta.error(format!("duplicate `{}`", key)));
            }
            value = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error(format!("expected `{} = \"...\"`", key)))
        }
    })?;
    value.ok_or_else(|| syn::Error::new_spanned(attr, format!("expected `{} = \"...\"`", key)))
}

/// Parse `#[attr("value")]`.
pub fn parse_single_str(attr: &Attribute) -> syn::Result<LitStr> {
    attr.parse_args::<LitStr>()
}
