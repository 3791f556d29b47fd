use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, LitStr};

use crate::common::{find_attr, parse_key_str};

/// `#[derive(Tag)]`: implements `whole_value::Tag` with `NAME` taken from
/// `#[tag(name = "...")]` or the type's identifier.
///
/// Tags are markers: unions and structs with fields are rejected.
pub fn expand_derive_tag(input: DeriveInput) -> TokenStream2 {
    match derive_tag(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn derive_tag(input: &DeriveInput) -> syn::Result<TokenStream2> {
    match &input.data {
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Tag cannot be derived for unions",
            ));
        }
        Data::Struct(data) if !data.fields.is_empty() => {
            return Err(syn::Error::new_spanned(
                &data.fields,
                format!(
                    "Tag cannot be derived for `{}`: a tag carries no data\n\
                     \n\
                     Use a unit struct or an empty enum.",
                    input.ident
                ),
            ));
        }
        _ => {}
    }

    let name = match find_attr(&input.attrs, "tag")? {
        Some(attr) => parse_key_str(attr, "name")?,
        None => LitStr::new(&input.ident.to_string(), input.ident.span()),
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::whole_value::Tag for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
        }
    })
}
