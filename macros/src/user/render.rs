use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{parse_quote, DeriveInput, Ident, LitStr};

use crate::common::{find_attr, parse_directive, parse_single_str};

/// `#[derive(Render)]`: implements `whole_value::Render<T>` for every payload
/// `T` that supports the directive's formatting trait.
///
/// Without `#[render("...")]` the directive is `"{}"`.
///
/// ```ignore
/// #[derive(Tag, Render)]
/// #[render("{:#x}")]
/// enum AddressTag {}
///
/// // expands to
/// impl<__T: ::core::fmt::LowerHex> ::whole_value::Render<__T> for AddressTag {
///     fn render(value: &__T, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
///         ::core::write!(f, "{:#x}", value)
///     }
/// }
/// ```
pub fn expand_derive_render(input: DeriveInput) -> TokenStream2 {
    match derive_render(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn derive_render(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let directive = match find_attr(&input.attrs, "render")? {
        Some(attr) => parse_single_str(attr)?,
        None => LitStr::new("{}", Span::call_site()),
    };

    let format_trait = parse_directive(&directive.value())
        .map_err(|err| syn::Error::new_spanned(&directive, err.to_string()))?;
    let trait_ident = Ident::new(format_trait.ident(), Span::call_site());

    let ident = &input.ident;
    let (_, ty_generics, _) = input.generics.split_for_impl();

    let mut generics = input.generics.clone();
    generics
        .params
        .push(parse_quote!(__T: ::core::fmt::#trait_ident));
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::whole_value::Render<__T> for #ident #ty_generics #where_clause {
            #[inline]
            fn render(value: &__T, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::write!(f, #directive, value)
            }
        }
    })
}
