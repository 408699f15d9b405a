use crate::macros::derived_trait_names;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, ItemFn, ItemStruct};

/// Expands `#[api_model]`: serialization derives, optional `ToSchema`, camelCase.
pub fn expand_api_model(input: ItemStruct) -> TokenStream {
    let derives = derived_trait_names(&input.attrs);

    let mut missing = Vec::new();
    if !derives.contains("Debug") {
        missing.push(quote! { Debug });
    }
    if !derives.contains("Serialize") {
        missing.push(quote! { ::serde::Serialize });
    }
    let derive_attr = if missing.is_empty() { quote!() } else { quote! { #[derive(#(#missing),*)] } };

    let schema_attr = if derives.contains("ToSchema") {
        quote!()
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    let rename_attr = if has_rename_all(&input.attrs) {
        quote!()
    } else {
        quote! { #[serde(rename_all = "camelCase")] }
    };

    quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #input
    }
}

/// Expands `#[api_handler]`: forwards the arguments to `utoipa::path`.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

fn has_rename_all(attrs: &[Attribute]) -> bool {
    let mut found = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                found = true;
            }
            // Skip any value so parsing continues past `key = "..."` pairs.
            if meta.input.peek(syn::Token![=]) {
                let _: syn::LitStr = meta.value()?.parse()?;
            }
            Ok(())
        });
    }
    found
}
