#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros shared by every Tessera crate: error enums, feature slices and
//! HTTP-facing models/handlers.
//!
//! The doc examples are `ignore`d because a proc-macro crate cannot use its own
//! macros; working usages live in `tests/ui` and throughout the workspace.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Defines a domain error enum wired into the workspace conventions.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext` trait with `.context(...)` for `Result<T, Name>` and, per variant with a
///   source field, for `Result<T, Source>`.
/// * `From<Source>` for every variant that carries a source (a field named `source` or
///   marked `#[source]`/`#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A private `format_context` helper for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. Variants with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[tessera_derive::tessera_error]
/// pub enum ManifestError {
///     #[error("Manifest parse error{}: {source}", format_context(.context))]
///     Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal manifest error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(raw: &str) -> Result<serde_json::Value, ManifestError> {
///     serde_json::from_str(raw).context("Reading components.json")
/// }
/// ```
#[proc_macro_attribute]
pub fn tessera_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Turns a struct into a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`,
/// dereferences to it and implements `FeatureSlice` so the kernel can store it in
/// the API state.
///
/// # Example
/// ```rust,ignore
/// #[tessera_derive::tessera_slice]
/// pub struct Themes {
///     pub resolver: PageResolver,
/// }
///
/// let slice = Themes::new(ThemesInner { resolver });
/// ```
#[proc_macro_attribute]
pub fn tessera_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}

/// Declares a response model for the HTTP surface.
///
/// Adds `Debug` and `serde::Serialize` when missing, `utoipa::ToSchema` behind the
/// consuming crate's `server` feature, and `#[serde(rename_all = "camelCase")]` unless
/// the struct already sets a rename policy.
///
/// ```rust,ignore
/// #[api_model]
/// struct StatusResponse {
///     status: &'static str,
///     uptime: u64,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(input).into()
}

/// Declares an Axum handler documented through `utoipa::path`.
///
/// Arguments are forwarded verbatim to `utoipa::path` when the consuming crate's
/// `server` feature is enabled.
///
/// ```rust,ignore
/// #[api_handler(get, path = "/status", responses((status = OK)), tag = "System")]
/// pub async fn status_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}
