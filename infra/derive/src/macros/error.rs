use crate::macros::derived_trait_names;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Field, Fields, FieldsNamed, GenericArgument, Ident, PathArguments, Type};

/// What the expansion needs to know about one enum variant.
struct VariantShape<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    let name = &input.ident;
    let ext = format_ident!("{name}Ext");

    let Data::Enum(data) = &input.data else {
        return quote! { compile_error!("tessera_error can only be applied to enums"); };
    };

    let mut shapes = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        let Fields::Named(fields) = &variant.fields else {
            return syn::Error::new_spanned(
                variant,
                "tessera_error requires named fields so source/context can be wired",
            )
            .to_compile_error();
        };
        match variant_shape(&variant.ident, fields) {
            Ok(shape) => shapes.push(shape),
            Err(err) => return err.to_compile_error(),
        }
    }

    let derives = derived_trait_names(&input.attrs);
    let mut missing = Vec::new();
    if !derives.contains("Debug") {
        missing.push(quote! { Debug });
    }
    if !derives.contains("Error") {
        missing.push(quote! { ::thiserror::Error });
    }
    let derive_attr = if missing.is_empty() { quote!() } else { quote! { #[derive(#(#missing),*)] } };

    let context_arms = shapes.iter().filter(|s| s.has_context).map(|s| {
        let ident = s.ident;
        quote! { #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });

    let source_impls = shapes.iter().filter(|s| s.ident != "Internal").filter_map(|s| {
        let (field, ty) = s.source?;
        let ident = s.ident;
        Some(quote! {
            #[automatically_derived]
            impl From<#ty> for #name {
                #[inline]
                fn from(#field: #ty) -> Self {
                    Self::#ident { #field, context: None }
                }
            }

            impl<T> #ext<T> for ::std::result::Result<T, #ty> {
                #[inline]
                fn context(
                    self,
                    context: impl Into<::std::borrow::Cow<'static, str>>,
                ) -> ::std::result::Result<T, #name> {
                    self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
                }
            }
        })
    });

    let internal_impls = shapes.iter().any(|s| s.ident == "Internal").then(|| {
        quote! {
            impl From<&'static str> for #name {
                #[inline]
                fn from(message: &'static str) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Borrowed(message), context: None }
                }
            }

            impl From<String> for #name {
                #[inline]
                fn from(message: String) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Owned(message), context: None }
                }
            }
        }
    });

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derive_attr
        #input

        pub trait #ext<T> {
            /// Attaches a human-readable context to the error, if any.
            ///
            /// # Errors
            /// Returns the (converted) original error with the context attached.
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::std::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::std::result::Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #(#context_arms)*
                        #[allow(unreachable_patterns)]
                        _ => {}
                    }
                    err
                })
            }
        }

        #(#source_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(
            context: &Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            context.as_ref().map_or(::std::borrow::Cow::Borrowed(""), |c| {
                ::std::borrow::Cow::Owned(format!(" ({c})"))
            })
        }
    }
}

fn variant_shape<'a>(
    ident: &'a Ident,
    fields: &'a FieldsNamed,
) -> Result<VariantShape<'a>, syn::Error> {
    let mut has_context = false;
    let mut source = None;

    for field in &fields.named {
        let Some(field_ident) = &field.ident else { continue };
        if field_ident == "context" {
            if !is_context_type(&field.ty) {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "context field must be Option<Cow<'static, str>>",
                ));
            }
            has_context = true;
        } else if field_ident == "source" || has_attr(field, "source") || has_attr(field, "from") {
            source = Some((field_ident, &field.ty));
        }
    }

    if source.is_some() && !has_context {
        return Err(syn::Error::new_spanned(
            ident,
            "tessera_error requires `context: Option<Cow<'static, str>>` next to a source field",
        ));
    }

    Ok(VariantShape { ident, source, has_context })
}

fn has_attr(field: &Field, name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(name))
}

/// Matches `Option<Cow<'static, str>>` by the last path segments only.
fn is_context_type(ty: &Type) -> bool {
    let Some(cow) = single_generic(ty, "Option") else { return false };
    let Type::Path(path) = cow else { return false };
    let Some(segment) = path.path.segments.last() else { return false };
    if segment.ident != "Cow" {
        return false;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else { return false };
    let mut args = args.args.iter();
    let static_lifetime =
        matches!(args.next(), Some(GenericArgument::Lifetime(lt)) if lt.ident == "static");
    let str_type = matches!(
        args.next(),
        Some(GenericArgument::Type(Type::Path(p)))
            if p.path.segments.last().is_some_and(|s| s.ident == "str")
    );
    static_lifetime && str_type
}

fn single_generic<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else { return None };
    let segment = path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else { return None };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
