//! Derive macro implementation used by `noda-core`.
//!
//! `noda-derive` is an implementation detail of this workspace. The derives expand in terms of
//! `crate::Dimension`, `crate::UnitSystem` and friends, so they are intended to be used by
//! `noda-core` (or by crates that expose an identical crate-root API).
//!
//! Most users should depend on `noda` and implement the traits by hand for their own types.
//!
//! # Generated impls
//!
//! - `#[derive(Dimension)]` implements `crate::Dimension` with a `VECTOR` built from the listed
//!   exponents.
//! - `#[derive(UnitSystem)]` implements `crate::UnitSystem` with the given name, base units and an
//!   optional system-specific conversion table.
//!
//! # Attributes
//!
//! `#[dimension(...)]`:
//!
//! - `exponents = [1, 1, -2]`: one exponent per base axis. Each element is an integer literal,
//!   optionally negated, or a fraction `n / d`.
//!
//! `#[system(...)]`:
//!
//! - `name = "SI"`: display name
//! - `units = [base::KILOGRAM, base::METER, base::SECOND]`: base unit per axis
//! - `conversions = PATH` (optional): extra conversion table for this system

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    bracketed,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    Attribute, DeriveInput, Expr, Ident, LitInt, LitStr, Path, Token,
};

/// Derive `crate::Dimension` from a `#[dimension(exponents = [...])]` attribute.
///
/// This macro is intended for use by `noda-core`.
#[proc_macro_derive(Dimension, attributes(dimension))]
pub fn derive_dimension(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_dimension_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Derive `crate::UnitSystem` from a `#[system(name = ..., units = [...])]` attribute.
///
/// This macro is intended for use by `noda-core`.
#[proc_macro_derive(UnitSystem, attributes(system))]
pub fn derive_unit_system(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_system_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_dimension_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attr: DimensionAttribute = find_attribute(&input.attrs, "dimension")?;

    let exponents = attr.exponents.iter().map(|e| {
        let (num, den) = (e.num, e.den);
        quote! { crate::Rational::new(#num, #den) }
    });

    Ok(quote! {
        impl crate::Dimension for #name {
            const VECTOR: crate::DimensionVector =
                crate::DimensionVector::from_rationals(&[#(#exponents),*]);
        }
    })
}

fn derive_unit_system_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attr: SystemAttribute = find_attribute(&input.attrs, "system")?;

    let label = &attr.name;
    let units = &attr.units;
    let conversions = attr.conversions.as_ref().map(|path| {
        quote! { const CONVERSIONS: crate::ConversionTable = #path; }
    });

    Ok(quote! {
        impl crate::UnitSystem for #name {
            const NAME: &'static str = #label;
            const BASE_UNITS: &'static [crate::BaseUnit] = &[#(#units),*];
            #conversions
        }
    })
}

fn find_attribute<A: Parse>(attrs: &[Attribute], ident: &str) -> syn::Result<A> {
    for attr in attrs {
        if attr.path().is_ident(ident) {
            return attr.parse_args::<A>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        format!("missing #[{}(...)] attribute", ident),
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// #[dimension(...)]
// ─────────────────────────────────────────────────────────────────────────────

/// One exponent, `n` or `n / d`, kept unreduced.
#[derive(Debug, PartialEq)]
struct ExponentLit {
    num: i64,
    den: i64,
}

fn parse_signed(input: ParseStream) -> syn::Result<i64> {
    let negative = input.peek(Token![-]);
    if negative {
        input.parse::<Token![-]>()?;
    }
    let lit: LitInt = input.parse()?;
    let value: i64 = lit.base10_parse()?;
    Ok(if negative { -value } else { value })
}

impl Parse for ExponentLit {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let num = parse_signed(input)?;
        if !input.peek(Token![/]) {
            return Ok(ExponentLit { num, den: 1 });
        }
        input.parse::<Token![/]>()?;
        let span = input.span();
        let den = parse_signed(input)?;
        if den == 0 {
            return Err(syn::Error::new(span, "exponent denominator must be non-zero"));
        }
        Ok(ExponentLit { num, den })
    }
}

/// Parsed contents of the `#[dimension(...)]` attribute.
struct DimensionAttribute {
    exponents: Vec<ExponentLit>,
}

impl Parse for DimensionAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut exponents: Option<Vec<ExponentLit>> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "exponents" => {
                    let content;
                    bracketed!(content in input);
                    let list = Punctuated::<ExponentLit, Token![,]>::parse_terminated(&content)?;
                    exponents = Some(list.into_iter().collect());
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let exponents = exponents.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `exponents`")
        })?;

        Ok(DimensionAttribute { exponents })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// #[system(...)]
// ─────────────────────────────────────────────────────────────────────────────

/// Parsed contents of the `#[system(...)]` attribute.
struct SystemAttribute {
    name: LitStr,
    units: Vec<Expr>,
    conversions: Option<Path>,
}

impl Parse for SystemAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name: Option<LitStr> = None;
        let mut units: Option<Vec<Expr>> = None;
        let mut conversions: Option<Path> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    name = Some(input.parse()?);
                }
                "units" => {
                    let content;
                    bracketed!(content in input);
                    let list = Punctuated::<Expr, Token![,]>::parse_terminated(&content)?;
                    units = Some(list.into_iter().collect());
                }
                "conversions" => {
                    conversions = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let name =
            name.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `name`"))?;
        let units = units
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `units`"))?;

        Ok(SystemAttribute {
            name,
            units,
            conversions,
        })
    }
}
