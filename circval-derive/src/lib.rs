//! Derive macro implementation used by `circval-core`.
//!
//! `circval-derive` is an implementation detail of this workspace. The `WrapRange` derive expands in terms of
//! `crate::WrapRange`, so it is intended to be used by `circval-core` (or by crates that expose an identical
//! crate-root API). Downstream crates usually implement the trait by hand; it only has four constants.
//!
//! # Generated items
//!
//! For a range marker type `MyRange`, the derive emits:
//!
//! - `impl crate::WrapRange for MyRange`
//! - a `const _: () = ...;` item that evaluates the trait's descriptor assertion, so a malformed range
//!   (`upper <= lower`, non-finite bounds, `zero` outside `[lower, upper)`) is rejected at compile time even if the
//!   type is never used.
//!
//! # Attributes
//!
//! The derive reads a required `#[range(...)]` attribute:
//!
//! - `symbol = "deg"`: displayed range symbol, also used as the registry key
//! - `lower = 0.0`: inclusive lower bound of the domain
//! - `upper = 360.0`: exclusive upper bound of the domain
//! - `zero = 0.0`: the physical zero of the domain, inside `[lower, upper)`

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token,
};

/// Derive `crate::WrapRange` for a zero-sized range marker.
///
/// The derive must be paired with a `#[range(...)]` attribute providing `symbol`, `lower`, `upper` and `zero`.
///
/// This macro is intended for use by `circval-core`.
#[proc_macro_derive(WrapRange, attributes(range))]
pub fn derive_wrap_range(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_wrap_range_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_wrap_range_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let range_attr = parse_range_attribute(&input.attrs)?;

    let symbol = &range_attr.symbol;
    let lower = &range_attr.lower;
    let upper = &range_attr.upper;
    let zero = &range_attr.zero;

    let expanded = quote! {
        impl crate::WrapRange for #name {
            const LOWER: f64 = #lower;
            const UPPER: f64 = #upper;
            const ZERO: f64 = #zero;
            const SYMBOL: &'static str = #symbol;
        }

        const _: () = <#name as crate::WrapRange>::DESCRIPTOR_CHECK;
    };

    Ok(expanded)
}

/// Parsed contents of the `#[range(...)]` attribute.
struct RangeAttribute {
    symbol: LitStr,
    lower: Expr,
    upper: Expr,
    zero: Expr,
}

impl Parse for RangeAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut lower: Option<Expr> = None;
        let mut upper: Option<Expr> = None;
        let mut zero: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "lower" => {
                    lower = Some(input.parse()?);
                }
                "upper" => {
                    upper = Some(input.parse()?);
                }
                "zero" => {
                    zero = Some(input.parse()?);
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

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let lower = lower
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `lower`"))?;
        let upper = upper
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `upper`"))?;
        let zero = zero
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `zero`"))?;

        if symbol.value().is_empty() {
            return Err(syn::Error::new(symbol.span(), "`symbol` must not be empty"));
        }

        Ok(RangeAttribute {
            symbol,
            lower,
            upper,
            zero,
        })
    }
}

fn parse_range_attribute(attrs: &[Attribute]) -> syn::Result<RangeAttribute> {
    for attr in attrs {
        if attr.path().is_ident("range") {
            return attr.parse_args::<RangeAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[range(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_range_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[range(symbol = "deg", lower = 0.0, upper = 360.0, zero = 0.0)]
            pub struct UnsignedDeg;
        };

        let attr = parse_range_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "deg");
    }

    #[test]
    fn test_parse_range_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub struct UnsignedDeg;
        };

        let result = parse_range_attribute(&input.attrs);
        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing #[range(...)] attribute"));
    }

    #[test]
    fn test_parse_range_attribute_missing_each_field() {
        let cases: [(DeriveInput, &str); 4] = [
            (
                parse_quote! {
                    #[range(lower = 0.0, upper = 360.0, zero = 0.0)]
                    pub struct R;
                },
                "symbol",
            ),
            (
                parse_quote! {
                    #[range(symbol = "r", upper = 360.0, zero = 0.0)]
                    pub struct R;
                },
                "lower",
            ),
            (
                parse_quote! {
                    #[range(symbol = "r", lower = 0.0, zero = 0.0)]
                    pub struct R;
                },
                "upper",
            ),
            (
                parse_quote! {
                    #[range(symbol = "r", lower = 0.0, upper = 360.0)]
                    pub struct R;
                },
                "zero",
            ),
        ];

        for (input, field) in cases {
            let err_msg = parse_range_attribute(&input.attrs)
                .err()
                .unwrap()
                .to_string();
            assert!(
                err_msg.contains(&format!("missing required attribute `{}`", field)),
                "unexpected message for `{}`: {}",
                field,
                err_msg
            );
        }
    }

    #[test]
    fn test_parse_range_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[range(symbol = "deg", lower = 0.0, upper = 360.0, zero = 0.0, ratio = 1.0)]
            pub struct UnsignedDeg;
        };

        let err_msg = parse_range_attribute(&input.attrs)
            .err()
            .unwrap()
            .to_string();
        assert!(err_msg.contains("unknown attribute `ratio`"));
    }

    #[test]
    fn test_parse_range_attribute_empty_symbol() {
        let tokens = quote! {
            symbol = "", lower = 0.0, upper = 1.0, zero = 0.0
        };
        let result: syn::Result<RangeAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[range(symbol = "sdeg", lower = -180.0, upper = 180.0, zero = 0.0)]
            pub struct SignedDeg;
        };

        let code = derive_wrap_range_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: WrapRange for SignedDeg"));
        assert!(code.contains("const LOWER : f64 = - 180.0"));
        assert!(code.contains("const UPPER : f64 = 180.0"));
        assert!(code.contains("const ZERO : f64 = 0.0"));
        assert!(code.contains("const SYMBOL : & 'static str = \"sdeg\""));
        assert!(code.contains("DESCRIPTOR_CHECK"));
    }

    #[test]
    fn test_derive_impl_with_expression_bounds() {
        let input: DeriveInput = parse_quote! {
            #[range(symbol = "rad", lower = 0.0, upper = 2.0 * core::f64::consts::PI, zero = 0.0)]
            pub struct UnsignedRad;
        };

        let code = derive_wrap_range_impl(input).unwrap().to_string();
        assert!(code.contains("const UPPER : f64 = 2.0 * core :: f64 :: consts :: PI"));
    }

    #[test]
    fn test_range_attribute_parse_with_trailing_comma() {
        let tokens = quote! {
            symbol = "t", lower = 3.0, upper = 10.0, zero = 5.3,
        };
        let attr: RangeAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "t");
    }

    #[test]
    fn test_parse_empty_attribute() {
        let tokens = quote! {};
        let result: syn::Result<RangeAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub struct Bare;
        };
        let err = derive_wrap_range_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
