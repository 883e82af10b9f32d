//! Derive macro implementation used by `measures-core`.
//!
//! `measures-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit`, `crate::KnownUnit`, `crate::Tagged`, `crate::UnitKind` and `crate::AnyUnit`, so it is only usable
//! from `measures-core` itself, where every derived unit also has a matching `UnitKind` variant.
//!
//! Most users should depend on `measures` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit` (conversion to and from the dimension's base unit)
//! - `crate::KnownUnit for MyUnit` (`KIND = crate::UnitKind::MyUnit`)
//! - `crate::Tagged for MyUnit` (the runtime descriptor used by the JSON codec)
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "kg"`: displayed unit label
//! - `dimension = SomeDim`: dimension marker type
//! - `ratio = 2.20462`: linear factor to the base unit (`base = value * ratio`)
//! - `offset = 32.0`: optional, only with `ratio` (`base = value * ratio + offset`)
//! - `to_base = path, from_base = path`: conversion functions, instead of `ratio`, for non-linear units
//! - `precision = 4`: optional default display precision

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitInt, LitStr, Path, Token,
};

/// Derive `crate::Unit`, `crate::KnownUnit` and `crate::Tagged` for a unit marker type.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `dimension`, and either `ratio`
/// or the `to_base`/`from_base` pair.
///
/// This macro is intended for use by `measures-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;

    let (to_base, from_base) = match &unit_attr.conversion {
        Conversion::Linear { ratio, offset: None } => (
            quote! { value * (#ratio) },
            quote! { base / (#ratio) },
        ),
        Conversion::Linear {
            ratio,
            offset: Some(offset),
        } => (
            quote! { value * (#ratio) + (#offset) },
            quote! { (base - (#offset)) / (#ratio) },
        ),
        Conversion::Functions { to_base, from_base } => {
            (quote! { #to_base(value) }, quote! { #from_base(base) })
        }
    };

    let precision = unit_attr.precision.as_ref().map(|p| {
        quote! { const PRECISION: usize = #p; }
    });

    let expanded = quote! {
        impl crate::Unit for #name {
            type Dim = #dimension;
            const SYMBOL: &'static str = #symbol;
            #precision

            #[inline]
            fn to_base(value: f64) -> f64 {
                #to_base
            }

            #[inline]
            fn from_base(base: f64) -> f64 {
                #from_base
            }
        }

        impl crate::KnownUnit for #name {
            const KIND: crate::UnitKind = crate::UnitKind::#name;
        }

        impl crate::Tagged for #name {
            #[inline]
            fn any_unit() -> crate::AnyUnit {
                crate::AnyUnit::Simple(crate::UnitKind::#name)
            }
        }
    };

    Ok(expanded)
}

/// How a unit maps onto its dimension's base unit.
enum Conversion {
    Linear { ratio: Expr, offset: Option<Expr> },
    Functions { to_base: Path, from_base: Path },
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Expr,
    conversion: Conversion,
    precision: Option<LitInt>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;
        let mut ratio: Option<Expr> = None;
        let mut offset: Option<Expr> = None;
        let mut to_base: Option<Path> = None;
        let mut from_base: Option<Path> = None;
        let mut precision: Option<LitInt> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "dimension" => {
                    dimension = Some(input.parse()?);
                }
                "ratio" => {
                    ratio = Some(input.parse()?);
                }
                "offset" => {
                    offset = Some(input.parse()?);
                }
                "to_base" => {
                    to_base = Some(input.parse()?);
                }
                "from_base" => {
                    from_base = Some(input.parse()?);
                }
                "precision" => {
                    precision = Some(input.parse()?);
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
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;

        let conversion = match (ratio, offset, to_base, from_base) {
            (Some(ratio), offset, None, None) => Conversion::Linear { ratio, offset },
            (None, None, Some(to_base), Some(from_base)) => {
                Conversion::Functions { to_base, from_base }
            }
            (None, Some(_), _, _) => {
                return Err(syn::Error::new(
                    input.span(),
                    "`offset` requires `ratio`",
                ));
            }
            (Some(_), _, _, _) => {
                return Err(syn::Error::new(
                    input.span(),
                    "`ratio` cannot be combined with `to_base`/`from_base`",
                ));
            }
            (None, None, None, None) => {
                return Err(syn::Error::new(
                    input.span(),
                    "missing required attribute `ratio` (or `to_base` and `from_base`)",
                ));
            }
            (None, None, _, _) => {
                return Err(syn::Error::new(
                    input.span(),
                    "`to_base` and `from_base` must be given together",
                ));
            }
        };

        Ok(UnitAttribute {
            symbol,
            dimension,
            conversion,
            precision,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    fn parse_err(tokens: TokenStream2) -> String {
        match syn::parse2::<UnitAttribute>(tokens) {
            Ok(_) => panic!("attribute unexpectedly parsed"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn test_parse_unit_attribute_linear() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "kg", dimension = Weight, ratio = 2.20462)]
            pub struct Kilogram;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "kg");
        assert!(matches!(
            attr.conversion,
            Conversion::Linear { offset: None, .. }
        ));
        assert!(attr.precision.is_none());
    }

    #[test]
    fn test_parse_unit_attribute_affine() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "°C", dimension = Temperature, ratio = 9.0 / 5.0, offset = 32.0)]
            pub struct Celsius;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert!(matches!(
            attr.conversion,
            Conversion::Linear { offset: Some(_), .. }
        ));
    }

    #[test]
    fn test_parse_unit_attribute_functions_and_precision() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "sg", dimension = Gravity, to_base = sg_to_gp, from_base = gp_to_sg, precision = 4)]
            pub struct SpecificGravity;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert!(matches!(attr.conversion, Conversion::Functions { .. }));
        assert_eq!(attr.precision.unwrap().base10_parse::<usize>().unwrap(), 4);
    }

    #[test]
    fn test_parse_unit_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub struct Pound;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn test_missing_symbol() {
        let msg = parse_err(quote! { dimension = Weight, ratio = 1.0 });
        assert!(msg.contains("missing required attribute `symbol`"));
    }

    #[test]
    fn test_missing_dimension() {
        let msg = parse_err(quote! { symbol = "lb", ratio = 1.0 });
        assert!(msg.contains("missing required attribute `dimension`"));
    }

    #[test]
    fn test_missing_conversion() {
        let msg = parse_err(quote! { symbol = "lb", dimension = Weight });
        assert!(msg.contains("missing required attribute `ratio`"));
    }

    #[test]
    fn test_ratio_mixed_with_functions() {
        let msg = parse_err(quote! {
            symbol = "sg", dimension = Gravity, ratio = 1.0, to_base = a, from_base = b
        });
        assert!(msg.contains("cannot be combined"));
    }

    #[test]
    fn test_offset_without_ratio() {
        let msg = parse_err(quote! {
            symbol = "°C", dimension = Temperature, offset = 32.0, to_base = a, from_base = b
        });
        assert!(msg.contains("`offset` requires `ratio`"));
    }

    #[test]
    fn test_half_a_function_pair() {
        let msg = parse_err(quote! { symbol = "sg", dimension = Gravity, to_base = sg_to_gp });
        assert!(msg.contains("must be given together"));
    }

    #[test]
    fn test_unknown_field() {
        let msg = parse_err(quote! { symbol = "lb", dimension = Weight, ratio = 1.0, plural = "lbs" });
        assert!(msg.contains("unknown attribute `plural`"));
    }

    #[test]
    fn test_parse_empty_attribute() {
        let result: syn::Result<UnitAttribute> = syn::parse2(quote! {});
        assert!(result.is_err());
    }

    #[test]
    fn test_trailing_comma() {
        let attr: UnitAttribute =
            syn::parse2(quote! { symbol = "lb", dimension = Weight, ratio = 1.0, }).unwrap();
        assert_eq!(attr.symbol.value(), "lb");
    }

    #[test]
    fn test_derive_unit_impl_linear() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "oz", dimension = Weight, ratio = 0.0625)]
            pub struct Ounce;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Unit for Ounce"));
        assert!(code.contains("type Dim = Weight"));
        assert!(code.contains("const SYMBOL : & 'static str = \"oz\""));
        assert!(code.contains("value * (0.0625)"));
        assert!(code.contains("base / (0.0625)"));
        assert!(code.contains("const KIND : crate :: UnitKind = crate :: UnitKind :: Ounce"));
        assert!(code.contains("crate :: AnyUnit :: Simple (crate :: UnitKind :: Ounce)"));
        assert!(!code.contains("PRECISION"));
    }

    #[test]
    fn test_derive_unit_impl_affine() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "°C", dimension = Temperature, ratio = 1.8, offset = 32.0)]
            pub struct Celsius;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("value * (1.8) + (32.0)"));
        assert!(code.contains("(base - (32.0)) / (1.8)"));
    }

    #[test]
    fn test_derive_unit_impl_functions() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "sg", dimension = Gravity, to_base = sg_to_gp, from_base = gp_to_sg, precision = 4)]
            pub struct SpecificGravity;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("sg_to_gp (value)"));
        assert!(code.contains("gp_to_sg (base)"));
        assert!(code.contains("const PRECISION : usize = 4"));
    }

    #[test]
    fn test_derive_unit_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub struct Pound;
        };
        let err = derive_unit_impl(input).err().unwrap();
        assert!(err.to_compile_error().to_string().contains("compile_error"));
    }
}
