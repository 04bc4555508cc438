// Copyright (c) 2020-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `#[derive(FeatureDefinition)]` macro implementation.

use proc_macro2::TokenStream;
use quote::quote;
use synthez::{ParseAttrs, ToTokens};

/// Expands `#[derive(FeatureDefinition)]` macro.
///
/// # Errors
///
/// If failed to parse [`Attrs`], arguments of `#[feature_file]` attribute
/// conflict with each other, or the user-provided pattern is not a valid
/// glob.
pub(crate) fn derive(input: TokenStream) -> syn::Result<TokenStream> {
    let input = syn::parse2::<syn::DeriveInput>(input)?;
    let definition = Definition::try_from(input)?;

    Ok(quote! { #definition })
}

/// Helper attributes of `#[derive(FeatureDefinition)]` macro.
#[derive(Debug, Default, ParseAttrs)]
struct Attrs {
    /// Path of the exactly one feature file.
    #[parse(value)]
    path: Option<syn::LitStr>,

    /// Glob pattern of the feature files.
    #[parse(value)]
    pattern: Option<syn::LitStr>,
}

/// Declared feature file(s) of a type.
#[derive(Debug)]
enum FeatureFile {
    /// `#[feature_file(path = "...")]`
    Path(String),

    /// `#[feature_file(pattern = "...")]`
    Pattern(String),
}

/// Representation of a type implementing a `FeatureDefinition` trait, used
/// for code generation.
#[derive(Debug, ToTokens)]
#[to_tokens(append(impl_feature_definition))]
struct Definition {
    /// Name of this type.
    ident: syn::Ident,

    /// [`syn::Generics`] of this type.
    generics: syn::Generics,

    /// Value for a `FeatureDefinition::NAME` associated constant.
    name: String,

    /// Explicitly declared [`FeatureFile`], if any.
    feature_file: Option<FeatureFile>,
}

impl TryFrom<syn::DeriveInput> for Definition {
    type Error = syn::Error;

    fn try_from(mut input: syn::DeriveInput) -> syn::Result<Self> {
        let bare = take_bare_literal(&mut input.attrs)?;
        let attrs: Attrs = Attrs::parse_attrs("feature_file", &input)?;

        let feature_file = match (bare, attrs.path, attrs.pattern) {
            (Some(lit), None, None) => Some(if is_pattern(&lit.value()) {
                pattern_of(&lit)?
            } else {
                path_of(&lit)?
            }),
            (Some(lit), ..) => {
                return Err(syn::Error::new(
                    lit.span(),
                    "unnamed argument of `#[feature_file]` attribute cannot be \
                     combined with `path` or `pattern` arguments",
                ));
            }
            (None, Some(_), Some(pattern)) => {
                return Err(syn::Error::new(
                    pattern.span(),
                    "`path` and `pattern` arguments of `#[feature_file]` \
                     attribute are mutually exclusive",
                ));
            }
            (None, Some(path), None) => Some(path_of(&path)?),
            (None, None, Some(pattern)) => Some(pattern_of(&pattern)?),
            (None, None, None) => None,
        };

        Ok(Self {
            name: input.ident.to_string(),
            ident: input.ident,
            generics: input.generics,
            feature_file,
        })
    }
}

/// Removes `#[feature_file("...")]` attributes from `attrs`, returning their
/// literal.
///
/// # Errors
///
/// If such an attribute is specified more than once.
fn take_bare_literal(
    attrs: &mut Vec<syn::Attribute>,
) -> syn::Result<Option<syn::LitStr>> {
    let mut bare = None;
    let mut duplicate = None;
    attrs.retain(|attr| {
        if !attr.path().is_ident("feature_file") {
            return true;
        }
        let Ok(lit) = attr.parse_args::<syn::LitStr>() else {
            return true;
        };
        if bare.is_some() {
            duplicate = Some(lit.span());
        }
        bare = Some(lit);
        false
    });

    if let Some(span) = duplicate {
        return Err(syn::Error::new(
            span,
            "unnamed argument of `#[feature_file]` attribute is duplicated",
        ));
    }
    Ok(bare)
}

/// Indicates whether the given annotation `value` contains glob
/// metacharacters.
///
/// Mirrors `feature_discovery::glob::is_pattern()`.
fn is_pattern(value: &str) -> bool {
    value.contains(['*', '?', '[', '{'])
}

/// Validates the given literal as a [`FeatureFile::Path`].
fn path_of(lit: &syn::LitStr) -> syn::Result<FeatureFile> {
    let path = lit.value();
    if path.is_empty() {
        return Err(syn::Error::new(
            lit.span(),
            "feature file path must not be empty",
        ));
    }
    Ok(FeatureFile::Path(path))
}

/// Validates the given literal as a [`FeatureFile::Pattern`].
fn pattern_of(lit: &syn::LitStr) -> syn::Result<FeatureFile> {
    let pattern = lit.value();
    drop(globset::Glob::new(&pattern).map_err(|e| {
        syn::Error::new(lit.span(), format!("invalid glob pattern: {e}"))
    })?);
    Ok(FeatureFile::Pattern(pattern))
}

impl Definition {
    /// Generates code of implementing a `FeatureDefinition` trait.
    #[must_use]
    fn impl_feature_definition(&self) -> TokenStream {
        let ty = &self.ident;
        let (impl_gens, ty_gens, where_clause) = self.generics.split_for_impl();
        let name = &self.name;

        let feature_file = self.feature_file.as_ref().map(|file| {
            let resolution = match file {
                FeatureFile::Path(path) => quote! {
                    ::feature_discovery::Resolution::single(#path)
                },
                FeatureFile::Pattern(pattern) => quote! {
                    ::feature_discovery::Resolution::pattern(#pattern)
                },
            };
            quote! {
                fn feature_file() -> ::std::option::Option<
                    ::feature_discovery::Resolution,
                > {
                    ::std::option::Option::Some(#resolution)
                }
            }
        });

        quote! {
            #[automatically_derived]
            impl #impl_gens ::feature_discovery::FeatureDefinition for #ty #ty_gens
                 #where_clause
            {
                const NAME: &'static str = #name;

                #feature_file
            }
        }
    }
}

#[cfg(test)]
mod spec {
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn derives_impl_with_default_path() {
        let input = parse_quote! {
            struct MyFeature;
        };

        let output = quote! {
            #[automatically_derived]
            impl ::feature_discovery::FeatureDefinition for MyFeature {
                const NAME: &'static str = "MyFeature";
            }
        };

        assert_eq!(
            super::derive(input).unwrap().to_string(),
            output.to_string(),
        );
    }

    #[test]
    fn derives_impl_with_path() {
        let input = parse_quote! {
            #[feature_file(path = "/my/path/to/feature/file.feature")]
            struct MyFeatureWithAttribute;
        };

        let output = quote! {
            #[automatically_derived]
            impl ::feature_discovery::FeatureDefinition for MyFeatureWithAttribute {
                const NAME: &'static str = "MyFeatureWithAttribute";

                fn feature_file() -> ::std::option::Option<
                    ::feature_discovery::Resolution,
                > {
                    ::std::option::Option::Some(
                        ::feature_discovery::Resolution::single(
                            "/my/path/to/feature/file.feature"
                        )
                    )
                }
            }
        };

        assert_eq!(
            super::derive(input).unwrap().to_string(),
            output.to_string(),
        );
    }

    #[test]
    fn derives_impl_with_pattern_and_generics() {
        let input = parse_quote! {
            #[feature_file(pattern = "Features/Complex*.feature")]
            struct ComplexFeature<T>(T);
        };

        let output = quote! {
            #[automatically_derived]
            impl<T> ::feature_discovery::FeatureDefinition for ComplexFeature<T> {
                const NAME: &'static str = "ComplexFeature";

                fn feature_file() -> ::std::option::Option<
                    ::feature_discovery::Resolution,
                > {
                    ::std::option::Option::Some(
                        ::feature_discovery::Resolution::pattern(
                            "Features/Complex*.feature"
                        )
                    )
                }
            }
        };

        assert_eq!(
            super::derive(input).unwrap().to_string(),
            output.to_string(),
        );
    }

    #[test]
    fn path_and_pattern_are_exclusive() {
        let input = parse_quote! {
            #[feature_file(path = "a.feature", pattern = "*.feature")]
            struct Both;
        };

        let err = super::derive(input).unwrap_err();

        assert_eq!(
            err.to_string(),
            "`path` and `pattern` arguments of `#[feature_file]` attribute are \
             mutually exclusive",
        );
    }

    #[test]
    fn infers_unnamed_argument() {
        let input = parse_quote! {
            #[feature_file("Add*.feature")]
            struct AddFeature;
        };

        let output = quote! {
            #[automatically_derived]
            impl ::feature_discovery::FeatureDefinition for AddFeature {
                const NAME: &'static str = "AddFeature";

                fn feature_file() -> ::std::option::Option<
                    ::feature_discovery::Resolution,
                > {
                    ::std::option::Option::Some(
                        ::feature_discovery::Resolution::pattern("Add*.feature")
                    )
                }
            }
        };

        assert_eq!(
            super::derive(input).unwrap().to_string(),
            output.to_string(),
        );

        let input = parse_quote! {
            #[feature_file("features/file.feature")]
            struct MyFeatureWithAttribute;
        };

        let output = quote! {
            #[automatically_derived]
            impl ::feature_discovery::FeatureDefinition for MyFeatureWithAttribute {
                const NAME: &'static str = "MyFeatureWithAttribute";

                fn feature_file() -> ::std::option::Option<
                    ::feature_discovery::Resolution,
                > {
                    ::std::option::Option::Some(
                        ::feature_discovery::Resolution::single(
                            "features/file.feature"
                        )
                    )
                }
            }
        };

        assert_eq!(
            super::derive(input).unwrap().to_string(),
            output.to_string(),
        );
    }

    #[test]
    fn unnamed_argument_is_exclusive() {
        let input = parse_quote! {
            #[feature_file("Add*.feature")]
            #[feature_file(path = "a.feature")]
            struct Both;
        };

        let err = super::derive(input).unwrap_err();

        assert_eq!(
            err.to_string(),
            "unnamed argument of `#[feature_file]` attribute cannot be \
             combined with `path` or `pattern` arguments",
        );
    }

    #[test]
    fn unnamed_argument_is_validated() {
        let input = parse_quote! {
            #[feature_file("")]
            struct Empty;
        };
        assert_eq!(
            super::derive(input).unwrap_err().to_string(),
            "feature file path must not be empty",
        );

        let input = parse_quote! {
            #[feature_file("Add[.feature")]
            struct Broken;
        };
        assert!(super::derive(input)
            .unwrap_err()
            .to_string()
            .starts_with("invalid glob pattern: "));
    }

    #[test]
    fn empty_path_is_rejected() {
        let input = parse_quote! {
            #[feature_file(path = "")]
            struct Empty;
        };

        let err = super::derive(input).unwrap_err();

        assert_eq!(err.to_string(), "feature file path must not be empty");
    }

    #[test]
    fn invalid_pattern() {
        let input = parse_quote! {
            #[feature_file(pattern = "Add[.feature")]
            struct Broken;
        };

        let err = super::derive(input).unwrap_err();

        assert!(
            err.to_string().starts_with("invalid glob pattern: "),
            "{err}",
        );
    }
}
