// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Feature definitions and their [`Resolution`] into specification files.

use derive_more::Display;

use crate::glob;

/// Type backed by one or more [Gherkin] specification files.
///
/// Usually implemented via `#[derive(FeatureDefinition)]`, but may be
/// implemented manually as well:
///
/// ```rust
/// use feature_discovery::{FeatureDefinition, Resolution};
///
/// struct AddFeature;
///
/// impl FeatureDefinition for AddFeature {
///     const NAME: &'static str = "AddFeature";
///
///     fn feature_file() -> Option<Resolution> {
///         Some(Resolution::pattern("Add*.feature"))
///     }
/// }
///
/// assert_eq!(
///     AddFeature::definition().resolution(),
///     Resolution::pattern("Add*.feature"),
/// );
/// ```
///
/// [Gherkin]: https://cucumber.io/docs/gherkin/reference
pub trait FeatureDefinition {
    /// Simple name of this type.
    ///
    /// Used to build the default `<NAME>.feature` path when no
    /// [`FeatureDefinition::feature_file()`] is declared.
    const NAME: &'static str;

    /// Explicitly declared feature file (or pattern) of this type.
    #[must_use]
    fn feature_file() -> Option<Resolution> {
        None
    }

    /// Builds a runtime [`Definition`] of this type.
    #[must_use]
    fn definition() -> Definition {
        Definition {
            name: Self::NAME.to_owned(),
            feature_file: Self::feature_file(),
        }
    }
}

/// Way of locating specification files of a [`Definition`].
#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
pub enum Resolution {
    /// Exactly one file at the given path.
    #[display(fmt = "{}", _0)]
    Single(String),

    /// Every file matching the given glob pattern.
    ///
    /// See [`glob`](crate::glob) module for the supported syntax.
    #[display(fmt = "{}", _0)]
    Pattern(String),
}

impl Resolution {
    /// Creates a [`Resolution::Single`].
    #[must_use]
    pub fn single(path: impl Into<String>) -> Self {
        Self::Single(path.into())
    }

    /// Creates a [`Resolution::Pattern`].
    #[must_use]
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::Pattern(pattern.into())
    }

    /// Creates a [`Resolution`] out of a single annotation value, treating it
    /// as a [`Resolution::Pattern`] if it contains any glob metacharacters.
    #[must_use]
    pub fn infer(value: impl Into<String>) -> Self {
        let value = value.into();
        if glob::is_pattern(&value) {
            Self::Pattern(value)
        } else {
            Self::Single(value)
        }
    }

    /// Default [`Resolution`] of a type with the given simple `name`.
    #[must_use]
    pub fn default_for(name: &str) -> Self {
        Self::Single(format!("{name}.feature"))
    }

    /// Returns the path or pattern of this [`Resolution`].
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Single(v) | Self::Pattern(v) => v,
        }
    }

    /// Indicates whether this is a [`Resolution::Pattern`].
    #[must_use]
    pub const fn is_pattern(&self) -> bool {
        matches!(self, Self::Pattern(_))
    }
}

/// Runtime description of a [`FeatureDefinition`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Definition {
    /// Simple name of the described type.
    name: String,

    /// Explicitly declared [`Resolution`], if any.
    feature_file: Option<Resolution>,
}

impl Definition {
    /// Creates a [`Definition`] without any explicit [`Resolution`].
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            feature_file: None,
        }
    }

    /// Creates a [`Definition`] of the given [`FeatureDefinition`] type.
    #[must_use]
    pub fn of<T: FeatureDefinition>() -> Self {
        T::definition()
    }

    /// Declares the [`Resolution`] of this [`Definition`] explicitly.
    #[must_use]
    pub fn with_feature_file(mut self, resolution: Resolution) -> Self {
        self.feature_file = Some(resolution);
        self
    }

    /// Simple name of the described type.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Explicitly declared [`Resolution`], if any.
    #[must_use]
    pub const fn feature_file(&self) -> Option<&Resolution> {
        self.feature_file.as_ref()
    }

    /// Effective [`Resolution`]: the declared one, or `<name>.feature`.
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.feature_file
            .clone()
            .unwrap_or_else(|| Resolution::default_for(&self.name))
    }
}
