// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Top-level error of a [`Discovery`].
//!
//! [`Discovery`]: crate::Discovery

use derive_more::{Display, Error, From};

use crate::{parser, repository};

/// Failure of a [`Discovery`].
///
/// No partial results accompany any of these: a [`Discovery`] either resolves
/// every file or fails.
///
/// [`Discovery`]: crate::Discovery
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// No feature definition was given to discover against.
    #[display(fmt = "No feature definition given to discover against")]
    #[from(ignore)]
    InvalidArgument,

    /// Explicitly resolved specification file does not exist.
    #[display(fmt = "Specification file not found: {}", path)]
    #[from(ignore)]
    SpecificationFileNotFound {
        /// Path the file was expected at.
        path: String,
    },

    /// Path listed by a pattern could not be fetched afterwards.
    #[display(
        fmt = "`{}` matched pattern `{}`, but could not be fetched",
        path,
        pattern
    )]
    #[from(ignore)]
    RepositoryConsistency {
        /// Pattern the `path` was listed by.
        pattern: String,

        /// Path that could not be fetched.
        path: String,
    },

    /// [`Repository`] failure.
    ///
    /// [`Repository`]: crate::Repository
    #[display(fmt = "Repository failure: {}", _0)]
    Repository(#[error(source)] repository::Error),

    /// [`Parser`] failure, propagated as is.
    ///
    /// [`Parser`]: crate::Parser
    #[display(fmt = "{}", _0)]
    Parser(#[error(source)] parser::Error),
}

impl Error {
    /// Creates a new [`Error::SpecificationFileNotFound`].
    #[must_use]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::SpecificationFileNotFound { path: path.into() }
    }

    /// Indicates whether this is an [`Error::SpecificationFileNotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::SpecificationFileNotFound { .. })
    }
}

/// Result of a [`Discovery`].
///
/// [`Discovery`]: crate::Discovery
pub type Result<T> = std::result::Result<T, Error>;
