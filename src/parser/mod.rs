// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tools for parsing [Gherkin] files.
//!
//! [Gherkin]: https://cucumber.io/docs/gherkin/reference

pub mod basic;

use std::{rc::Rc, str, sync::Arc};

use derive_more::{Display, Error};

use crate::RawFile;

#[doc(inline)]
pub use self::basic::Basic;

/// Converter of [`RawFile`]s into structured documents.
pub trait Parser {
    /// Structured document produced by this [`Parser`].
    type Document;

    /// Parses the given raw `file` into a [`Parser::Document`].
    ///
    /// # Errors
    ///
    /// If the `file` content is malformed.
    fn parse(&self, file: &RawFile) -> Result<Self::Document>;
}

impl<P: Parser + ?Sized> Parser for &P {
    type Document = P::Document;

    fn parse(&self, file: &RawFile) -> Result<Self::Document> {
        (**self).parse(file)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Document = P::Document;

    fn parse(&self, file: &RawFile) -> Result<Self::Document> {
        (**self).parse(file)
    }
}

impl<P: Parser + ?Sized> Parser for Rc<P> {
    type Document = P::Document;

    fn parse(&self, file: &RawFile) -> Result<Self::Document> {
        (**self).parse(file)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    type Document = P::Document;

    fn parse(&self, file: &RawFile) -> Result<Self::Document> {
        (**self).parse(file)
    }
}

/// Result of parsing [Gherkin] files.
///
/// [Gherkin]: https://cucumber.io/docs/gherkin/reference
pub type Result<T> = std::result::Result<T, Error>;

/// [`Parser`] error.
#[derive(Clone, Debug, Display, Error)]
pub enum Error {
    /// File content is not valid UTF-8.
    #[display(fmt = "Feature file `{}` is not valid UTF-8: {}", path, source)]
    Encoding {
        /// Path of the malformed file.
        path: String,

        /// Decoding error.
        source: str::Utf8Error,
    },

    /// Failed to parse a document.
    #[display(fmt = "Failed to parse feature `{}`: {}", path, message)]
    Parsing {
        /// Path of the malformed file.
        path: String,

        /// Description of what went wrong.
        message: String,
    },
}

impl Error {
    /// Creates a new [`Error::Parsing`].
    #[must_use]
    pub fn parsing(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parsing {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Path of the file failed to be parsed.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Encoding { path, .. } | Self::Parsing { path, .. } => path,
        }
    }
}
