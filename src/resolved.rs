// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Output of a [`Discovery`].
//!
//! [`Discovery`]: crate::Discovery

/// Successfully parsed specification file along with the path it was resolved
/// by.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ResolvedFile<D = gherkin::Feature> {
    /// Path the file was resolved by.
    pub path: String,

    /// Parsed document of the file.
    pub document: D,
}

impl<D> ResolvedFile<D> {
    /// Creates a new [`ResolvedFile`].
    #[must_use]
    pub fn new(path: impl Into<String>, document: D) -> Self {
        Self {
            path: path.into(),
            document,
        }
    }

    /// Consumes this [`ResolvedFile`] returning its parsed document.
    #[must_use]
    pub fn into_document(self) -> D {
        self.document
    }
}

/// [`ResolvedFile`]s of a single [`Discovery`], in resolution order.
///
/// [`Discovery`]: crate::Discovery
pub type DiscoveryResult<D = gherkin::Feature> = Vec<ResolvedFile<D>>;
