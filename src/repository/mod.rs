// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sources of raw specification files.

pub mod fs;
pub mod memory;

use std::{io, rc::Rc, str, sync::Arc};

use derive_more::{Display, Error};

#[doc(inline)]
pub use self::{fs::FileSystem, memory::InMemory};

/// Source of raw specification files.
///
/// Implementations must be deterministic for a fixed underlying state, and
/// safe for concurrent reads if shared between threads.
pub trait Repository {
    /// Fetches the file at the given `path`.
    ///
    /// Absence of the file is [`None`], not an [`Error`].
    ///
    /// # Errors
    ///
    /// If the file exists, but cannot be read.
    fn get_by_path(&self, path: &str) -> Result<Option<RawFile>>;

    /// Lists paths of all the files matching the given glob `pattern`.
    ///
    /// Nothing matching is an empty [`Vec`], not an [`Error`]. Returned paths
    /// are valid inputs of [`Repository::get_by_path()`].
    ///
    /// # Errors
    ///
    /// If the `pattern` is malformed, or the underlying storage cannot be
    /// listed.
    fn find_paths_by_pattern(&self, pattern: &str) -> Result<Vec<String>>;
}

impl<R: Repository + ?Sized> Repository for &R {
    fn get_by_path(&self, path: &str) -> Result<Option<RawFile>> {
        (**self).get_by_path(path)
    }

    fn find_paths_by_pattern(&self, pattern: &str) -> Result<Vec<String>> {
        (**self).find_paths_by_pattern(pattern)
    }
}

impl<R: Repository + ?Sized> Repository for Box<R> {
    fn get_by_path(&self, path: &str) -> Result<Option<RawFile>> {
        (**self).get_by_path(path)
    }

    fn find_paths_by_pattern(&self, pattern: &str) -> Result<Vec<String>> {
        (**self).find_paths_by_pattern(pattern)
    }
}

impl<R: Repository + ?Sized> Repository for Rc<R> {
    fn get_by_path(&self, path: &str) -> Result<Option<RawFile>> {
        (**self).get_by_path(path)
    }

    fn find_paths_by_pattern(&self, pattern: &str) -> Result<Vec<String>> {
        (**self).find_paths_by_pattern(pattern)
    }
}

impl<R: Repository + ?Sized> Repository for Arc<R> {
    fn get_by_path(&self, path: &str) -> Result<Option<RawFile>> {
        (**self).get_by_path(path)
    }

    fn find_paths_by_pattern(&self, pattern: &str) -> Result<Vec<String>> {
        (**self).find_paths_by_pattern(pattern)
    }
}

/// Raw content of a specification file, as returned by a [`Repository`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RawFile {
    /// Path this file was fetched by.
    path: String,

    /// Raw bytes of this file.
    content: Vec<u8>,
}

impl RawFile {
    /// Creates a new [`RawFile`].
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Path this file was fetched by.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw bytes of this file.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content of this file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// If the content is not valid UTF-8.
    pub fn as_str(&self) -> std::result::Result<&str, str::Utf8Error> {
        str::from_utf8(&self.content)
    }

    /// Consumes this [`RawFile`] returning its raw bytes.
    #[must_use]
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }
}

/// Result of [`Repository`] operations.
pub type Result<T> = std::result::Result<T, Error>;

/// [`Repository`] error.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// Glob pattern cannot be compiled.
    #[display(fmt = "Invalid glob pattern `{}`: {}", pattern, source)]
    InvalidPattern {
        /// Malformed pattern.
        pattern: String,

        /// Compilation error.
        source: globset::Error,
    },

    /// Directory walker cannot be built for a pattern.
    #[display(fmt = "Cannot list files by pattern `{}`: {}", pattern, source)]
    Listing {
        /// Pattern being listed.
        pattern: String,

        /// Walker construction error.
        source: globwalk::GlobError,
    },

    /// Directory cannot be walked while listing a pattern.
    #[display(fmt = "Failed to walk files by pattern `{}`: {}", pattern, source)]
    Walking {
        /// Pattern being listed.
        pattern: String,

        /// Walking error.
        source: globwalk::WalkError,
    },

    /// Root directory of a [`FileSystem`] cannot be resolved.
    #[display(fmt = "Cannot resolve root directory `{}`: {}", root, source)]
    Root {
        /// Root directory as it was given.
        root: String,

        /// I/O error.
        source: io::Error,
    },

    /// Existing file cannot be read.
    #[display(fmt = "Failed to read `{}`: {}", path, source)]
    Reading {
        /// Path of the file.
        path: String,

        /// I/O error.
        source: io::Error,
    },
}
