// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! In-memory [`Repository`].

use linked_hash_map::LinkedHashMap;

use crate::glob::{self, Pattern};

use super::{Error, RawFile, Repository, Result};

/// [`Repository`] keeping files in memory.
///
/// Pattern matches are returned in insertion order of the files.
#[derive(Clone, Debug, Default)]
pub struct InMemory {
    /// Files by their normalized paths, in insertion order.
    files: LinkedHashMap<String, Vec<u8>>,
}

impl InMemory {
    /// Creates an empty [`InMemory`] repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file to this repository.
    #[must_use]
    pub fn with_file(
        mut self,
        path: impl AsRef<str>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        _ = self.insert(path, content);
        self
    }

    /// Adds a file to this repository, returning the replaced content, if
    /// any.
    pub fn insert(
        &mut self,
        path: impl AsRef<str>,
        content: impl Into<Vec<u8>>,
    ) -> Option<Vec<u8>> {
        let path = glob::normalize(path.as_ref()).into_owned();
        self.files.insert(path, content.into())
    }

    /// Removes a file from this repository, returning its content, if any.
    pub fn remove(&mut self, path: impl AsRef<str>) -> Option<Vec<u8>> {
        self.files.remove(&*glob::normalize(path.as_ref()))
    }

    /// Paths of all the files in this repository, in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.files.keys().map(String::as_str)
    }

    /// Number of files in this repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Indicates whether this repository has no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<P: AsRef<str>, C: Into<Vec<u8>>> FromIterator<(P, C)> for InMemory {
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |repo, (path, content)| repo.with_file(path, content))
    }
}

impl Repository for InMemory {
    fn get_by_path(&self, path: &str) -> Result<Option<RawFile>> {
        Ok(self
            .files
            .get(&*glob::normalize(path))
            .map(|content| RawFile::new(path, content.clone())))
    }

    fn find_paths_by_pattern(&self, pattern: &str) -> Result<Vec<String>> {
        let matcher = Pattern::new(pattern).map_err(|source| {
            Error::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            }
        })?;

        Ok(self
            .files
            .keys()
            .filter(|path| matcher.is_match(path))
            .cloned()
            .collect())
    }
}
