// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Resolution of feature definitions into parsed specification files.

use tracing::{debug, debug_span, trace, warn};

use crate::{
    parser, Definition, DiscoveryResult, Error, FeatureDefinition, Parser,
    RawFile, Repository, Resolution, ResolvedFile, Result,
};

/// Resolver of [`Definition`]s into [`ResolvedFile`]s.
///
/// Fetches files through a [`Repository`] and parses them with a [`Parser`].
/// Keeps no state between [`Discovery::discover()`] calls, so it may be shared
/// freely as long as its [`Repository`] allows concurrent reads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Discovery<R, P = parser::Basic> {
    /// [`Repository`] to fetch files from.
    repository: R,

    /// [`Parser`] to parse fetched files with.
    parser: P,
}

impl<R> Discovery<R> {
    /// Creates a new [`Discovery`] parsing files with a [`parser::Basic`].
    #[must_use]
    pub const fn with_repository(repository: R) -> Self {
        Self {
            repository,
            parser: parser::Basic,
        }
    }
}

impl<R, P> Discovery<R, P> {
    /// Creates a new [`Discovery`].
    #[must_use]
    pub const fn new(repository: R, parser: P) -> Self {
        Self { repository, parser }
    }

    /// Replaces the [`Parser`] of this [`Discovery`].
    #[must_use]
    pub fn with_parser<Q>(self, parser: Q) -> Discovery<R, Q> {
        Discovery {
            repository: self.repository,
            parser,
        }
    }

    /// [`Repository`] of this [`Discovery`].
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// [`Parser`] of this [`Discovery`].
    #[must_use]
    pub const fn parser(&self) -> &P {
        &self.parser
    }
}

impl<R: Repository, P: Parser> Discovery<R, P> {
    /// Resolves the given `definition` into its parsed specification files.
    ///
    /// A [`Resolution::Single`] yields exactly one [`ResolvedFile`], while a
    /// [`Resolution::Pattern`] yields one per matched path, in the order the
    /// [`Repository`] listed them (possibly none).
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if no `definition` is given;
    /// - [`Error::SpecificationFileNotFound`] if a single file is absent;
    /// - [`Error::RepositoryConsistency`] if a matched path cannot be fetched;
    /// - [`Error::Repository`] and [`Error::Parser`] as propagated.
    pub fn discover(
        &self,
        definition: Option<&Definition>,
    ) -> Result<DiscoveryResult<P::Document>> {
        let definition = definition.ok_or(Error::InvalidArgument)?;
        let resolution = definition.resolution();

        let _span =
            debug_span!("discover", definition = definition.name(), %resolution)
                .entered();

        match resolution {
            Resolution::Single(path) => Ok(vec![self.resolve_single(path)?]),
            Resolution::Pattern(pattern) => self.resolve_pattern(&pattern),
        }
    }

    /// Resolves the [`Definition`] of the given [`FeatureDefinition`] type.
    ///
    /// # Errors
    ///
    /// Same as [`Discovery::discover()`], except [`Error::InvalidArgument`].
    pub fn discover_for<T: FeatureDefinition>(
        &self,
    ) -> Result<DiscoveryResult<P::Document>> {
        self.discover(Some(&T::definition()))
    }

    /// Resolves the one file expected at the given `path`.
    fn resolve_single(&self, path: String) -> Result<ResolvedFile<P::Document>> {
        debug!(%path, "resolving single feature file");

        let Some(file) = self.repository.get_by_path(&path)? else {
            debug!(%path, "feature file not found");
            return Err(Error::not_found(path));
        };
        self.resolve(path, &file)
    }

    /// Resolves every file matching the given `pattern`, in listing order.
    fn resolve_pattern(
        &self,
        pattern: &str,
    ) -> Result<DiscoveryResult<P::Document>> {
        let paths = self.repository.find_paths_by_pattern(pattern)?;
        debug!(pattern, matches = paths.len(), "resolving feature files by pattern");

        paths
            .into_iter()
            .map(|path| {
                let Some(file) = self.repository.get_by_path(&path)? else {
                    warn!(pattern, %path, "matched feature file vanished");
                    return Err(Error::RepositoryConsistency {
                        pattern: pattern.to_owned(),
                        path,
                    });
                };
                self.resolve(path, &file)
            })
            .collect()
    }

    /// Parses the fetched `file` and pairs it with its `path`.
    fn resolve(
        &self,
        path: String,
        file: &RawFile,
    ) -> Result<ResolvedFile<P::Document>> {
        trace!(%path, bytes = file.content().len(), "parsing feature file");

        let document = self.parser.parse(file)?;
        Ok(ResolvedFile::new(path, document))
    }
}
