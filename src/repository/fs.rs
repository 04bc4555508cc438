// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! File system [`Repository`].

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use globwalk::{FileType, GlobWalkerBuilder};
use itertools::Itertools as _;
use smart_default::SmartDefault;

use crate::glob::{self, Pattern};

use super::{Error, RawFile, Repository, Result};

/// [`Repository`] reading files under a root directory.
///
/// Paths and patterns are resolved relative to the root. Pattern matches are
/// returned in lexicographical order of their relative paths.
///
/// As there is no async runtime-agnostic way to interact with io, this
/// [`Repository`] is blocking.
#[derive(Clone, Debug, SmartDefault)]
pub struct FileSystem {
    /// Directory all the paths are relative to.
    #[default(PathBuf::from("."))]
    root: PathBuf,

    /// Whether patterns should ignore ASCII case.
    case_insensitive: bool,

    /// Whether symbolic links should be followed while listing patterns.
    follow_links: bool,
}

impl FileSystem {
    /// Creates a new [`FileSystem`] rooted at the given directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Makes patterns ignore ASCII case.
    #[must_use]
    pub const fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Makes listing follow symbolic links.
    #[must_use]
    pub const fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    /// Directory all the paths are relative to.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves the root into its canonical absolute form.
    ///
    /// Patterns are always walked from the canonical root, so every walked
    /// entry is prefixed with it.
    fn canonical_root(&self) -> Result<PathBuf> {
        fs::canonicalize(&self.root).map_err(|source| Error::Root {
            root: self.root.display().to_string(),
            source,
        })
    }
}

/// Converts a walked `path` into a `/`-separated path relative to `root`.
fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .join("/")
}

impl Repository for FileSystem {
    fn get_by_path(&self, path: &str) -> Result<Option<RawFile>> {
        let full = self.root.join(&*glob::normalize(path));
        let reading = |source| Error::Reading {
            path: path.to_owned(),
            source,
        };

        match fs::metadata(&full) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Ok(None),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(reading(e)),
        }

        match fs::read(&full) {
            Ok(content) => Ok(Some(RawFile::new(path, content))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(reading(e)),
        }
    }

    fn find_paths_by_pattern(&self, pattern: &str) -> Result<Vec<String>> {
        let matcher = Pattern::with_case_insensitive(pattern, self.case_insensitive)
            .map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })?;

        let root = self.canonical_root()?;
        let walker =
            GlobWalkerBuilder::from_patterns(&root, &[glob::normalize(pattern)])
                .case_insensitive(self.case_insensitive)
                .follow_links(self.follow_links)
                .file_type(FileType::FILE)
                .build()
                .map_err(|source| Error::Listing {
                    pattern: pattern.to_owned(),
                    source,
                })?;

        let mut paths = walker
            .map(|entry| {
                entry
                    .map(|e| relative(&root, e.path()))
                    .map_err(|source| Error::Walking {
                        pattern: pattern.to_owned(),
                        source,
                    })
            })
            .filter_ok(|path| matcher.is_match(path))
            .collect::<Result<Vec<_>>>()?;
        paths.sort();

        Ok(paths)
    }
}

#[cfg(test)]
mod spec {
    use std::fs;

    use tempfile::TempDir;

    use super::{FileSystem, Repository};
    use crate::repository::Error;

    fn tree(files: &[&str]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, format!("Feature: {file}\n")).unwrap();
        }
        dir
    }

    #[test]
    fn reads_existing_file() {
        let dir = tree(&["MyFeature.feature"]);
        let repo = FileSystem::new(dir.path());

        let file = repo.get_by_path("MyFeature.feature").unwrap().unwrap();

        assert_eq!(file.path(), "MyFeature.feature");
        assert_eq!(file.as_str().unwrap(), "Feature: MyFeature.feature\n");
    }

    #[test]
    fn absent_file_is_none() {
        let dir = tree(&[]);
        let repo = FileSystem::new(dir.path());

        assert!(repo.get_by_path("Missing.feature").unwrap().is_none());
    }

    #[test]
    fn directory_is_not_a_file() {
        let dir = tree(&["Features/Complex.feature"]);
        let repo = FileSystem::new(dir.path());

        assert!(repo.get_by_path("Features").unwrap().is_none());
    }

    #[test]
    fn lists_sorted_relative_matches() {
        let dir = tree(&[
            "Features/ComplexGroupOfScenarios2.feature",
            "Features/Complex.feature",
            "Features/ComplexGroupOfScenarios1.feature",
            "Features/Simple.feature",
            "Complex.feature",
        ]);
        let repo = FileSystem::new(dir.path());

        assert_eq!(
            repo.find_paths_by_pattern("Features/Complex*.feature").unwrap(),
            [
                "Features/Complex.feature",
                "Features/ComplexGroupOfScenarios1.feature",
                "Features/ComplexGroupOfScenarios2.feature",
            ],
        );
    }

    #[test]
    fn star_does_not_descend() {
        let dir = tree(&["AddTwoNumbers.feature", "nested/AddNested.feature"]);
        let repo = FileSystem::new(dir.path());

        assert_eq!(
            repo.find_paths_by_pattern("Add*.feature").unwrap(),
            ["AddTwoNumbers.feature"],
        );
        assert_eq!(
            repo.find_paths_by_pattern("**/Add*.feature").unwrap(),
            ["AddTwoNumbers.feature", "nested/AddNested.feature"],
        );
    }

    #[test]
    fn listed_paths_are_fetchable() {
        let dir = tree(&["a/One.feature", "a/Two.feature"]);
        let repo = FileSystem::new(dir.path());

        for path in repo.find_paths_by_pattern("a/*.feature").unwrap() {
            assert!(repo.get_by_path(&path).unwrap().is_some(), "{path}");
        }
    }

    #[test]
    fn no_matches_is_empty() {
        let dir = tree(&["Other.feature"]);
        let repo = FileSystem::new(dir.path());

        assert!(repo.find_paths_by_pattern("Add*.feature").unwrap().is_empty());
    }

    #[test]
    fn case_insensitive_listing() {
        let dir = tree(&["AddTwoNumbers.feature"]);

        assert!(FileSystem::new(dir.path())
            .find_paths_by_pattern("add*.feature")
            .unwrap()
            .is_empty());
        assert_eq!(
            FileSystem::new(dir.path())
                .case_insensitive(true)
                .find_paths_by_pattern("add*.feature")
                .unwrap(),
            ["AddTwoNumbers.feature"],
        );
    }

    #[test]
    fn malformed_pattern_errors() {
        let dir = tree(&[]);
        let repo = FileSystem::new(dir.path());

        assert!(matches!(
            repo.find_paths_by_pattern("Add[.feature"),
            Err(Error::InvalidPattern { .. }),
        ));
    }

    #[test]
    fn lists_under_dot_prefixed_root() {
        let dir = tree(&["AddTwoNumbers.feature", "AddNumbersTo5.feature"]);
        let parent = dir.path().parent().unwrap();
        let name = dir.path().file_name().unwrap().to_str().unwrap();
        let repo = FileSystem::new(parent.join(format!("./{name}")));

        assert_eq!(
            repo.find_paths_by_pattern("Add*.feature").unwrap(),
            ["AddNumbersTo5.feature", "AddTwoNumbers.feature"],
        );
    }

    #[test]
    fn lists_under_relative_root() {
        let repo = FileSystem::new("./tests/features");

        assert_eq!(
            repo.find_paths_by_pattern("Add*.feature").unwrap(),
            ["AddNumbersTo5.feature", "AddTwoNumbers.feature"],
        );
        assert!(repo.get_by_path("AddTwoNumbers.feature").unwrap().is_some());
    }

    #[test]
    fn missing_root_errors() {
        let dir = tree(&[]);
        let repo = FileSystem::new(dir.path().join("absent"));

        assert!(matches!(
            repo.find_paths_by_pattern("*.feature"),
            Err(Error::Root { .. }),
        ));
    }

    #[test]
    fn defaults_to_current_directory() {
        assert_eq!(FileSystem::default().root(), std::path::Path::new("."));
    }
}
