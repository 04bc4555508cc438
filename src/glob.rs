// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Glob dialect shared by all the [`Repository`] implementations.
//!
//! Patterns follow [`globset`] syntax with a literal path separator:
//! - `*` and `?` never match `/`;
//! - `**` matches across any number of directories;
//! - `[...]` character classes and `{a,b}` alternates are supported.
//!
//! Patterns are matched against repository-relative paths with `/`
//! separators. A leading `./` is ignored on both sides.
//!
//! [`Repository`]: crate::Repository

use std::borrow::Cow;

use globset::{GlobBuilder, GlobMatcher};
use lazy_regex::regex;
use once_cell::sync::Lazy;
use regex::Regex;

/// [`Regex`] detecting glob metacharacters in a feature file annotation.
static METACHARS_RE: &Lazy<Regex> = regex!(r"[*?\[{]");

/// Compiled glob pattern.
#[derive(Clone, Debug)]
pub struct Pattern {
    /// Pattern as it was given by a user.
    source: String,

    /// Compiled matcher of the normalized [`Pattern::source`].
    matcher: GlobMatcher,
}

impl Pattern {
    /// Compiles a case-sensitive [`Pattern`].
    ///
    /// # Errors
    ///
    /// If the `pattern` is not a valid glob.
    pub fn new(pattern: impl Into<String>) -> Result<Self, globset::Error> {
        Self::with_case_insensitive(pattern, false)
    }

    /// Compiles a [`Pattern`], optionally ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// If the `pattern` is not a valid glob.
    pub fn with_case_insensitive(
        pattern: impl Into<String>,
        case_insensitive: bool,
    ) -> Result<Self, globset::Error> {
        let source = pattern.into();
        let matcher = GlobBuilder::new(&normalize(&source))
            .literal_separator(true)
            .case_insensitive(case_insensitive)
            .build()?
            .compile_matcher();

        Ok(Self { source, matcher })
    }

    /// Returns the original pattern string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Checks whether the given repository-relative `path` matches.
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.matcher.is_match(&*normalize(path))
    }
}

/// Checks whether the given annotation value contains glob metacharacters.
#[must_use]
pub fn is_pattern(value: &str) -> bool {
    METACHARS_RE.is_match(value)
}

/// Normalizes a repository-relative path (or pattern) to its canonical
/// `/`-separated form without leading `./` segments.
#[must_use]
pub fn normalize(path: &str) -> Cow<'_, str> {
    let path = if path.contains('\\') && !is_pattern(path) {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    };

    let mut trimmed: &str = &path;
    while let Some(rest) = trimmed.strip_prefix("./") {
        trimmed = rest;
    }
    if trimmed.len() == path.len() {
        path
    } else {
        Cow::Owned(trimmed.to_owned())
    }
}

#[cfg(test)]
mod spec {
    use super::{is_pattern, normalize, Pattern};

    #[test]
    fn star_stays_within_segment() {
        let p = Pattern::new("Add*.feature").unwrap();

        assert!(p.is_match("AddTwoNumbers.feature"));
        assert!(p.is_match("AddNumbersTo5.feature"));
        assert!(!p.is_match("Features/AddTwoNumbers.feature"));
        assert!(!p.is_match("Subtract.feature"));
    }

    #[test]
    fn matches_in_nested_directory() {
        let p = Pattern::new("Features/Complex*.feature").unwrap();

        assert!(p.is_match("Features/Complex.feature"));
        assert!(p.is_match("Features/ComplexGroupOfScenarios1.feature"));
        assert!(!p.is_match("Features/Nested/Complex.feature"));
        assert!(!p.is_match("Complex.feature"));
    }

    #[test]
    fn double_star_crosses_directories() {
        let p = Pattern::new("**/*.feature").unwrap();

        assert!(p.is_match("a/b/c.feature"));
        assert!(p.is_match("c.feature"));
        assert!(!p.is_match("c.feature.bak"));
    }

    #[test]
    fn supports_classes_and_alternates() {
        let p = Pattern::new("Group[12].{feature,story}").unwrap();

        assert!(p.is_match("Group1.feature"));
        assert!(p.is_match("Group2.story"));
        assert!(!p.is_match("Group3.feature"));
    }

    #[test]
    fn ignores_leading_dot_slash() {
        let p = Pattern::new("./Add*.feature").unwrap();

        assert!(p.is_match("AddTwoNumbers.feature"));
        assert!(p.is_match("./AddTwoNumbers.feature"));
    }

    #[test]
    fn case_insensitive_matching() {
        let p = Pattern::with_case_insensitive("add*.FEATURE", true).unwrap();

        assert!(p.is_match("AddTwoNumbers.feature"));
        assert!(!Pattern::new("add*.FEATURE")
            .unwrap()
            .is_match("AddTwoNumbers.feature"));
    }

    #[test]
    fn rejects_malformed_pattern() {
        assert!(Pattern::new("Add[.feature").is_err());
    }

    #[test]
    fn keeps_original_source() {
        let p = Pattern::new("./Add*.feature").unwrap();

        assert_eq!(p.as_str(), "./Add*.feature");
    }

    #[test]
    fn detects_metacharacters() {
        assert!(is_pattern("Add*.feature"));
        assert!(is_pattern("Group?.feature"));
        assert!(is_pattern("Group[12].feature"));
        assert!(is_pattern("{a,b}.feature"));
        assert!(!is_pattern("/my/path/to/feature/file.feature"));
    }

    #[test]
    fn normalizes_paths() {
        assert_eq!(normalize("././a/b.feature"), "a/b.feature");
        assert_eq!(normalize("a\\b.feature"), "a/b.feature");
        assert_eq!(normalize("a/b.feature"), "a/b.feature");
    }
}
