// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI (command line interface) of the `feature-discovery` binary.
//!
//! Resolves a single feature definition against a directory and renders the
//! found feature files along with their scenarios.

use std::{borrow::Cow, fmt::Write as _, path::PathBuf, str::FromStr};

use console::Style;
use smart_default::SmartDefault;

pub use clap::Parser;

use crate::{
    repository::FileSystem, Definition, DiscoveryResult, FeatureExt as _,
    Resolution,
};

/// Options of the `feature-discovery` binary.
#[derive(Clone, Debug, SmartDefault, clap::Parser)]
#[command(
    name = "feature-discovery",
    about = "Resolves a feature definition into its parsed Gherkin files",
    long_about = None
)]
pub struct Opts {
    /// Simple name of the feature definition type.
    ///
    /// Used to build the default `<NAME>.feature` path.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Path of the exactly one feature file, relative to `--root`.
    #[arg(long, value_name = "PATH", conflicts_with = "pattern")]
    pub path: Option<String>,

    /// Glob pattern of the feature files, relative to `--root`.
    #[arg(long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Feature file annotation, treated as a pattern if it contains glob
    /// metacharacters.
    #[arg(
        long,
        value_name = "PATH|GLOB",
        conflicts_with_all = ["path", "pattern"]
    )]
    pub feature_file: Option<String>,

    /// Directory all the paths and patterns are relative to.
    #[arg(long, value_name = "DIR", default_value = ".")]
    #[default(PathBuf::from("."))]
    pub root: PathBuf,

    /// Match patterns ignoring ASCII case.
    #[arg(long)]
    pub case_insensitive: bool,

    /// Verbosity of logging.
    ///
    /// Warnings only by default, `-v` adds info, `-vv` debug, `-vvv` trace
    /// events.
    #[arg(short, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Coloring policy for a console output.
    #[arg(long, value_name = "auto|always|never", default_value = "auto")]
    #[default(Coloring::Auto)]
    pub color: Coloring,
}

impl Opts {
    /// Builds the [`Definition`] to discover.
    #[must_use]
    pub fn definition(&self) -> Definition {
        let feature_file = self
            .pattern
            .clone()
            .map(Resolution::Pattern)
            .or_else(|| self.path.clone().map(Resolution::Single))
            .or_else(|| self.feature_file.clone().map(Resolution::infer));

        let definition = Definition::new(self.name.clone());
        match feature_file {
            Some(resolution) => definition.with_feature_file(resolution),
            None => definition,
        }
    }

    /// Builds the [`FileSystem`] repository to discover in.
    #[must_use]
    pub fn repository(&self) -> FileSystem {
        FileSystem::new(self.root.clone()).case_insensitive(self.case_insensitive)
    }

    /// Maximum [`tracing::Level`] to log, according to the verbosity.
    #[must_use]
    pub const fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

/// Possible policies of a [`console`] output coloring.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Coloring {
    /// Letting [`console::colors_enabled()`] to decide, whether output should
    /// be colored.
    Auto,

    /// Forcing of a colored output.
    Always,

    /// Forcing of a non-colored output.
    Never,
}

impl FromStr for Coloring {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err("possible options: auto, always, never"),
        }
    }
}

impl Coloring {
    /// Indicates whether the output should be colored.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        match self {
            Self::Auto => console::colors_enabled(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// [`Style`]s for rendering discovered files.
#[derive(Clone, Debug)]
pub struct Styles {
    /// [`Style`] for rendering paths.
    pub path: Style,

    /// [`Style`] for rendering feature names.
    pub header: Style,

    /// [`Style`] for rendering errors.
    pub err: Style,

    /// Indicates whether the output is colored.
    pub is_present: bool,
}

impl Styles {
    /// Creates new [`Styles`] according to the given [`Coloring`].
    #[must_use]
    pub fn new(coloring: Coloring) -> Self {
        Self {
            path: Style::new().green(),
            header: Style::new().blue().bold(),
            err: Style::new().red(),
            is_present: coloring.is_enabled(),
        }
    }

    /// Applies the given [`Style`] to `input`, if the output is colored.
    fn apply<'a>(&self, style: &Style, input: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        if self.is_present {
            style.apply_to(input.into()).force_styling(true).to_string().into()
        } else {
            input.into()
        }
    }

    /// Colors `input` with [`Styles::err`] style, if the output is colored.
    #[must_use]
    pub fn err<'a>(&self, input: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.apply(&self.err, input)
    }
}

/// Renders the discovered `files`: one block per file with its path, feature
/// name and indented scenario names.
#[must_use]
pub fn render(files: &DiscoveryResult, styles: &Styles) -> String {
    let mut out = String::new();
    for file in files {
        let feature = &file.document;
        _ = writeln!(
            out,
            "{}: {}",
            styles.apply(&styles.path, file.path.as_str()),
            styles.apply(&styles.header, feature.name.as_str()),
        );
        for name in feature.scenario_names() {
            _ = writeln!(out, "  - {name}");
        }
    }
    if files.is_empty() {
        out.push_str("No feature files found\n");
    }
    out
}
