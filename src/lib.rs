// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Discovery of [Gherkin] specification files backing feature definitions.
//!
//! A feature definition is a type saying "my behavior is described by this
//! `.feature` file" (or by every file matching a glob pattern). [`Discovery`]
//! resolves such a definition through a [`Repository`], parses every found
//! file with a [`Parser`] and returns the [`ResolvedFile`]s in resolution
//! order.
//!
//! ```rust
//! use feature_discovery::{
//!     parser, repository::InMemory, Definition, Discovery, Resolution,
//! };
//!
//! let repo = InMemory::new()
//!     .with_file("AddTwoNumbers.feature", "Feature: Add\n  Scenario: two\n")
//!     .with_file("AddNumbersTo5.feature", "Feature: Add\n  Scenario: five\n");
//! let discovery = Discovery::new(repo, parser::Basic);
//!
//! let definition =
//!     Definition::new("AddFeature").with_feature_file(Resolution::pattern("Add*.feature"));
//! let files = discovery.discover(Some(&definition)).unwrap();
//!
//! assert_eq!(files.len(), 2);
//! assert_eq!(files[0].path, "AddTwoNumbers.feature");
//! ```
//!
//! [Gherkin]: https://cucumber.io/docs/gherkin/reference

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(nonstandard_style, rustdoc::all, trivial_casts, trivial_numeric_casts)]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(
    clippy::as_conversions,
    clippy::branches_sharing_code,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::empty_line_after_outer_attr,
    clippy::exit,
    clippy::expect_used,
    clippy::fallible_impl_from,
    clippy::get_unwrap,
    clippy::if_then_some_else_none,
    clippy::map_err_ignore,
    clippy::missing_const_for_fn,
    clippy::missing_docs_in_private_items,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::or_fun_call,
    clippy::panic_in_result_fn,
    clippy::pedantic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::redundant_clone,
    clippy::str_to_string,
    clippy::string_add,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::use_debug,
    clippy::use_self,
    clippy::wildcard_enum_match_arm,
    future_incompatible,
    let_underscore_drop,
    macro_use_extern_crate,
    meta_variable_misuse,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    single_use_lifetimes,
    unreachable_pub,
    unused,
    variant_size_differences
)]

pub mod cli;
pub mod definition;
pub mod discovery;
pub mod error;
pub mod feature;
pub mod glob;
pub mod parser;
pub mod repository;
pub mod resolved;

pub use gherkin;

#[cfg(feature = "macros")]
#[cfg_attr(docsrs, doc(cfg(feature = "macros")))]
#[doc(inline)]
pub use feature_discovery_codegen::FeatureDefinition;

#[doc(inline)]
pub use self::{
    definition::{Definition, FeatureDefinition, Resolution},
    discovery::Discovery,
    error::{Error, Result},
    feature::Ext as FeatureExt,
    parser::Parser,
    repository::{RawFile, Repository},
    resolved::{DiscoveryResult, ResolvedFile},
};
