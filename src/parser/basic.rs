// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Default [`Parser`] implementation.

use std::path::PathBuf;

use crate::{parser::Error, Parser, RawFile};

/// Default [`Parser`], producing [`gherkin::Feature`]s with English keywords.
///
/// The source path of a [`RawFile`] is recorded in [`gherkin::Feature::path`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Basic;

impl Parser for Basic {
    type Document = gherkin::Feature;

    fn parse(&self, file: &RawFile) -> super::Result<Self::Document> {
        let text = file.as_str().map_err(|source| Error::Encoding {
            path: file.path().to_owned(),
            source,
        })?;

        let env = gherkin::GherkinEnv::default();
        let mut feature = gherkin::Feature::parse(text, env)
            .map_err(|e| Error::parsing(file.path(), e.to_string()))?;
        feature.path = Some(PathBuf::from(file.path()));

        Ok(feature)
    }
}
