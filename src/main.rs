// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `feature-discovery` binary.

use std::{io, process::ExitCode};

use console::Term;
use feature_discovery::{
    cli::{self, Parser as _},
    Discovery,
};

fn main() -> ExitCode {
    let opts = cli::Opts::parse();
    let styles = cli::Styles::new(opts.color);

    tracing_subscriber::fmt()
        .with_max_level(opts.log_level())
        .with_writer(io::stderr)
        .with_ansi(styles.is_present)
        .init();

    let discovery = Discovery::with_repository(opts.repository());
    let definition = opts.definition();
    tracing::info!(
        definition = definition.name(),
        root = %opts.root.display(),
        "discovering feature files"
    );

    let rendered = match discovery.discover(Some(&definition)) {
        Ok(files) => cli::render(&files, &styles),
        Err(e) => {
            tracing::error!(error = %e, "discovery failed");
            _ = Term::stderr().write_line(&styles.err(e.to_string()));
            return ExitCode::FAILURE;
        }
    };

    match Term::stdout().write_str(&rendered) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "failed to write output");
            ExitCode::FAILURE
        }
    }
}
