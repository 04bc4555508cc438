// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`gherkin::Feature`] extension.

use sealed::sealed;

/// Helper methods to inspect parsed [`gherkin::Feature`]s.
#[sealed]
pub trait Ext {
    /// Iterates over all the [`Scenario`]s of this [`Feature`] in document
    /// order: top-level ones first, then the ones inside [`Rule`]s.
    ///
    /// [`Feature`]: gherkin::Feature
    /// [`Rule`]: gherkin::Rule
    /// [`Scenario`]: gherkin::Scenario
    fn all_scenarios(&self) -> Box<dyn Iterator<Item = &gherkin::Scenario> + '_>;

    /// Returns the first [`Scenario`] of this [`Feature`], if any.
    ///
    /// [`Feature`]: gherkin::Feature
    /// [`Scenario`]: gherkin::Scenario
    #[must_use]
    fn first_scenario(&self) -> Option<&gherkin::Scenario> {
        self.all_scenarios().next()
    }

    /// Collects names of all the [`Feature`]'s [`Scenario`]s.
    ///
    /// [`Feature`]: gherkin::Feature
    /// [`Scenario`]: gherkin::Scenario
    #[must_use]
    fn scenario_names(&self) -> Vec<&str> {
        self.all_scenarios().map(|s| s.name.as_str()).collect()
    }

    /// Counts all the [`Feature`]'s [`Scenario`]s, including [`Rule`]s inside.
    ///
    /// [`Feature`]: gherkin::Feature
    /// [`Rule`]: gherkin::Rule
    /// [`Scenario`]: gherkin::Scenario
    #[must_use]
    fn count_scenarios(&self) -> usize;

    /// Counts all the [`Feature`]'s [`Step`]s.
    ///
    /// [`Feature`]: gherkin::Feature
    /// [`Step`]: gherkin::Step
    #[must_use]
    fn count_steps(&self) -> usize;
}

#[sealed]
impl Ext for gherkin::Feature {
    fn all_scenarios(&self) -> Box<dyn Iterator<Item = &gherkin::Scenario> + '_> {
        Box::new(
            self.scenarios
                .iter()
                .chain(self.rules.iter().flat_map(|r| &r.scenarios)),
        )
    }

    fn count_scenarios(&self) -> usize {
        self.scenarios.len()
            + self.rules.iter().map(|r| r.scenarios.len()).sum::<usize>()
    }

    fn count_steps(&self) -> usize {
        self.all_scenarios().map(|s| s.steps.len()).sum()
    }
}
