// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Branch check implementation.
//!
//! The branch being built must follow one of the branch syntaxes.
//! Skips if there is no branch to check and not in a git repository.

use crate::branch::BranchRules;
use crate::check::{Check, CheckContext, CheckResult, Violation};

/// The branch check validates the current branch name.
pub struct BranchCheck;

impl Check for BranchCheck {
    fn name(&self) -> &'static str {
        "branch"
    }

    fn description(&self) -> &'static str {
        "Branch name syntax"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        let Some(branch) = ctx.branch else {
            if !ctx.in_git_repo {
                return CheckResult::skipped(self.name(), "Not a git repository");
            }
            return CheckResult::failed(
                self.name(),
                vec![Violation::general(
                    "detached_head",
                    "Branch is empty. Possible detached HEAD? Check out a branch or pass --name.",
                )],
            );
        };

        if let Some(kind) = ctx.rules.classify(branch) {
            tracing::debug!("branch {} is a {} branch", branch, kind.display_name());
            return CheckResult::passed(self.name());
        }

        let mut violation = Violation::new(
            "invalid_branch",
            branch,
            format!("Rename the branch to one of:\n{}", valid_syntaxes(ctx.rules)),
        );
        if let Some(kind) = ctx.rules.closest(branch) {
            violation = violation.with_pattern(ctx.rules.pattern(kind).as_str());
        }

        CheckResult::failed(self.name(), vec![violation])
    }
}

/// List every branch syntax, one per line, for advice text.
pub(crate) fn valid_syntaxes(rules: &BranchRules) -> String {
    rules
        .syntaxes()
        .map(|(_, syntax)| format!("      {syntax}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "branch_tests.rs"]
mod tests;
