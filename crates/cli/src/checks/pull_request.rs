// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pull request check implementation.
//!
//! A pull request may only merge into a preview, release, develop or master
//! branch. Skips when not running for a pull request.

use crate::branch::{BranchKind, BranchRules};
use crate::check::{Check, CheckContext, CheckResult, Violation};

/// Branch kinds a pull request may target.
pub const TARGET_KINDS: [BranchKind; 4] = [
    BranchKind::Preview,
    BranchKind::Release,
    BranchKind::Develop,
    BranchKind::Master,
];

/// The pull request check validates the pull request target branch.
pub struct PullRequestCheck;

impl Check for PullRequestCheck {
    fn name(&self) -> &'static str {
        "pull-request"
    }

    fn description(&self) -> &'static str {
        "Pull request target branch"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        let Some(pr) = ctx.pull_request else {
            return CheckResult::skipped(self.name(), "Not a pull request");
        };

        if let Some(source) = &pr.source {
            tracing::info!("pull request: {} -> {}", source, pr.target);
        }

        if is_valid_target(ctx.rules, &pr.target) {
            return CheckResult::passed(self.name());
        }

        CheckResult::failed(
            self.name(),
            vec![
                Violation::new(
                    "invalid_target_branch",
                    pr.target.as_str(),
                    format!(
                        "Pull requests must target one of:\n{}",
                        target_syntaxes(ctx.rules)
                    ),
                ),
            ],
        )
    }
}

/// Check whether a branch may be the target of a pull request.
pub fn is_valid_target(rules: &BranchRules, target: &str) -> bool {
    TARGET_KINDS.iter().any(|&kind| rules.is(kind, target))
}

fn target_syntaxes(rules: &BranchRules) -> String {
    TARGET_KINDS
        .iter()
        .map(|&kind| format!("      {}", rules.pattern(kind)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "pull_request_tests.rs"]
mod tests;
