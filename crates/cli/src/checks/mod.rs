// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check registry.
//!
//! Built-in status checks:
//! - branch: current branch follows one of the branch syntaxes
//! - pull-request: pull request target is a branch that accepts merges

pub mod branch;
pub mod pull_request;

use std::sync::Arc;

use crate::check::{Check, CheckContext, CheckResult};
use crate::config::CheckLevel;

/// All registered check names in canonical order.
pub const CHECK_NAMES: &[&str] = &["branch", "pull-request"];

/// Create all registered checks.
pub fn all_checks() -> Vec<Arc<dyn Check>> {
    vec![
        Arc::new(branch::BranchCheck),
        Arc::new(pull_request::PullRequestCheck),
    ]
}

/// Get a check by name.
pub fn get_check(name: &str) -> Option<Arc<dyn Check>> {
    all_checks().into_iter().find(|c| c.name() == name)
}

/// Filter checks based on enabled/disabled flags.
///
/// Semantics:
/// - No flags: run all default-enabled checks
/// - `--<check>`: run ONLY specified checks
/// - `--no-<check>`: run all EXCEPT specified checks
pub fn filter_checks(enabled: &[String], disabled: &[String]) -> Vec<Arc<dyn Check>> {
    if !enabled.is_empty() {
        // Canonical order, whatever order the flags came in
        return CHECK_NAMES
            .iter()
            .filter(|name| enabled.iter().any(|e| e == *name))
            .filter_map(|name| get_check(name))
            .collect();
    }

    all_checks()
        .into_iter()
        .filter(|c| c.default_enabled())
        .filter(|c| !disabled.iter().any(|d| d == c.name()))
        .collect()
}

/// Run checks in order, applying the configured level of each.
///
/// Checks configured `off` are not run; `warn` checks report violations
/// without failing.
pub fn run_checks(checks: &[Arc<dyn Check>], ctx: &CheckContext) -> Vec<CheckResult> {
    checks
        .iter()
        .filter_map(|check| {
            let level = ctx.config.check.level(check.name());
            if level == CheckLevel::Off {
                tracing::debug!("check {} disabled by config", check.name());
                return None;
            }

            let result = check.run(ctx);
            tracing::debug!(
                "check {}: passed={} skipped={} violations={}",
                result.name,
                result.passed,
                result.skipped,
                result.violations.len()
            );

            Some(match level {
                CheckLevel::Warn => result.into_warning(),
                _ => result,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
