//! Status check types and result formatting data.

use serde::Serialize;

use crate::branch::BranchRules;
use crate::config::Config;

/// Refs of the pull request a status check runs for.
#[derive(Debug, Clone, Default)]
pub struct PullRequest {
    /// Branch the pull request merges from.
    pub source: Option<String>,
    /// Branch the pull request merges into.
    pub target: String,
}

impl PullRequest {
    /// Build pull request refs from CI-provided values.
    ///
    /// GitHub Actions sets both ref variables to empty strings on push builds,
    /// so an empty or missing target means the run is not a pull request.
    pub fn from_refs(source: Option<&str>, target: Option<&str>) -> Option<Self> {
        let target = target.filter(|t| !t.is_empty())?;
        Some(Self {
            source: source.filter(|s| !s.is_empty()).map(String::from),
            target: target.to_string(),
        })
    }
}

/// Context passed to all checks during execution.
pub struct CheckContext<'a> {
    /// Parsed configuration.
    pub config: &'a Config,
    /// Compiled branch syntax table.
    pub rules: &'a BranchRules,
    /// Branch being validated (None = detached HEAD or no repository).
    pub branch: Option<&'a str>,
    /// Whether the root is inside a git repository.
    pub in_git_repo: bool,
    /// Pull request refs, when running for a pull request.
    pub pull_request: Option<&'a PullRequest>,
}

/// The Check trait defines a single status check.
///
/// Object-safe to allow dynamic dispatch via `Box<dyn Check>`.
pub trait Check: Send + Sync {
    /// Unique identifier for this check (e.g., "branch").
    fn name(&self) -> &'static str;

    /// Human-readable description for help output.
    fn description(&self) -> &'static str;

    /// Run the check and return results.
    ///
    /// Return `CheckResult::skipped()` if prerequisites are missing.
    fn run(&self, ctx: &CheckContext) -> CheckResult;

    /// Whether this check runs when no check flags are given.
    fn default_enabled(&self) -> bool {
        true
    }
}

/// A single violation within a check.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    /// Violation category (check-specific).
    #[serde(rename = "type")]
    pub violation_type: String,

    /// The ref or value that failed validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Actionable guidance on how to fix.
    pub advice: String,

    /// Syntax the subject was expected to follow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl Violation {
    /// Create a violation about a specific ref or value.
    pub fn new(
        violation_type: impl Into<String>,
        subject: impl Into<String>,
        advice: impl Into<String>,
    ) -> Self {
        Self {
            violation_type: violation_type.into(),
            subject: Some(subject.into()),
            advice: advice.into(),
            pattern: None,
        }
    }

    /// Create a violation with no subject (e.g., a detached HEAD).
    pub fn general(violation_type: impl Into<String>, advice: impl Into<String>) -> Self {
        Self {
            violation_type: violation_type.into(),
            subject: None,
            advice: advice.into(),
            pattern: None,
        }
    }

    /// Add the expected syntax to the violation.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }
}

/// Result of running a single check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Check identifier (e.g., "branch").
    pub name: String,

    /// Whether this check passed.
    pub passed: bool,

    /// True if check was skipped.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub skipped: bool,

    /// True if violations were downgraded to warnings by config.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub warning: bool,

    /// Reason the check was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// List of violations (omitted if empty).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl CheckResult {
    /// Create a passing check result.
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            skipped: false,
            warning: false,
            error: None,
            violations: Vec::new(),
        }
    }

    /// Create a failing check result with violations.
    pub fn failed(name: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            skipped: false,
            warning: false,
            error: None,
            violations,
        }
    }

    /// Create a passing or failing result depending on whether there are violations.
    pub fn from_violations(name: impl Into<String>, violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            Self::passed(name)
        } else {
            Self::failed(name, violations)
        }
    }

    /// Create a skipped check result with a reason.
    pub fn skipped(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            skipped: true,
            warning: false,
            error: Some(error.into()),
            violations: Vec::new(),
        }
    }

    /// Downgrade a failure to a warning: violations are kept, the check passes.
    pub fn into_warning(mut self) -> Self {
        if !self.passed && !self.skipped {
            self.passed = true;
            self.warning = true;
        }
        self
    }
}

/// Aggregated results from all checks.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    /// ISO 8601 timestamp.
    pub timestamp: String,

    /// Whether all checks passed.
    pub passed: bool,

    /// Branch the checks ran against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Results for each check.
    pub checks: Vec<CheckResult>,
}

impl CheckOutput {
    /// Create output from check results.
    pub fn new(timestamp: String, branch: Option<String>, checks: Vec<CheckResult>) -> Self {
        // Overall passed = all non-skipped checks passed
        let passed = checks.iter().all(|c| c.passed || c.skipped);
        Self {
            timestamp,
            passed,
            branch,
            checks,
        }
    }

    /// Count total violations across all checks.
    pub fn total_violations(&self) -> usize {
        self.checks.iter().map(|c| c.violations.len()).sum()
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
