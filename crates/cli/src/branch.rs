// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Branch and release kinds of the GitFlow branching model.
//!
//! Every kind has exactly one row in [`KINDS`]: its config key, display name
//! and default syntax. Matching, listing and error messages are all driven
//! from that table.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::BranchesConfig;
use crate::error::{Error, Result};
use crate::pattern::matcher::{MATCH_ANYTHING, MATCH_DIGITS};
use crate::pattern::{GlobPattern, matches};

/// A named category of branch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum BranchKind {
    Master,
    Develop,
    Feature,
    PreviewFeature,
    Release,
    Preview,
    #[serde(rename = "hotfix")]
    #[value(name = "hotfix")]
    HotFix,
}

struct KindRow {
    key: &'static str,
    display: &'static str,
    pattern: &'static str,
}

/// One row per [`BranchKind`], in declaration order.
const KINDS: [KindRow; 7] = [
    KindRow {
        key: "master",
        display: "master",
        pattern: "master",
    },
    KindRow {
        key: "develop",
        display: "develop",
        pattern: "develop",
    },
    KindRow {
        key: "feature",
        display: "feature",
        pattern: "feature/#-*",
    },
    KindRow {
        key: "preview-feature",
        display: "preview feature",
        pattern: "preview/feature/#-*",
    },
    KindRow {
        key: "release",
        display: "release",
        pattern: "release/v#.#.#",
    },
    KindRow {
        key: "preview",
        display: "preview",
        pattern: "preview/v#.#.#-preview.#",
    },
    KindRow {
        key: "hotfix",
        display: "hotfix",
        pattern: "hotfix/#-*",
    },
];

impl BranchKind {
    /// All kinds in table order.
    pub const ALL: [BranchKind; 7] = [
        BranchKind::Master,
        BranchKind::Develop,
        BranchKind::Feature,
        BranchKind::PreviewFeature,
        BranchKind::Release,
        BranchKind::Preview,
        BranchKind::HotFix,
    ];

    fn row(self) -> &'static KindRow {
        &KINDS[self as usize]
    }

    /// Key used in `flowgate.toml` and on the command line.
    pub fn key(self) -> &'static str {
        self.row().key
    }

    /// Human-readable name for messages.
    pub fn display_name(self) -> &'static str {
        self.row().display
    }

    /// Built-in syntax for this kind.
    pub fn default_pattern(self) -> &'static str {
        self.row().pattern
    }

    /// Look up a kind by its config key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }

    /// Branches named after an issue (`feature/42-login-fix`).
    pub fn carries_issue_number(self) -> bool {
        matches!(
            self,
            BranchKind::Feature | BranchKind::PreviewFeature | BranchKind::HotFix
        )
    }

    /// Branches named after a version (`release/v1.2.3`).
    pub fn carries_version(self) -> bool {
        matches!(self, BranchKind::Release | BranchKind::Preview)
    }
}

impl fmt::Display for BranchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BranchKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s).ok_or_else(|| Error::UnknownBranchKind(s.to_string()))
    }
}

/// Release classification, each with its own version syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseKind {
    Production,
    Preview,
}

impl ReleaseKind {
    /// Syntax a version string must follow for this release.
    pub fn version_pattern(self) -> &'static str {
        match self {
            ReleaseKind::Production => "#.#.#",
            ReleaseKind::Preview => "#.#.#-preview.#",
        }
    }

    /// The branch kind a release of this kind is cut from.
    pub fn branch_kind(self) -> BranchKind {
        match self {
            ReleaseKind::Production => BranchKind::Release,
            ReleaseKind::Preview => BranchKind::Preview,
        }
    }

    /// Check a version string (without a leading `v`) against this release's syntax.
    pub fn is_valid_version(self, version: &str) -> bool {
        matches(version, self.version_pattern())
    }
}

impl fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseKind::Production => f.write_str("production"),
            ReleaseKind::Preview => f.write_str("preview"),
        }
    }
}

/// The compiled branch table: one pattern per [`BranchKind`].
#[derive(Debug, Clone)]
pub struct BranchRules {
    patterns: Vec<GlobPattern>,
}

impl BranchRules {
    /// Rules using the built-in syntax for every kind.
    pub fn new() -> Result<Self> {
        Self::with_overrides(&BranchesConfig::default())
    }

    /// Rules with per-kind patterns replaced from configuration.
    pub fn with_overrides(overrides: &BranchesConfig) -> Result<Self> {
        let patterns = BranchKind::ALL
            .into_iter()
            .map(|kind| {
                let source = overrides
                    .patterns
                    .get(&kind)
                    .map(String::as_str)
                    .unwrap_or_else(|| kind.default_pattern());
                GlobPattern::compile(source).map_err(|e| Error::BranchSyntax {
                    kind,
                    pattern: source.to_string(),
                    source: e,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Active pattern for a kind.
    pub fn pattern(&self, kind: BranchKind) -> &GlobPattern {
        &self.patterns[kind as usize]
    }

    /// Check whether `branch` is a branch of the given kind.
    pub fn is(&self, kind: BranchKind, branch: &str) -> bool {
        self.pattern(kind).is_match(branch)
    }

    /// Find the first kind (in table order) whose syntax `branch` follows.
    pub fn classify(&self, branch: &str) -> Option<BranchKind> {
        let kind = BranchKind::ALL
            .into_iter()
            .find(|&kind| self.is(kind, branch));
        tracing::debug!("classified branch {:?} as {:?}", branch, kind);
        kind
    }

    /// The kind a non-conforming `branch` was most likely meant to be.
    ///
    /// Compares `branch` against each pattern's literal text up to its last
    /// `/` before the first wildcard, and picks the longest that `branch`
    /// starts with. Single-segment patterns (`master`) never qualify.
    pub fn closest(&self, branch: &str) -> Option<BranchKind> {
        BranchKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let pattern = self.pattern(kind).normalized();
                let literal_end = pattern
                    .find([MATCH_DIGITS, MATCH_ANYTHING])
                    .unwrap_or(pattern.len());
                let prefix_len = pattern[..literal_end].rfind('/')? + 1;
                branch
                    .starts_with(&pattern[..prefix_len])
                    .then_some((prefix_len, kind))
            })
            .max_by_key(|&(len, _)| len)
            .map(|(_, kind)| kind)
    }

    /// `(kind, syntax)` pairs in table order, for listings and advice.
    pub fn syntaxes(&self) -> impl Iterator<Item = (BranchKind, &str)> + '_ {
        BranchKind::ALL
            .into_iter()
            .map(|kind| (kind, self.pattern(kind).as_str()))
    }
}

/// Extract the issue number from a branch like `feature/42-login-fix`.
///
/// The number is the digit run opening the first path segment that starts
/// with digits followed by `-` (or that is only digits).
pub fn issue_number(branch: &str) -> Option<u64> {
    branch.split('/').find_map(|segment| {
        let digits_end = segment
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(segment.len());
        if digits_end == 0 {
            return None;
        }
        match segment[digits_end..].chars().next() {
            None | Some('-') => segment[..digits_end].parse().ok(),
            Some(_) => None,
        }
    })
}

/// Extract the version segment from a branch like `release/v1.2.3`.
///
/// Returns the last path segment when it looks like `v<digit>...`.
pub fn branch_version(branch: &str) -> Option<&str> {
    let segment = branch.rsplit('/').next()?;
    let mut chars = segment.chars();
    match (chars.next(), chars.next()) {
        (Some('v'), Some(d)) if d.is_ascii_digit() => Some(segment),
        _ => None,
    }
}

/// The major.minor.patch section of a version (`v1.2.3-preview.4` gives `1.2.3`).
pub fn version_core(version: &str) -> &str {
    let version = version.strip_prefix('v').unwrap_or(version);
    version.split('-').next().unwrap_or(version)
}

/// True if the version follows the preview syntax.
pub fn is_preview_version(version: &str) -> bool {
    ReleaseKind::Preview.is_valid_version(version.strip_prefix('v').unwrap_or(version))
}

#[cfg(test)]
#[path = "branch_tests.rs"]
mod tests;
