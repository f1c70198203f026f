// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Branch and version syntax patterns.
//!
//! A small globbing dialect used to validate branch names and version strings:
//! - `#` matches one or more ASCII digits
//! - `*` matches one or more of any character
//! - every other character matches itself
//!
//! Matching always spans the whole candidate. Runs of the same wildcard
//! (`##`, `**`) collapse to a single wildcard before matching.

pub mod matcher;

pub use matcher::{GlobPattern, PatternError, collapse_wildcards, has_wildcards, to_regex};

/// Check whether `candidate` conforms to `pattern`.
///
/// An absent pattern (`None`) is treated as the empty pattern, which only
/// matches the empty candidate.
///
/// ```
/// use flowgate::pattern::matches;
///
/// assert!(matches("release/v1.2.3", "release/v#.#.#"));
/// assert!(matches("feature/42-login-fix", "feature/#-*"));
/// assert!(!matches("release/v1.2", "release/v#.#.#"));
/// assert!(matches("", None));
/// ```
pub fn matches<'a>(candidate: &str, pattern: impl Into<Option<&'a str>>) -> bool {
    let pattern = pattern.into().unwrap_or_default();

    if !has_wildcards(pattern) {
        return candidate == pattern;
    }

    match GlobPattern::compile(pattern) {
        Ok(compiled) => compiled.is_match(candidate),
        Err(e) => {
            tracing::warn!("pattern {:?} could not be compiled: {}", pattern, e);
            false
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
