//! Compiled glob patterns.

use std::borrow::Cow;

use regex::Regex;

/// Wildcard matching one or more ASCII digits.
pub const MATCH_DIGITS: char = '#';

/// Wildcard matching one or more of any character.
pub const MATCH_ANYTHING: char = '*';

const REGEX_DIGITS: &str = "[0-9]+";
const REGEX_ANYTHING: &str = "(?s:.+)";

/// A pattern compiled once and matched many times.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    source: String,
    normalized: String,
    kind: PatternKind,
}

#[derive(Debug, Clone)]
enum PatternKind {
    /// No wildcards: plain string equality.
    Literal,
    /// Anchored regex translated from the normalized pattern.
    Regex(Regex),
}

/// Error during pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid pattern: {0}")]
    InvalidRegex(#[from] regex::Error),
}

impl GlobPattern {
    /// Compile a pattern string.
    ///
    /// Patterns without wildcards compile to a literal and never touch the
    /// regex engine.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let normalized = collapse_wildcards(pattern).into_owned();

        let kind = if has_wildcards(&normalized) {
            let expr = to_regex(&normalized);
            tracing::debug!("compiled pattern {:?} as {}", pattern, expr);
            PatternKind::Regex(Regex::new(&expr)?)
        } else {
            PatternKind::Literal
        };

        Ok(Self {
            source: pattern.to_string(),
            normalized,
            kind,
        })
    }

    /// Check whether the whole of `candidate` conforms to this pattern.
    pub fn is_match(&self, candidate: &str) -> bool {
        match &self.kind {
            PatternKind::Literal => candidate == self.normalized,
            PatternKind::Regex(regex) => regex.is_match(candidate),
        }
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The pattern after wildcard runs were collapsed.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

impl std::fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

fn is_wildcard(c: char) -> bool {
    c == MATCH_DIGITS || c == MATCH_ANYTHING
}

/// Check if a pattern contains `#` or `*`.
pub fn has_wildcards(pattern: &str) -> bool {
    pattern.contains(is_wildcard)
}

/// Collapse runs of the same wildcard into one (`##.#` becomes `#.#`).
///
/// A wildcard is only dropped when the previously kept character is the same
/// wildcard, so the result never holds two equal adjacent wildcards and a
/// second pass is a no-op. Mixed runs like `#*#` are kept as written.
pub fn collapse_wildcards(pattern: &str) -> Cow<'_, str> {
    let has_run = pattern
        .as_bytes()
        .windows(2)
        .any(|w| w[0] == w[1] && is_wildcard(w[0] as char));
    if !has_run {
        return Cow::Borrowed(pattern);
    }

    let mut out = String::with_capacity(pattern.len());
    let mut last = None;
    for c in pattern.chars() {
        if is_wildcard(c) && last == Some(c) {
            continue;
        }
        out.push(c);
        last = Some(c);
    }
    Cow::Owned(out)
}

/// Translate a normalized pattern into an anchored regex expression.
///
/// Literal runs are escaped as a whole, so `.` only matches a period and any
/// other regex metacharacter in a branch name is taken literally.
pub fn to_regex(normalized: &str) -> String {
    let mut expr = String::with_capacity(normalized.len() * 2 + 2);
    expr.push('^');

    let mut literal = String::new();
    for c in normalized.chars() {
        if !is_wildcard(c) {
            literal.push(c);
            continue;
        }
        if !literal.is_empty() {
            expr.push_str(&regex::escape(&literal));
            literal.clear();
        }
        expr.push_str(if c == MATCH_DIGITS {
            REGEX_DIGITS
        } else {
            REGEX_ANYTHING
        });
    }
    if !literal.is_empty() {
        expr.push_str(&regex::escape(&literal));
    }

    expr.push('$');
    expr
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
