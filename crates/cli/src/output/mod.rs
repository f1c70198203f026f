//! Output formatting for check results.

pub mod json;
pub mod text;

/// Violations printed in text output unless `--limit`/`--no-limit` say otherwise.
pub const DEFAULT_LIMIT: usize = 15;

/// How many violations text output prints before stopping.
///
/// JSON output is never truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationLimit {
    Unlimited,
    AtMost(usize),
}

impl ViolationLimit {
    /// Limit selected by the `--limit N` and `--no-limit` flags.
    pub fn from_flags(limit: usize, no_limit: bool) -> Self {
        if no_limit {
            Self::Unlimited
        } else {
            Self::AtMost(limit)
        }
    }

    /// The cap, if any.
    pub fn cap(self) -> Option<usize> {
        match self {
            Self::Unlimited => None,
            Self::AtMost(n) => Some(n),
        }
    }

    /// Whether `shown` violations already exhaust the limit.
    pub fn reached(self, shown: usize) -> bool {
        self.cap().is_some_and(|n| shown >= n)
    }
}

impl Default for ViolationLimit {
    fn default() -> Self {
        Self::AtMost(DEFAULT_LIMIT)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
