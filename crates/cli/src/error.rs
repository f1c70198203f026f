// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised before any branch is checked, and process exit codes.

use std::path::PathBuf;

use crate::branch::BranchKind;
use crate::pattern::PatternError;

/// Flowgate error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// flowgate.toml is malformed or fails validation
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// `-C`/`FLOWGATE_CONFIG` names a file that does not exist
    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// A configured branch syntax does not compile
    #[error("config error: branches.{kind}: invalid syntax '{pattern}': {source}")]
    BranchSyntax {
        kind: BranchKind,
        pattern: String,
        #[source]
        source: PatternError,
    },

    /// Name that is not one of the seven branch kinds
    #[error("unknown branch kind: {0}")]
    UnknownBranchKind(String),

    /// Repository could not be opened or HEAD could not be read
    #[error("git error: {}: {source}", path.display())]
    Git {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    /// File I/O error
    #[error("io error: {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type using flowgate Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// All checks passed (or the candidate matched)
    Success = 0,
    /// One or more checks failed (or the candidate did not match)
    CheckFailed = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Repository or filesystem failure
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. }
            | Error::ConfigNotFound(_)
            | Error::BranchSyntax { .. }
            | Error::UnknownBranchKind(_) => ExitCode::ConfigError,
            Error::Git { .. } | Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

impl From<bool> for ExitCode {
    fn from(passed: bool) -> Self {
        if passed {
            ExitCode::Success
        } else {
            ExitCode::CheckFailed
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
