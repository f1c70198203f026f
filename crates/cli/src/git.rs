// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git utilities for branch detection.
//!
//! Uses git2 (libgit2) so no git binary is required at runtime.

use std::path::Path;

use git2::{ErrorCode, Repository};

use crate::error::{Error, Result};

/// Check if a path is in a git repository.
pub fn is_git_repo(root: &Path) -> bool {
    Repository::discover(root).is_ok()
}

/// Get the short name of the branch HEAD points at.
///
/// Returns `None` on a detached HEAD. A freshly initialized repository with
/// no commits still reports the branch HEAD refers to.
pub fn current_branch(root: &Path) -> Result<Option<String>> {
    let git_err = |source: git2::Error| Error::Git {
        path: root.to_path_buf(),
        source,
    };
    let repo = Repository::discover(root).map_err(git_err)?;

    if repo.head_detached().unwrap_or(false) {
        tracing::debug!("HEAD is detached in {}", root.display());
        return Ok(None);
    }

    match repo.head() {
        Ok(head) => Ok(head.shorthand().map(String::from)),
        Err(e) if e.code() == ErrorCode::UnbornBranch => {
            // HEAD is a symbolic ref to a branch with no commits yet
            let head = repo.find_reference("HEAD").map_err(git_err)?;
            Ok(head
                .symbolic_target()
                .and_then(|target| target.strip_prefix("refs/heads/"))
                .map(String::from))
        }
        Err(e) => Err(git_err(e)),
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
