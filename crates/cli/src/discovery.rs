// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating flowgate.toml.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "flowgate.toml";

/// Nearest flowgate.toml in `start_dir` or its ancestors.
///
/// The search does not leave the repository: a directory holding `.git`
/// is the last one looked at.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!("found config at {}", candidate.display());
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Config to load: the explicit `-C`/`FLOWGATE_CONFIG` path when given,
/// otherwise whatever [`find_config`] turns up. `Ok(None)` means built-in
/// defaults apply.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(Error::ConfigNotFound(path.to_path_buf())),
        None => Ok(find_config(cwd)),
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
