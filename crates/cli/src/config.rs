// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles flowgate.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::branch::BranchKind;
use crate::checks::CHECK_NAMES;
use crate::error::{Error, Result};

/// Supported config file version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys.
const KNOWN_KEYS: &[&str] = &["version", "branches", "check"];

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    branches: Option<toml::Value>,

    #[serde(default)]
    check: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Branch syntax overrides.
    pub branches: BranchesConfig,

    /// Per-check settings.
    pub check: CheckConfig,
}

/// Branch syntax overrides keyed by branch kind.
#[derive(Debug, Default, Clone)]
pub struct BranchesConfig {
    pub patterns: BTreeMap<BranchKind, String>,
}

/// Per-check levels, keyed by check name.
#[derive(Debug, Default, Clone)]
pub struct CheckConfig {
    levels: BTreeMap<String, CheckLevel>,
}

impl CheckConfig {
    /// Level for a check (default: error).
    pub fn level(&self, name: &str) -> CheckLevel {
        self.levels.get(name).copied().unwrap_or_default()
    }

    /// Override the level for a check.
    pub fn set_level(&mut self, name: impl Into<String>, level: CheckLevel) {
        self.levels.insert(name.into(), level);
    }
}

/// Check level: error, warn, or off.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    #[default]
    Error,
    Warn,
    Off,
}

/// Load and parse a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config content, warning about unrecognized fields.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if flexible.version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                flexible.version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let branches = parse_branches(flexible.branches.as_ref(), path)?;
    let check = parse_checks(flexible.check.as_ref(), path)?;

    Ok(Config {
        version: flexible.version,
        branches,
        check,
    })
}

fn parse_branches(value: Option<&toml::Value>, path: &Path) -> Result<BranchesConfig> {
    let Some(value) = value else {
        return Ok(BranchesConfig::default());
    };
    let table = value
        .as_table()
        .ok_or_else(|| invalid(path, "branches must be a table"))?;

    let mut patterns = BTreeMap::new();
    for (key, value) in table {
        let Some(kind) = BranchKind::from_key(key) else {
            warn_unknown_key(path, &format!("branches.{}", key));
            continue;
        };
        let pattern = value
            .as_str()
            .ok_or_else(|| invalid(path, &format!("branches.{} must be a string", key)))?;
        tracing::debug!("branch syntax override: {} = {:?}", key, pattern);
        patterns.insert(kind, pattern.to_string());
    }

    Ok(BranchesConfig { patterns })
}

fn parse_checks(value: Option<&toml::Value>, path: &Path) -> Result<CheckConfig> {
    let Some(value) = value else {
        return Ok(CheckConfig::default());
    };
    let table = value
        .as_table()
        .ok_or_else(|| invalid(path, "check must be a table"))?;

    let mut config = CheckConfig::default();
    for (name, value) in table {
        if !CHECK_NAMES.contains(&name.as_str()) {
            warn_unknown_key(path, &format!("check.{}", name));
            continue;
        }
        let Some(section) = value.as_table() else {
            return Err(invalid(path, &format!("check.{} must be a table", name)));
        };
        for key in section.keys() {
            if key != "check" {
                warn_unknown_key(path, &format!("check.{}.{}", name, key));
            }
        }
        if let Some(level) = section.get("check") {
            config.set_level(name.as_str(), parse_check_level(level, name, path)?);
        }
    }

    Ok(config)
}

fn parse_check_level(value: &toml::Value, name: &str, path: &Path) -> Result<CheckLevel> {
    match value.as_str() {
        Some("error") => Ok(CheckLevel::Error),
        Some("warn") => Ok(CheckLevel::Warn),
        Some("off") => Ok(CheckLevel::Off),
        _ => Err(invalid(
            path,
            &format!("check.{}.check must be one of: error, warn, off", name),
        )),
    }
}

fn invalid(path: &Path, message: &str) -> Error {
    Error::Config {
        message: message.to_string(),
        path: Some(path.to_path_buf()),
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "flowgate: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
