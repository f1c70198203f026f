// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable names and lookups.

/// Generated constants, one per variable flowgate reads.
pub mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

/// True if the variable is set, to any value (including empty).
pub fn is_set(name: &str) -> bool {
    std::env::var_os(name).is_some()
}

/// True if running under CI or an AI agent.
pub fn is_agent_environment() -> bool {
    [names::CLAUDE_CODE, names::CODEX, names::CURSOR, names::CI]
        .into_iter()
        .any(is_set)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
