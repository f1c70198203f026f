// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::branch::ReleaseKind;
use crate::output::DEFAULT_LIMIT;

/// Branch and version syntax gate for GitFlow-style repositories
#[derive(Debug, Parser)]
#[command(name = "flowgate")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "FLOWGATE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run branch status checks
    Check(CheckArgs),
    /// Test a string against a branch or version pattern
    Match(MatchArgs),
    /// Show which kind of branch a branch name is
    Classify(ClassifyArgs),
    /// Validate a version string for a release kind
    Version(VersionArgs),
    /// List every branch kind and its syntax
    Branches,
    /// Print a shell completion script
    Completions(CompletionsArgs),
}

#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Project directory (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Branch name to validate instead of the checked-out branch
    #[arg(long, value_name = "BRANCH")]
    pub name: Option<String>,

    /// Pull request source branch
    #[arg(long, value_name = "REF", env = "GITHUB_HEAD_REF")]
    pub pr_source: Option<String>,

    /// Pull request target branch (enables the pull-request check)
    #[arg(long, value_name = "REF", env = "GITHUB_BASE_REF")]
    pub pr_target: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Maximum violations to display
    #[arg(long, default_value_t = DEFAULT_LIMIT, value_name = "N")]
    pub limit: usize,

    /// Show all violations (no limit)
    #[arg(long)]
    pub no_limit: bool,

    // Check enable flags (run only these checks)
    /// Run only the branch check
    #[arg(long)]
    pub branch: bool,

    /// Run only the pull-request check
    #[arg(long)]
    pub pull_request: bool,

    // Check disable flags (skip these checks)
    /// Skip the branch check
    #[arg(long)]
    pub no_branch: bool,

    /// Skip the pull-request check
    #[arg(long)]
    pub no_pull_request: bool,
}

/// Collect check names from boolean flags.
macro_rules! collect_checks {
    ($self:expr, $($flag:ident => $name:expr),+ $(,)?) => {{
        let mut checks = Vec::new();
        $(
            if $self.$flag {
                checks.push($name.to_string());
            }
        )+
        checks
    }};
}

impl CheckArgs {
    /// Get list of explicitly enabled checks.
    pub fn enabled_checks(&self) -> Vec<String> {
        collect_checks!(self,
            branch => "branch",
            pull_request => "pull-request",
        )
    }

    /// Get list of explicitly disabled checks.
    pub fn disabled_checks(&self) -> Vec<String> {
        collect_checks!(self,
            no_branch => "branch",
            no_pull_request => "pull-request",
        )
    }
}

#[derive(Debug, clap::Args)]
pub struct MatchArgs {
    /// Branch name or version to test
    pub candidate: String,

    /// Pattern using `#` (digits) and `*` (anything); omitted means empty
    pub pattern: Option<String>,

    /// Print nothing, report through the exit code only
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, clap::Args)]
pub struct ClassifyArgs {
    /// Branch name to classify
    pub branch: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Debug, clap::Args)]
pub struct VersionArgs {
    /// Version string, with or without a leading `v`
    #[arg(value_name = "VERSION")]
    pub candidate: String,

    /// Release kind the version is for
    #[arg(short, long, default_value = "production")]
    pub release: ReleaseKind,
}

#[derive(Debug, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
