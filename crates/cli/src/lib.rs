pub mod branch;
pub mod check;
pub mod checks;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod env;
pub mod error;
pub mod git;
pub mod output;
pub mod pattern;

pub use branch::{BranchKind, BranchRules, ReleaseKind};
pub use check::{Check, CheckContext, CheckOutput, CheckResult, Violation};
pub use cli::{CheckArgs, Cli, Command, OutputFormat};
pub use error::{Error, ExitCode, Result};
pub use pattern::{GlobPattern, matches};
