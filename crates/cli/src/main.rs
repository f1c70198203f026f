// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flowgate CLI entry point.

use std::path::Path;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use flowgate::cli::{Cli, Command};
use flowgate::config::{self, Config};
use flowgate::discovery;
use flowgate::env::names;
use flowgate::error::ExitCode;

mod cmd_check;
mod cmd_inspect;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(names::FLOWGATE_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("flowgate: {}", e);
            match e.downcast_ref::<flowgate::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Check(args)) => cmd_check::run(&cli, args),
        Some(Command::Match(args)) => cmd_inspect::run_match(args),
        Some(Command::Classify(args)) => cmd_inspect::run_classify(&cli, args),
        Some(Command::Version(args)) => cmd_inspect::run_version(&cli, args),
        Some(Command::Branches) => cmd_inspect::run_branches(&cli),
        Some(Command::Completions(args)) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "flowgate", &mut std::io::stdout());
            Ok(ExitCode::Success)
        }
    }
}

/// Load the config named on the command line, or discovered from `root`.
pub(crate) fn load_config(cli: &Cli, root: &Path) -> flowgate::Result<Config> {
    match discovery::resolve_config(cli.config.as_deref(), root)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load(&path)
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Ok(Config::default())
        }
    }
}
