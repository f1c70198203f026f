// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-value commands: match, classify, version, branches.

use std::io::Write;

use serde::Serialize;
use termcolor::{StandardStream, WriteColor};

use flowgate::branch::{
    BranchKind, BranchRules, ReleaseKind, branch_version, is_preview_version, issue_number,
    version_core,
};
use flowgate::cli::{ClassifyArgs, Cli, MatchArgs, OutputFormat, VersionArgs};
use flowgate::color::{resolve_color, scheme};
use flowgate::error::ExitCode;
use flowgate::pattern::matches;

/// Run the match command.
pub fn run_match(args: &MatchArgs) -> anyhow::Result<ExitCode> {
    let matched = matches(&args.candidate, args.pattern.as_deref());
    tracing::debug!(
        "match {:?} against {:?}: {}",
        args.candidate,
        args.pattern,
        matched
    );

    if !args.quiet {
        let mut out = stdout();
        if matched {
            write_status(&mut out, "match", &scheme::pass())?;
        } else {
            write_status(&mut out, "no match", &scheme::fail())?;
        }
    }

    Ok(ExitCode::from(matched))
}

/// Classification result for JSON output.
#[derive(Serialize)]
struct Classification<'a> {
    branch: &'a str,
    kind: Option<BranchKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    issue: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
}

/// Run the classify command.
pub fn run_classify(cli: &Cli, args: &ClassifyArgs) -> anyhow::Result<ExitCode> {
    let rules = load_rules(cli)?;
    let kind = rules.classify(&args.branch);
    let classification = Classification {
        branch: &args.branch,
        kind,
        issue: kind
            .filter(|k| k.carries_issue_number())
            .and_then(|_| issue_number(&args.branch)),
        version: kind
            .filter(|k| k.carries_version())
            .and_then(|_| branch_version(&args.branch)),
    };

    match args.output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&classification)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            let mut out = stdout();
            match kind {
                Some(kind) => {
                    write_status(&mut out, kind.key(), &scheme::pass())?;
                    if let Some(issue) = classification.issue {
                        writeln!(out, "  issue: {}", issue)?;
                    }
                    if let Some(version) = classification.version {
                        writeln!(out, "  version: {}", version)?;
                    }
                }
                None => {
                    write_status(&mut out, "unknown", &scheme::fail())?;
                    writeln!(out, "  '{}' does not follow any branch syntax", args.branch)?;
                }
            }
        }
    }

    Ok(ExitCode::from(kind.is_some()))
}

/// Run the version command.
pub fn run_version(cli: &Cli, args: &VersionArgs) -> anyhow::Result<ExitCode> {
    let rules = load_rules(cli)?;
    let version = args.candidate.strip_prefix('v').unwrap_or(&args.candidate);
    let valid = args.release.is_valid_version(version);

    let mut out = stdout();
    if valid {
        write_status(&mut out, "valid", &scheme::pass())?;
        writeln!(out, "  core: {}", version_core(version))?;
        writeln!(
            out,
            "  branch: {}",
            rules.pattern(args.release.branch_kind())
        )?;
    } else {
        write_status(&mut out, "invalid", &scheme::fail())?;
        writeln!(
            out,
            "  {} release versions must follow '{}'",
            args.release,
            args.release.version_pattern()
        )?;
        if args.release == ReleaseKind::Production && is_preview_version(version) {
            writeln!(
                out,
                "  '{}' is a preview version, pass --release preview",
                args.candidate
            )?;
        }
    }

    Ok(ExitCode::from(valid))
}

/// Run the branches command.
pub fn run_branches(cli: &Cli) -> anyhow::Result<ExitCode> {
    let rules = load_rules(cli)?;
    let mut out = stdout();

    writeln!(out, "Valid branches:")?;
    for (kind, syntax) in rules.syntaxes() {
        write!(out, "  ")?;
        out.set_color(&scheme::check_name())?;
        write!(out, "{:<16}", kind.key())?;
        out.reset()?;
        writeln!(out, "{}", syntax)?;
    }

    Ok(ExitCode::Success)
}

fn load_rules(cli: &Cli) -> anyhow::Result<BranchRules> {
    let cwd = std::env::current_dir()?;
    let config = crate::load_config(cli, &cwd)?;
    Ok(BranchRules::with_overrides(&config.branches)?)
}

fn stdout() -> StandardStream {
    StandardStream::stdout(resolve_color(false, false))
}

fn write_status(
    out: &mut StandardStream,
    status: &str,
    color: &termcolor::ColorSpec,
) -> std::io::Result<()> {
    out.set_color(color)?;
    write!(out, "{}", status)?;
    out.reset()?;
    writeln!(out)
}
