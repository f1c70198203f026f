// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use flowgate::branch::BranchRules;
use flowgate::check::{CheckContext, PullRequest};
use flowgate::checks;
use flowgate::cli::{CheckArgs, Cli, OutputFormat};
use flowgate::color::resolve_color;
use flowgate::error::ExitCode;
use flowgate::git::{current_branch, is_git_repo};
use flowgate::output::ViolationLimit;
use flowgate::output::json::{self, JsonFormatter};
use flowgate::output::text::TextFormatter;

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let root = match &args.path {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => cwd.join(path),
        None => cwd,
    };

    let config = crate::load_config(cli, &root)?;
    let rules = BranchRules::with_overrides(&config.branches)?;

    let in_git_repo = is_git_repo(&root);
    let branch = match &args.name {
        Some(branch) => Some(branch.clone()),
        None if in_git_repo => current_branch(&root)?,
        None => None,
    };
    tracing::debug!("checking branch {:?} in {}", branch, root.display());

    let pull_request =
        PullRequest::from_refs(args.pr_source.as_deref(), args.pr_target.as_deref());

    let ctx = CheckContext {
        config: &config,
        rules: &rules,
        branch: branch.as_deref(),
        in_git_repo,
        pull_request: pull_request.as_ref(),
    };

    let checks = checks::filter_checks(&args.enabled_checks(), &args.disabled_checks());
    let results = checks::run_checks(&checks, &ctx);
    let output = json::create_output(branch, results);

    match args.output {
        OutputFormat::Text => {
            let limit = ViolationLimit::from_flags(args.limit, args.no_limit);
            let mut formatter =
                TextFormatter::new(resolve_color(args.color, args.no_color), limit);
            for result in &output.checks {
                if formatter.write_check(result)? {
                    break;
                }
            }
            formatter.write_truncation_message(output.total_violations())?;
            formatter.write_summary(&output)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout()).write(&output)?;
        }
    }

    Ok(ExitCode::from(output.passed))
}
