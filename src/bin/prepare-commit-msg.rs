use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use git_hooks::git::Git2Repository;
use git_hooks::hooks::prepare_commit_msg::{self, resolve_branch};
use git_hooks::hooks::{HookEnvironment, HookType};
use git_hooks::logging;
use git_hooks::tracker::LinearClient;
use git_hooks::ui;
use git_hooks::warning::HookWarning;
use git_hooks::MessagePreparer;

/// Prepares a commit message containing a reference to an issue and a conventional
/// commit type, derived from the branch name. If LINEAR_API_KEY is set, the issue
/// title and description are fetched from Linear. DEFAULT_COMMIT_TYPE sets the
/// commit type used when none is detected (defaults to "feat").
#[derive(clap::Parser)]
#[command(name = "prepare-commit-msg", version)]
struct Args {
    /// Path to the commit message file, as passed by git
    commit_msg_file: PathBuf,

    /// Source of the message (message, template, merge, squash or commit)
    source: Option<String>,

    /// Commit SHA, given when amending
    commit_sha: Option<String>,
}

fn main() -> Result<()> {
    logging::init_tracing();
    let args = Args::parse();
    debug!(source = ?args.source, sha = ?args.commit_sha, "prepare-commit-msg invoked");

    let branch = match Git2Repository::from_env() {
        Ok(repo) => resolve_branch(&repo),
        Err(e) => {
            debug!(error = %e, "Not inside a git repository");
            None
        }
    };

    let env = HookEnvironment::load(HookType::PrepareCommitMsg)?;
    let tracker = LinearClient::from_config(&env.config.tracker);

    let mut preparer = MessagePreparer::new(&env.grammar, &env.config);
    if let Some(tracker) = tracker.as_ref() {
        preparer = preparer.with_tracker(tracker);
    }

    if let Err(e) = prepare_commit_msg::run(&args.commit_msg_file, branch.as_deref(), &preparer) {
        ui::display_warning(&HookWarning::MessageFileUnavailable {
            path: args.commit_msg_file.display().to_string(),
            reason: e.to_string(),
        });
    }

    Ok(())
}
