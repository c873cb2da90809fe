use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use git_hooks::hooks::{self, HookEnvironment, HookOutcome, HookType};
use git_hooks::logging;
use git_hooks::ui;
use git_hooks::warning::HookWarning;

/// Verifies that the commit message starts with a reference to an issue and a
/// conventional commit type, e.g. `T-5482/feat: Amazing new commit-msg hook`.
/// See https://www.conventionalcommits.org for details on conventional commits.
#[derive(clap::Parser)]
#[command(name = "commit-msg", version)]
struct Args {
    /// Path to the commit message file, as passed by git
    commit_msg_file: PathBuf,
}

fn main() -> Result<()> {
    logging::init_tracing();
    let args = Args::parse();

    let env = HookEnvironment::load(HookType::CommitMsg)?;

    let outcome = match hooks::commit_msg::run(&args.commit_msg_file, &env.grammar) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_warning(&HookWarning::MessageFileUnavailable {
                path: args.commit_msg_file.display().to_string(),
                reason: e.to_string(),
            });
            HookOutcome::Skipped
        }
    };

    process::exit(outcome.exit_code());
}
