use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{HookError, Result};
use crate::git::Repository;
use crate::hooks::HookOutcome;
use crate::prepare::MessagePreparer;
use crate::ui;
use crate::validator;
use crate::warning::HookWarning;

/// Resolve the branch the commit is made on, or `None` when there isn't one.
///
/// Lookup failures are reported but never abort the commit.
pub fn resolve_branch<R: Repository + ?Sized>(repo: &R) -> Option<String> {
    match repo.current_branch() {
        Ok(Some(branch)) => Some(branch),
        Ok(None) => {
            debug!("HEAD is detached, leaving the commit message alone");
            None
        }
        Err(err) => {
            debug!(error = %err, "Branch lookup failed");
            ui::display_warning(&HookWarning::BranchUnresolved {
                reason: err.to_string(),
            });
            None
        }
    }
}

/// Draft the commit message in `message_path` for the `prepare-commit-msg` hook.
///
/// The file is left untouched when there is no branch or when it already
/// holds a valid message; otherwise it is fully overwritten.
pub fn run(
    message_path: &Path,
    branch: Option<&str>,
    preparer: &MessagePreparer<'_>,
) -> Result<HookOutcome> {
    let Some(branch) = branch else {
        return Ok(HookOutcome::Skipped);
    };

    let raw_message = fs::read_to_string(message_path).map_err(|e| {
        HookError::message_file(format!("{}: {}", message_path.display(), e))
    })?;

    if validator::validate(&raw_message, preparer.grammar()).is_accepted() {
        debug!("Commit message is already valid");
        return Ok(HookOutcome::Unchanged);
    }

    let prepared = preparer.prepare(&raw_message, branch);
    for warning in &prepared.warnings {
        ui::display_warning(warning);
    }

    fs::write(message_path, &prepared.message).map_err(|e| {
        HookError::message_file(format!("{}: {}", message_path.display(), e))
    })?;
    info!(title = %prepared.draft.title_line(), "Commit message drafted");

    Ok(HookOutcome::Rewritten)
}
