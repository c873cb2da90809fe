use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{HookError, Result};
use crate::grammar::Grammar;
use crate::hooks::HookOutcome;
use crate::ui;
use crate::validator::{self, Verdict};

/// Validate the message file git hands to the `commit-msg` hook.
///
/// Prints the confirmation or the rejection guidance; the caller turns the
/// outcome into the process exit code.
pub fn run(message_path: &Path, grammar: &Grammar) -> Result<HookOutcome> {
    let message = fs::read_to_string(message_path).map_err(|e| {
        HookError::message_file(format!("{}: {}", message_path.display(), e))
    })?;

    let verdict = validator::validate(&message, grammar);
    debug!(?verdict, "Validated commit message");

    match verdict {
        Verdict::Accept => {
            ui::display_accepted();
            Ok(HookOutcome::Accepted)
        }
        Verdict::Reject => {
            ui::display_rejection();
            Ok(HookOutcome::Rejected)
        }
    }
}
