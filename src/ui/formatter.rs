//! Formatting functions for hook output.
//!
//! Colours come from `console`, which drops them when the stream is not a terminal.

use console::style;

use crate::domain::commit_type::commit_types_doc;
use crate::ui::{ACCEPTED, REJECTION_EXAMPLE, REJECTION_HELP};
use crate::warning::HookWarning;

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Display a non-fatal hook warning with a yellow marker.
pub fn display_warning(warning: &HookWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the confirmation printed when a message passes validation.
pub fn display_accepted() {
    display_success(ACCEPTED);
}

/// Guidance shown when a commit message is rejected: what is expected,
/// an example, and the table of commit types.
pub fn format_rejection() -> String {
    format!(
        "{}\n\n    {}\n\n{}",
        style(REJECTION_HELP).red(),
        REJECTION_EXAMPLE,
        commit_types_doc()
    )
}

/// Print the rejection guidance.
pub fn display_rejection() {
    println!("{}", format_rejection());
}
