//! User facing output of the hooks.
//!
//! - `formatter` - Printing and formatting functions
//! - This module - The texts shown by the `commit-msg` hook

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_accepted, display_rejection, display_success, display_warning, format_rejection,
};

/// Printed when a commit message passes validation.
pub const ACCEPTED: &str =
    "Commit message contains reference to an issue and a conventional commit type.";

/// First part of the rejection guidance.
pub const REJECTION_HELP: &str = "Commit message needs to be prefixed with a reference to an issue
and a conventional commit type, e.g.";

/// Example of a well-formed title line.
pub const REJECTION_EXAMPLE: &str = "T-5482/feat: Amazing new feature";
