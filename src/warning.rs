use std::fmt;

/// Non-fatal problems met while running a hook.
/// The commit always proceeds; these are reported to the user and logged.
#[derive(Debug, Clone, PartialEq)]
pub enum HookWarning {
    /// HEAD is detached or the repository could not be inspected
    BranchUnresolved { reason: String },
    /// The configuration file or environment overrides could not be used
    ConfigUnusable { reason: String },
    /// The commit message file could not be read or written
    MessageFileUnavailable { path: String, reason: String },
    /// The issue tracker could not provide details for an issue
    TrackerUnavailable {
        tracker: String,
        issue: String,
        reason: String,
    },
}

impl fmt::Display for HookWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookWarning::BranchUnresolved { reason } => {
                write!(f, "Cannot determine the current branch: {}", reason)
            }
            HookWarning::ConfigUnusable { reason } => {
                write!(f, "Ignoring configuration, using defaults: {}", reason)
            }
            HookWarning::MessageFileUnavailable { path, reason } => {
                write!(f, "Cannot access commit message file '{}': {}", path, reason)
            }
            HookWarning::TrackerUnavailable {
                tracker,
                issue,
                reason,
            } => {
                write!(
                    f,
                    "Could not fetch {} from {}: {}",
                    issue, tracker, reason
                )
            }
        }
    }
}
