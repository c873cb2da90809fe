use thiserror::Error;

/// Unified error type for git-hooks operations
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid grammar: {0}")]
    Grammar(#[from] regex::Error),

    #[error("Malformed configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Commit message file error: {0}")]
    MessageFile(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-hooks
pub type Result<T> = std::result::Result<T, HookError>;

impl HookError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        HookError::Config(msg.into())
    }

    /// Create a commit message file error with context
    pub fn message_file(msg: impl Into<String>) -> Self {
        HookError::MessageFile(msg.into())
    }
}
