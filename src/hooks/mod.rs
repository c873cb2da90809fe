//! Git hook entry points
//!
//! - commit-msg: rejects messages without an issue reference and commit type
//! - prepare-commit-msg: drafts the message from the branch name and the issue tracker
//!
//! Both return a [HookOutcome]; only a rejected message maps to a failing exit code.

pub mod commit_msg;
pub mod prepare_commit_msg;

use tracing::warn;

use crate::config::{self, Config};
use crate::error::Result;
use crate::grammar::Grammar;
use crate::ui;
use crate::warning::HookWarning;

/// Types of hooks provided by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookType {
    CommitMsg,
    PrepareCommitMsg,
}

impl HookType {
    /// Get the hook name as git knows it
    pub fn name(&self) -> &'static str {
        match self {
            HookType::CommitMsg => "commit-msg",
            HookType::PrepareCommitMsg => "prepare-commit-msg",
        }
    }
}

/// What a hook run did to the commit message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    /// The message is valid
    Accepted,
    /// The message is invalid and the commit must be aborted
    Rejected,
    /// Nothing could be done, e.g. HEAD is detached
    Skipped,
    /// The message was already valid and was left alone
    Unchanged,
    /// The message file was overwritten with a drafted message
    Rewritten,
}

impl HookOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            HookOutcome::Rejected => 1,
            _ => 0,
        }
    }
}

/// Configuration and compiled grammar shared by both hooks
#[derive(Debug, Clone)]
pub struct HookEnvironment {
    pub config: Config,
    pub grammar: Grammar,
}

impl HookEnvironment {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let grammar = Grammar::new(&config.issues)?;
        Ok(HookEnvironment { config, grammar })
    }

    /// Load config file and environment overrides.
    ///
    /// A broken configuration file never blocks a commit: it is reported and
    /// the built-in defaults are used instead. Environment overrides are
    /// applied on top either way.
    pub fn load(hook: HookType) -> Result<Self> {
        HookEnvironment::load_from(hook, None)
    }

    /// Same as [HookEnvironment::load] with an explicit configuration file
    pub fn load_from(hook: HookType, config_path: Option<&str>) -> Result<Self> {
        let config = config::load_config(config_path).unwrap_or_else(|err| {
            warn!(hook = hook.name(), error = %err, "Falling back to default configuration");
            ui::display_warning(&HookWarning::ConfigUnusable {
                reason: err.to_string(),
            });
            Config::default()
        });

        HookEnvironment::new(config.with_env_overrides())
    }
}
