use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::domain::commit_type;
use crate::error::{HookError, Result};

/// Name of the configuration file looked up in the repository root and the user config dir.
pub const CONFIG_FILE_NAME: &str = ".githooks.toml";

/// Environment variable carrying the issue tracker API key.
pub const API_KEY_ENV: &str = "LINEAR_API_KEY";

/// Environment variable overriding the default commit type.
pub const DEFAULT_COMMIT_TYPE_ENV: &str = "DEFAULT_COMMIT_TYPE";

/// Represents the complete configuration for the hooks.
///
/// Contains the fallback commit type, the issue reference vocabulary and the issue tracker settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_commit_type")]
    pub default_commit_type: String,

    #[serde(default)]
    pub issues: IssuesConfig,

    #[serde(default)]
    pub tracker: TrackerConfig,
}

fn default_commit_type() -> String {
    "feat".to_string()
}

/// Returns the default list of team codes accepted in issue references.
fn default_team_codes() -> Vec<String> {
    vec![
        "T".to_string(),
        "KNA".to_string(),
        "CET".to_string(),
        "NOR".to_string(),
        "L2".to_string(),
    ]
}

fn default_generic_code_length() -> usize {
    3
}

fn default_max_digits() -> usize {
    5
}

/// Configuration for the issue reference grammar.
///
/// Team codes are matched in their upper or lower case form. Any purely alphabetic
/// code of `generic_code_length` letters is accepted as well; 0 disables that fallback.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IssuesConfig {
    #[serde(default = "default_team_codes")]
    pub team_codes: Vec<String>,

    #[serde(default = "default_generic_code_length")]
    pub generic_code_length: usize,

    #[serde(default = "default_max_digits")]
    pub max_digits: usize,
}

impl Default for IssuesConfig {
    fn default() -> Self {
        IssuesConfig {
            team_codes: default_team_codes(),
            generic_code_length: default_generic_code_length(),
            max_digits: default_max_digits(),
        }
    }
}

fn default_tracker_name() -> String {
    "Linear".to_string()
}

fn default_api_url() -> String {
    "https://api.linear.app/graphql".to_string()
}

/// Configuration for the issue tracker used to enrich drafted messages.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TrackerConfig {
    #[serde(default = "default_tracker_name")]
    pub name: String,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            name: default_tracker_name(),
            api_url: default_api_url(),
            timeout_secs: None,
            api_key: None,
        }
    }
}

impl TrackerConfig {
    /// Enrichment is only attempted with a non-blank API key
    pub fn is_enabled(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_commit_type: default_commit_type(),
            issues: IssuesConfig::default(),
            tracker: TrackerConfig::default(),
        }
    }
}

impl Config {
    /// Applies `LINEAR_API_KEY` and `DEFAULT_COMMIT_TYPE` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Applies overrides using the given variable lookup.
    ///
    /// Blank values are ignored. An unknown commit type is ignored with a
    /// warning, leaving the configured default in place.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
            self.tracker.api_key = Some(key.trim().to_string());
        }
        if let Some(commit_type) = lookup(DEFAULT_COMMIT_TYPE_ENV).filter(|v| !v.trim().is_empty())
        {
            let commit_type = commit_type.trim();
            if commit_type::is_known(commit_type) {
                self.default_commit_type = commit_type.to_string();
            } else {
                warn!(
                    "Ignoring {}='{}': not a known commit type, using '{}'",
                    DEFAULT_COMMIT_TYPE_ENV, commit_type, self.default_commit_type
                );
            }
        }
        self
    }

    /// Checks the values the grammar and the merger rely on.
    pub fn validate(&self) -> Result<()> {
        if !commit_type::is_known(&self.default_commit_type) {
            return Err(HookError::config(format!(
                "Unknown default commit type '{}'",
                self.default_commit_type
            )));
        }

        if self.issues.max_digits == 0 {
            return Err(HookError::config("issues.max_digits must be at least 1"));
        }

        if self.issues.team_codes.is_empty() && self.issues.generic_code_length == 0 {
            return Err(HookError::config(
                "No team codes configured and the generic code fallback is disabled",
            ));
        }

        for code in &self.issues.team_codes {
            if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(HookError::config(format!(
                    "Invalid team code '{}': expected letters and digits only",
                    code
                )));
            }
        }

        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `.githooks.toml` in current directory (the repository root when run by git)
/// 3. `.githooks.toml` in user config directory
/// 4. Default configuration if no file found
///
/// Environment overrides are not applied here; see [`Config::with_env_overrides`].
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let local_path = Path::new(".").join(CONFIG_FILE_NAME);
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if local_path.exists() {
        fs::read_to_string(local_path)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    config.validate()?;
    Ok(config)
}
