//! Issue tracker abstraction used to enrich drafted commit messages
//!
//! The message preparer only depends on the [IssueTracker] trait, so the
//! network client can be swapped for [mock::MockTracker] in tests.
//!
//! - [linear::LinearClient]: GraphQL client for Linear
//! - [mock::MockTracker]: canned responses, no network

pub mod linear;
pub mod mock;

pub use linear::LinearClient;
pub use mock::MockTracker;

use thiserror::Error;

use crate::domain::IssueReference;

/// Title and description of an issue, trimmed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IssueSummary {
    pub title: String,
    pub description: String,
}

impl IssueSummary {
    pub fn new(title: Option<&str>, description: Option<&str>) -> Self {
        IssueSummary {
            title: title.map(str::trim).unwrap_or_default().to_string(),
            description: description.map(str::trim).unwrap_or_default().to_string(),
        }
    }
}

/// Everything that can go wrong while asking the tracker about an issue
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("{}", .messages.join("; "))]
    Api { messages: Vec<String> },

    #[error("Issue {0} not found")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl TrackerError {
    /// One line per reported problem, for the commented diagnostic block
    pub fn diagnostic_lines(&self) -> Vec<String> {
        match self {
            TrackerError::Api { messages } if !messages.is_empty() => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::InvalidResponse(err.to_string())
    }
}

/// A source of issue details, looked up by reference
pub trait IssueTracker {
    /// Display name used in diagnostics, e.g. "Linear"
    fn name(&self) -> &str;

    /// Fetch the title and description of an issue
    fn fetch_issue(&self, issue: &IssueReference) -> Result<IssueSummary, TrackerError>;
}
