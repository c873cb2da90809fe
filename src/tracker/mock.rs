use std::cell::RefCell;

use crate::domain::IssueReference;
use crate::tracker::{IssueSummary, IssueTracker, TrackerError};

/// Mock tracker for testing without network access
pub struct MockTracker {
    name: String,
    response: Result<IssueSummary, Vec<String>>,
    requests: RefCell<Vec<String>>,
}

impl MockTracker {
    /// A tracker that answers every query with the given issue
    pub fn with_issue(title: &str, description: &str) -> Self {
        MockTracker {
            name: "Linear".to_string(),
            response: Ok(IssueSummary::new(Some(title), Some(description))),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// A tracker that fails every query with the given API error messages
    pub fn failing(messages: &[&str]) -> Self {
        MockTracker {
            name: "Linear".to_string(),
            response: Err(messages.iter().map(|m| m.to_string()).collect()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Issue references queried so far
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl IssueTracker for MockTracker {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch_issue(&self, issue: &IssueReference) -> Result<IssueSummary, TrackerError> {
        self.requests.borrow_mut().push(issue.to_string());
        match &self.response {
            Ok(summary) => Ok(summary.clone()),
            Err(messages) => Err(TrackerError::Api {
                messages: messages.clone(),
            }),
        }
    }
}
