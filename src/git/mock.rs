use crate::error::{HookError, Result};
use crate::git::Repository;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    branch: Option<String>,
    fail_with: Option<String>,
}

impl MockRepository {
    /// HEAD attached to the given branch
    pub fn on_branch(branch: impl Into<String>) -> Self {
        MockRepository {
            branch: Some(branch.into()),
            fail_with: None,
        }
    }

    /// HEAD detached, as during a rebase
    pub fn detached() -> Self {
        MockRepository {
            branch: None,
            fail_with: None,
        }
    }

    /// Every lookup fails with the given git error message
    pub fn broken(message: impl Into<String>) -> Self {
        MockRepository {
            branch: None,
            fail_with: Some(message.into()),
        }
    }
}

impl Repository for MockRepository {
    fn current_branch(&self) -> Result<Option<String>> {
        match &self.fail_with {
            Some(message) => Err(HookError::Git(git2::Error::from_str(message))),
            None => Ok(self.branch.clone()),
        }
    }
}
