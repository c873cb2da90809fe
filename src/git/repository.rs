use crate::error::Result;
use git2::Repository as Git2Repo;
use std::path::Path;

const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Open the repository the way git commands do, honouring `GIT_DIR`
    /// and friends, which git sets while running hooks
    pub fn from_env() -> Result<Self> {
        let repo = Git2Repo::open_from_env()?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn current_branch(&self) -> Result<Option<String>> {
        let head = self.repo.find_reference("HEAD")?;

        Ok(head
            .symbolic_target()
            .and_then(|target| target.strip_prefix(BRANCH_REF_PREFIX))
            .map(|name| name.to_string()))
    }
}
