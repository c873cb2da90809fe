//! Git operations abstraction layer
//!
//! The hooks need exactly one thing from git: the name of the branch HEAD
//! points at. It is exposed through the [Repository] trait so hook logic can
//! be tested without a repository on disk.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Common git operation trait for abstraction
pub trait Repository {
    /// Short name of the branch HEAD is attached to
    ///
    /// Behaves like `git symbolic-ref --short HEAD`: an unborn branch still has
    /// a name, while a detached HEAD (rebase, bisect, checkout of a commit)
    /// yields `Ok(None)`.
    fn current_branch(&self) -> Result<Option<String>>;
}
