//! Domain logic - pure extraction and rendering rules independent of git and the tracker

pub mod branch;
pub mod commit_type;
pub mod issue;
pub mod message;

pub use branch::BranchContext;
pub use commit_type::{CommitType, COMMIT_TYPES};
pub use issue::IssueReference;
pub use message::{DraftFields, TitleData};
