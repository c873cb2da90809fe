pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod grammar;
pub mod hooks;
pub mod logging;
pub mod prepare;
pub mod tracker;
pub mod ui;
pub mod validator;
pub mod warning;

pub use error::{HookError, Result};
pub use grammar::Grammar;
pub use prepare::{MessagePreparer, PreparedMessage};
pub use validator::{validate, Verdict};
