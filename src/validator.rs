//! Commit message validation used by the `commit-msg` hook.
//!
//! A message is accepted when it starts with `ISSUE/type[!]: `, or with one
//! of the git generated prefixes `Merge `, `Revert ` and `Bump version `.
//! Only the start of the text is checked, so bodies are never inspected.

use crate::grammar::Grammar;

/// Outcome of validating a commit message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject,
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        self == Verdict::Accept
    }

    /// 0 lets the commit proceed, 1 aborts it
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Accept => 0,
            Verdict::Reject => 1,
        }
    }
}

pub fn validate(message: &str, grammar: &Grammar) -> Verdict {
    if grammar.valid_message().is_match(message) {
        Verdict::Accept
    } else {
        Verdict::Reject
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IssuesConfig;

    fn check(message: &str) -> Verdict {
        validate(message, &Grammar::new(&IssuesConfig::default()).unwrap())
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(check("T-5482/feat: Amazing new feature").exit_code(), 0);
        assert_eq!(check("feat: Amazing new feature").exit_code(), 1);
        assert_eq!(check("X-5482/feat: Amazing new feature").exit_code(), 1);
        assert_eq!(check("X-5482/Amazing new feature").exit_code(), 1);
    }

    #[test]
    fn test_only_the_start_is_checked() {
        assert!(check("T-5482/fix: Title\n\nanything goes here").is_accepted());
        assert!(!check("Title\n\nT-5482/fix: buried in the body").is_accepted());
    }

    #[test]
    fn test_empty_message_rejected() {
        assert_eq!(check(""), Verdict::Reject);
    }
}
