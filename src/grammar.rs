//! Regex grammar shared by the validator and the message preparer.
//!
//! Every composite pattern is assembled from two named fragments, the issue
//! reference and the commit type alternation, so both hooks always agree on
//! what a reference or a type looks like.

use regex::Regex;

use crate::config::IssuesConfig;
use crate::domain::commit_type;
use crate::error::Result;

/// Non-capturing fragment matching an issue reference such as `CET-123`.
///
/// Each configured team code is accepted in upper or lower case. When
/// `generic_code_length` is non-zero, any alphabetic code of that length is
/// accepted too.
pub fn issue_reference_fragment(issues: &IssuesConfig) -> String {
    let mut codes: Vec<String> = Vec::new();
    for code in &issues.team_codes {
        for variant in [code.to_uppercase(), code.to_lowercase()] {
            let escaped = regex::escape(&variant);
            if !codes.contains(&escaped) {
                codes.push(escaped);
            }
        }
    }
    if issues.generic_code_length > 0 {
        codes.push(format!("[a-zA-Z]{{{}}}", issues.generic_code_length));
    }
    format!("(?:{})-[0-9]{{1,{}}}", codes.join("|"), issues.max_digits)
}

/// Non-capturing alternation over the commit type keys, without the `!` marker.
pub fn commit_type_fragment() -> String {
    format!("(?:{})", commit_type::base_keys().join("|"))
}

/// Compiled patterns, built once per process from the issue configuration
#[derive(Debug, Clone)]
pub struct Grammar {
    issue_reference: Regex,
    valid_message: Regex,
    branch: Regex,
    partial_branch: Regex,
    title: Regex,
    title_with_issue: Regex,
    prefix: Regex,
}

impl Grammar {
    pub fn new(issues: &IssuesConfig) -> Result<Self> {
        let issue = issue_reference_fragment(issues);
        let commit_type = commit_type_fragment();

        Ok(Grammar {
            issue_reference: Regex::new(&format!("^{issue}$"))?,
            valid_message: Regex::new(&format!(
                "^(?:{issue}/{commit_type}!?: |Merge .+|Revert .+|Bump version .+)"
            ))?,
            branch: Regex::new(&format!("^(.*)/({issue})[-_](.*)"))?,
            partial_branch: Regex::new(&format!("^({issue})[-_](.*)"))?,
            title: Regex::new(&format!(r"^({commit_type}!?)(?::\s?|\s)(.*)"))?,
            title_with_issue: Regex::new(&format!("^({issue})/(.*)"))?,
            prefix: Regex::new(&format!("^({commit_type})"))?,
        })
    }

    /// Whole-string issue reference, e.g. `CET-123`
    pub fn issue_reference(&self) -> &Regex {
        &self.issue_reference
    }

    /// `ISSUE/type[!]: ` or one of the `Merge `, `Revert `, `Bump version ` exemptions
    pub fn valid_message(&self) -> &Regex {
        &self.valid_message
    }

    /// `prefix/ISSUE[-_]rest`, captures prefix, issue and rest
    pub fn branch(&self) -> &Regex {
        &self.branch
    }

    /// `ISSUE[-_]rest`, captures issue and rest
    pub fn partial_branch(&self) -> &Regex {
        &self.partial_branch
    }

    /// `type[!][:] rest`, captures type and rest
    pub fn title(&self) -> &Regex {
        &self.title
    }

    /// `ISSUE/rest`, captures issue and rest
    pub fn title_with_issue(&self) -> &Regex {
        &self.title_with_issue
    }

    /// Leading commit type of a branch prefix
    pub fn prefix(&self) -> &Regex {
        &self.prefix
    }
}
