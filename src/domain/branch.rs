use crate::domain::IssueReference;
use crate::grammar::Grammar;

/// What a branch name tells us about the commit being prepared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
    pub issue: Option<IssueReference>,
    pub commit_type: Option<String>,
    pub title: String,
}

impl BranchContext {
    /// Extract the issue, commit type and title hints from a branch name.
    ///
    /// Supported shapes:
    /// - `prefix/ISSUE-title` - the prefix is mapped to a commit type when it starts with one
    /// - `ISSUE-title`
    /// - anything else, which becomes the title as a whole
    pub fn parse(name: &str, grammar: &Grammar) -> Self {
        if let Some(captures) = grammar.branch().captures(name) {
            let prefix = captures[1].to_lowercase();
            let commit_type = grammar
                .prefix()
                .captures(&prefix)
                .map(|c| c[1].to_string());

            return BranchContext {
                name: name.to_string(),
                issue: IssueReference::from_token(&captures[2]),
                commit_type,
                title: humanize(&captures[3]),
            };
        }

        if let Some(captures) = grammar.partial_branch().captures(name) {
            return BranchContext {
                name: name.to_string(),
                issue: IssueReference::from_token(&captures[1]),
                commit_type: None,
                title: humanize(&captures[2]),
            };
        }

        BranchContext {
            name: name.to_string(),
            issue: None,
            commit_type: None,
            title: humanize(name),
        }
    }
}

/// Turn a branch slug into title text: separators become spaces, the first
/// letter is upper case and the rest lower case.
pub fn humanize(slug: &str) -> String {
    let text = slug.replace(['-', '_'], " ");
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
