use crate::domain::IssueReference;
use crate::grammar::Grammar;

/// Structure found in the title line of an existing commit message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleData {
    pub issue: Option<IssueReference>,
    pub commit_type: Option<String>,
    pub title: String,
}

impl TitleData {
    /// Peel an optional `ISSUE/` prefix and then an optional `type[!]:` prefix off a title line.
    pub fn parse(line: &str, grammar: &Grammar) -> Self {
        let mut rest = line;
        let mut issue = None;
        let mut commit_type = None;

        if let Some(captures) = grammar.title_with_issue().captures(rest) {
            issue = IssueReference::from_token(&captures[1]);
            rest = captures.get(2).map_or("", |m| m.as_str());
        }

        if let Some(captures) = grammar.title().captures(rest) {
            commit_type = Some(captures[1].to_string());
            rest = captures.get(2).map_or("", |m| m.as_str());
        }

        TitleData {
            issue,
            commit_type,
            title: rest.to_string(),
        }
    }
}

/// The merged draft that gets written back to the commit message file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftFields {
    pub issue: Option<IssueReference>,
    pub commit_type: String,
    pub title: String,
    pub body: String,
}

impl DraftFields {
    /// `ISSUE/type: title`, or `type: title` when no issue is known
    pub fn title_line(&self) -> String {
        let line = format!("{}: {}", self.commit_type, self.title);
        match &self.issue {
            Some(issue) => format!("{}/{}", issue, line),
            None => line,
        }
    }

    pub fn render(&self) -> String {
        if self.body.is_empty() {
            self.title_line()
        } else {
            format!("{}\n\n{}", self.title_line(), self.body)
        }
    }
}
