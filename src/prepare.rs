//! Drafting commit messages for the `prepare-commit-msg` hook.
//!
//! Fields are gathered from the branch name and from whatever title the
//! message file already has, the title winning over the branch. When git
//! opened an editor and nothing was typed yet, the issue tracker may replace
//! the title and supply a description.

use tracing::{debug, warn};

use crate::config::{Config, API_KEY_ENV};
use crate::domain::commit_type::commented_commit_types_doc;
use crate::domain::{BranchContext, DraftFields, TitleData};
use crate::grammar::Grammar;
use crate::tracker::{IssueTracker, TrackerError};
use crate::warning::HookWarning;

/// First line of the comment block git adds when it opens an editor
pub const EDITOR_PLACEHOLDER: &str = "# Please enter the commit message for your changes.";

/// The draft written back to the message file, plus anything worth telling the user
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedMessage {
    pub message: String,
    pub draft: DraftFields,
    pub warnings: Vec<HookWarning>,
}

/// Extracts and merges message fields, optionally consulting an issue tracker
pub struct MessagePreparer<'a> {
    grammar: &'a Grammar,
    default_commit_type: &'a str,
    tracker_name: &'a str,
    tracker: Option<&'a dyn IssueTracker>,
}

impl<'a> MessagePreparer<'a> {
    pub fn new(grammar: &'a Grammar, config: &'a Config) -> Self {
        MessagePreparer {
            grammar,
            default_commit_type: &config.default_commit_type,
            tracker_name: &config.tracker.name,
            tracker: None,
        }
    }

    /// Enable enrichment through the given tracker
    pub fn with_tracker(mut self, tracker: &'a dyn IssueTracker) -> Self {
        self.tracker = Some(tracker);
        self
    }

    pub fn grammar(&self) -> &Grammar {
        self.grammar
    }

    /// Build the final message from the raw file contents and the branch name.
    ///
    /// Never fails: a tracker error turns into a commented note in the body.
    pub fn prepare(&self, raw_message: &str, branch_name: &str) -> PreparedMessage {
        let edit_mode = raw_message.contains(EDITOR_PLACEHOLDER);
        let lines: Vec<&str> = raw_message.lines().collect();
        let (raw_title, body_lines) = match lines.split_first() {
            Some((first, rest)) if !first.starts_with('#') => (first.trim(), rest),
            _ => ("", lines.as_slice()),
        };

        let branch = BranchContext::parse(branch_name, self.grammar);
        let from_title = TitleData::parse(raw_title, self.grammar);
        debug!(?branch, ?from_title, edit_mode, "Extracted commit message fields");

        let issue = from_title.issue.or(branch.issue);
        let mut commit_type = from_title.commit_type.or(branch.commit_type);
        let mut title = if from_title.title.is_empty() {
            branch.title
        } else {
            from_title.title
        };

        let mut description = None;
        let mut notes = Vec::new();
        let mut warnings = Vec::new();

        if let Some(issue) = issue.as_ref().filter(|_| edit_mode && raw_title.is_empty()) {
            match self.tracker {
                Some(tracker) => match tracker.fetch_issue(issue) {
                    Ok(summary) => {
                        debug!(%issue, tracker = tracker.name(), "Enriching message from tracker");
                        let from_tracker = TitleData::parse(&summary.title, self.grammar);
                        if from_tracker.commit_type.is_some() {
                            commit_type = from_tracker.commit_type;
                        }
                        if !from_tracker.title.is_empty() {
                            title = from_tracker.title;
                        }
                        if !summary.description.is_empty() {
                            description = Some(summary.description);
                        }
                    }
                    Err(err) => {
                        warn!(%issue, tracker = tracker.name(), error = %err, "Issue lookup failed");
                        warnings.push(HookWarning::TrackerUnavailable {
                            tracker: tracker.name().to_string(),
                            issue: issue.to_string(),
                            reason: err.to_string(),
                        });
                        notes.push(diagnostic_block(tracker.name(), &err));
                    }
                },
                None => notes.push(setup_hint(self.tracker_name)),
            }
        }

        let (kept, verbose_tail) = split_at_scissors(body_lines);
        let original: Vec<&str> = kept
            .iter()
            .copied()
            .filter(|line| !line.contains(EDITOR_PLACEHOLDER))
            .collect();

        let mut sections = Vec::new();
        sections.extend(description);
        sections.push(trim_blank_lines(&original).join("\n"));
        sections.extend(notes);
        if edit_mode {
            sections.push(commented_commit_types_doc());
        }

        let mut body = sections
            .into_iter()
            .filter(|section| !section.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");
        if !verbose_tail.is_empty() {
            if !body.is_empty() {
                body.push('\n');
            }
            body.push_str(&verbose_tail.join("\n"));
        }

        let draft = DraftFields {
            issue,
            commit_type: commit_type.unwrap_or_else(|| self.default_commit_type.to_string()),
            title,
            body,
        };

        PreparedMessage {
            message: draft.render(),
            draft,
            warnings,
        }
    }
}

/// Commented block listing what the tracker reported
fn diagnostic_block(tracker: &str, err: &TrackerError) -> String {
    let mut lines = vec![
        format!("# Error fetching issue details from {}:", tracker),
        "#".to_string(),
    ];
    lines.extend(err.diagnostic_lines().iter().map(|line| format!("#\t{}", line)));
    lines.push("#".to_string());
    lines.join("\n")
}

/// Commented note explaining how to turn enrichment on
fn setup_hint(tracker: &str) -> String {
    [
        format!("# Use a {} API key to fetch the commit title and description:", tracker),
        "#".to_string(),
        "#\tTo populate the commit message with the title and description of the issue".to_string(),
        format!(
            "#\tdetected in the branch name, set the {} environment variable.",
            API_KEY_ENV
        ),
        "#".to_string(),
    ]
    .join("\n")
}

/// Split off git's `commit -v` scissors line and the diff below it
fn split_at_scissors<'l>(lines: &'l [&'l str]) -> (&'l [&'l str], &'l [&'l str]) {
    match lines
        .iter()
        .position(|line| line.starts_with("# ") && line.contains(" >8 "))
    {
        Some(index) => lines.split_at(index),
        None => (lines, &[]),
    }
}

fn trim_blank_lines<'l>(lines: &[&'l str]) -> Vec<&'l str> {
    let start = lines.iter().position(|l| !l.trim().is_empty());
    let end = lines.iter().rposition(|l| !l.trim().is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].to_vec(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_block_format() {
        let err = TrackerError::Api {
            messages: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(
            diagnostic_block("Linear", &err),
            "# Error fetching issue details from Linear:\n#\n#\tfirst\n#\tsecond\n#"
        );
    }

    #[test]
    fn test_setup_hint_names_env_var() {
        let hint = setup_hint("Linear");
        assert!(hint.lines().all(|l| l.starts_with('#')));
        assert!(hint.contains("LINEAR_API_KEY"));
    }

    #[test]
    fn test_split_at_scissors() {
        let lines = vec![
            "# comment",
            "# ------------------------ >8 ------------------------",
            "diff --git a/x b/x",
        ];
        let (kept, tail) = split_at_scissors(&lines);
        assert_eq!(kept, &["# comment"]);
        assert_eq!(tail.len(), 2);

        let lines = vec!["# comment"];
        let (kept, tail) = split_at_scissors(&lines);
        assert_eq!(kept.len(), 1);
        assert!(tail.is_empty());
    }

    #[test]
    fn test_trim_blank_lines() {
        assert_eq!(trim_blank_lines(&["", "a", "", "b", " "]), vec!["a", "", "b"]);
        assert!(trim_blank_lines(&["", "  "]).is_empty());
    }
}
