// tests/prepare_test.rs
use git_hooks::config::{Config, API_KEY_ENV};
use git_hooks::tracker::MockTracker;
use git_hooks::warning::HookWarning;
use git_hooks::{validate, Grammar, MessagePreparer};

const EDITOR_TEMPLATE: &str = "
# Please enter the commit message for your changes. Lines starting
# with '#' will be ignored, and an empty message aborts the commit.
#
# On branch feat/cet-123-branch-title
";

fn setup(config: &Config) -> Grammar {
    Grammar::new(&config.issues).unwrap()
}

#[test]
fn test_draft_from_branch_with_prefix() {
    let config = Config::default();
    let grammar = setup(&config);
    let preparer = MessagePreparer::new(&grammar, &config);

    let prepared = preparer.prepare("", "feat/cet-123-branch-title");
    assert_eq!(prepared.message, "CET-123/feat: Branch title");
    assert!(prepared.warnings.is_empty());
}

#[test]
fn test_draft_without_prefix_uses_default_type() {
    let config = Config::default();
    let grammar = setup(&config);
    let preparer = MessagePreparer::new(&grammar, &config);

    let prepared = preparer.prepare("", "cet-123-branch-title");
    assert_eq!(prepared.message, "CET-123/feat: Branch title");
}

#[test]
fn test_draft_without_issue_reference() {
    let config = Config::default();
    let grammar = setup(&config);
    let preparer = MessagePreparer::new(&grammar, &config);

    let prepared = preparer.prepare("", "branch-title");
    assert_eq!(prepared.message, "feat: Branch title");
    assert!(prepared.draft.issue.is_none());
}

#[test]
fn test_configured_default_commit_type() {
    let mut config = Config::default();
    config.default_commit_type = "fix".to_string();
    let grammar = setup(&config);
    let preparer = MessagePreparer::new(&grammar, &config);

    assert_eq!(
        preparer.prepare("", "cet-9-broken-login").message,
        "CET-9/fix: Broken login"
    );
}

#[test]
fn test_unknown_branch_prefix_falls_back_to_default() {
    let config = Config::default();
    let grammar = setup(&config);
    let preparer = MessagePreparer::new(&grammar, &config);

    let prepared = preparer.prepare("", "brtkwr/abc-281-some-work");
    assert_eq!(prepared.message, "ABC-281/feat: Some work");
}

#[test]
fn test_typed_title_wins_over_branch() {
    let config = Config::default();
    let grammar = setup(&config);
    let preparer = MessagePreparer::new(&grammar, &config);

    let prepared = preparer.prepare("kna-7/fix: typed title\n", "feat/cet-123-branch-title");
    assert_eq!(prepared.message, "KNA-7/fix: typed title");
}

#[test]
fn test_plain_typed_title_gets_branch_fields() {
    let config = Config::default();
    let grammar = setup(&config);
    let preparer = MessagePreparer::new(&grammar, &config);

    let prepared = preparer.prepare("Handle empty input\n", "fix/T-42-parser");
    assert_eq!(prepared.message, "T-42/fix: Handle empty input");
}

#[test]
fn test_typed_type_without_issue_keeps_branch_issue() {
    let config = Config::default();
    let grammar = setup(&config);
    let preparer = MessagePreparer::new(&grammar, &config);

    let prepared = preparer.prepare("docs: explain hooks\n\nLonger body.\n", "feat/nor-88-hooks");
    assert_eq!(prepared.message, "NOR-88/docs: explain hooks\n\nLonger body.");
}

#[test]
fn test_prepared_message_passes_validation() {
    let config = Config::default();
    let grammar = setup(&config);
    let preparer = MessagePreparer::new(&grammar, &config);

    for branch in [
        "feat/cet-123-branch-title",
        "cet-123-branch-title",
        "hotfix/KNA-1234_fix_prod",
        "someone/l2-5-thing",
    ] {
        let prepared = preparer.prepare("", branch);
        assert!(
            validate(&prepared.message, &grammar).is_accepted(),
            "draft for {} was rejected: {:?}",
            branch,
            prepared.message
        );
    }
}

#[test]
fn test_preparing_twice_is_stable() {
    let config = Config::default();
    let grammar = setup(&config);
    let preparer = MessagePreparer::new(&grammar, &config);

    let first = preparer.prepare("", "feat/cet-123-branch-title");
    let second = preparer.prepare(&first.message, "feat/cet-123-branch-title");
    assert_eq!(first.message, second.message);
}

#[test]
fn test_editor_template_without_tracker_adds_setup_hint() {
    let config = Config::default();
    let grammar = setup(&config);
    let preparer = MessagePreparer::new(&grammar, &config);

    let prepared = preparer.prepare(EDITOR_TEMPLATE, "feat/cet-123-branch-title");
    let message = prepared.message;

    assert!(message.starts_with("CET-123/feat: Branch title\n\n"));
    assert!(!message.contains("Please enter the commit message"));
    assert!(message.contains("# On branch feat/cet-123-branch-title"));
    assert!(message.contains(API_KEY_ENV));
    assert!(message.contains("# Valid conventional commit types are:"));
    assert!(message.contains("#\tfeat"));
}

#[test]
fn test_editor_template_is_enriched_from_tracker() {
    let config = Config::default();
    let grammar = setup(&config);
    let tracker = MockTracker::with_issue("Fetched title", "What the issue is about.");
    let preparer = MessagePreparer::new(&grammar, &config).with_tracker(&tracker);

    let prepared = preparer.prepare(EDITOR_TEMPLATE, "feat/cet-123-branch-title");

    assert_eq!(tracker.requests(), vec!["CET-123".to_string()]);
    assert!(prepared
        .message
        .starts_with("CET-123/feat: Fetched title\n\nWhat the issue is about.\n\n"));
    assert!(!prepared.message.contains(API_KEY_ENV));
    assert!(prepared.warnings.is_empty());
}

#[test]
fn test_commit_type_in_tracker_title_wins_over_branch() {
    let config = Config::default();
    let grammar = setup(&config);
    let tracker = MockTracker::with_issue("fix: crash on login", "");
    let preparer = MessagePreparer::new(&grammar, &config).with_tracker(&tracker);

    let prepared = preparer.prepare(EDITOR_TEMPLATE, "feat/cet-1-x");

    assert_eq!(prepared.draft.commit_type, "fix");
    assert_eq!(prepared.draft.title, "crash on login");
    assert!(prepared.message.starts_with("CET-1/fix: crash on login\n\n"));
}

#[test]
fn test_tracker_title_without_type_keeps_branch_type() {
    let config = Config::default();
    let grammar = setup(&config);
    let tracker = MockTracker::with_issue("Crash on login", "");
    let preparer = MessagePreparer::new(&grammar, &config).with_tracker(&tracker);

    let prepared = preparer.prepare(EDITOR_TEMPLATE, "hotfix/cet-1-x");

    assert!(prepared.message.starts_with("CET-1/hotfix: Crash on login\n\n"));
}

#[test]
fn test_tracker_failure_is_annotated_not_fatal() {
    let config = Config::default();
    let grammar = setup(&config);
    let tracker = MockTracker::failing(&["Entity not found", "Rate limited"]);
    let preparer = MessagePreparer::new(&grammar, &config).with_tracker(&tracker);

    let prepared = preparer.prepare(EDITOR_TEMPLATE, "feat/cet-123-branch-title");

    assert!(prepared.message.starts_with("CET-123/feat: Branch title\n\n"));
    assert!(prepared
        .message
        .contains("# Error fetching issue details from Linear:"));
    assert!(prepared.message.contains("#\tEntity not found"));
    assert!(prepared.message.contains("#\tRate limited"));
    assert_eq!(prepared.warnings.len(), 1);
    assert!(matches!(
        &prepared.warnings[0],
        HookWarning::TrackerUnavailable { issue, .. } if issue == "CET-123"
    ));
}

#[test]
fn test_tracker_not_consulted_outside_editor() {
    let config = Config::default();
    let grammar = setup(&config);
    let tracker = MockTracker::with_issue("Fetched title", "Description");
    let preparer = MessagePreparer::new(&grammar, &config).with_tracker(&tracker);

    let prepared = preparer.prepare("", "feat/cet-123-branch-title");

    assert!(tracker.requests().is_empty());
    assert_eq!(prepared.message, "CET-123/feat: Branch title");
}

#[test]
fn test_tracker_not_consulted_once_title_typed() {
    let config = Config::default();
    let grammar = setup(&config);
    let tracker = MockTracker::with_issue("Fetched title", "Description");
    let preparer = MessagePreparer::new(&grammar, &config).with_tracker(&tracker);

    let raw = format!("my own title{}", EDITOR_TEMPLATE);
    let prepared = preparer.prepare(&raw, "feat/cet-123-branch-title");

    assert!(tracker.requests().is_empty());
    assert!(prepared.message.starts_with("CET-123/feat: my own title\n\n"));
}

#[test]
fn test_tracker_not_consulted_without_issue() {
    let config = Config::default();
    let grammar = setup(&config);
    let tracker = MockTracker::with_issue("Fetched title", "Description");
    let preparer = MessagePreparer::new(&grammar, &config).with_tracker(&tracker);

    let prepared = preparer.prepare(EDITOR_TEMPLATE, "branch-title");

    assert!(tracker.requests().is_empty());
    assert!(prepared.message.starts_with("feat: Branch title\n\n"));
}

#[test]
fn test_verbose_diff_stays_at_the_end() {
    let config = Config::default();
    let grammar = setup(&config);
    let preparer = MessagePreparer::new(&grammar, &config);

    let raw = format!(
        "{}# ------------------------ >8 ------------------------\n# Do not modify or remove the line above.\ndiff --git a/x b/x\n",
        EDITOR_TEMPLATE
    );
    let prepared = preparer.prepare(&raw, "feat/cet-123-branch-title");
    let message = prepared.message;

    let types_at = message.find("# Valid conventional commit types are:").unwrap();
    let scissors_at = message.find(" >8 ").unwrap();
    assert!(types_at < scissors_at);
    assert!(message.ends_with("diff --git a/x b/x"));
}
