//! The conventional commit type vocabulary accepted by the hooks.

/// One entry of the commit type table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitType {
    pub key: &'static str,
    pub description: &'static str,
}

/// Every accepted commit type, in the order shown to users.
pub const COMMIT_TYPES: &[CommitType] = &[
    CommitType {
        key: "build",
        description: "updating build configuration, development tools",
    },
    CommitType {
        key: "chore",
        description: "updating grunt tasks etc. @",
    },
    CommitType {
        key: "ci",
        description: "updating deployment configuration",
    },
    CommitType {
        key: "docs",
        description: "changes to documentation",
    },
    CommitType {
        key: "fix",
        description: "patching a bug in the codebase",
    },
    CommitType {
        key: "feat",
        description: "adding a new feature to the code",
    },
    CommitType {
        key: "feat!",
        description: "adding a new feature that introduces breaking API change",
    },
    CommitType {
        key: "hotfix",
        description: "updating a bug in production",
    },
    CommitType {
        key: "perf",
        description: "updating code to make performance enhancements",
    },
    CommitType {
        key: "refactor",
        description: "updating code without any functional change",
    },
    CommitType {
        key: "revert",
        description: "updating code to earlier change",
    },
    CommitType {
        key: "style",
        description: "formatting changes, missing semicolons, etc.",
    },
    CommitType {
        key: "test",
        description: "for adding missing tests, refactoring tests; no production code change",
    },
];

/// Exact, case-sensitive membership test against the table keys
pub fn is_known(key: &str) -> bool {
    COMMIT_TYPES.iter().any(|t| t.key == key)
}

/// Keys without the breaking-change marker, deduplicated and in table order.
///
/// The grammar adds the optional `!` itself, so `feat!` collapses into `feat`.
pub fn base_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = Vec::new();
    for commit_type in COMMIT_TYPES {
        let base = commit_type.key.trim_end_matches('!');
        if !keys.contains(&base) {
            keys.push(base);
        }
    }
    keys
}

/// Human-facing table of commit types, used in rejection output.
pub fn commit_types_doc() -> String {
    let width = COMMIT_TYPES.iter().map(|t| t.key.len()).max().unwrap_or(0);
    let mut doc = String::from("Valid conventional commit types are:\n");
    for commit_type in COMMIT_TYPES {
        doc.push('\n');
        doc.push_str(&format!(
            "\t{:<width$} {}",
            commit_type.key,
            commit_type.description,
            width = width
        ));
    }
    doc
}

/// The same table with every line turned into a git comment.
pub fn commented_commit_types_doc() -> String {
    commit_types_doc()
        .lines()
        .map(|line| format!("#{}{}", if line.starts_with('\t') { "" } else { " " }, line))
        .map(|line| line.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
