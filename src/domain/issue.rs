use std::fmt;

/// A `CODE-NUMBER` reference to a tracked issue, stored in canonical upper case
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueReference {
    pub code: String,
    pub number: String,
}

impl IssueReference {
    /// Build a reference from a token the grammar already matched.
    ///
    /// The token is split at its last `-`; leading zeros in the number are kept.
    pub fn from_token(token: &str) -> Option<Self> {
        let (code, number) = token.rsplit_once('-')?;
        if code.is_empty() || number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(IssueReference {
            code: code.to_uppercase(),
            number: number.to_string(),
        })
    }
}

impl fmt::Display for IssueReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.code, self.number)
    }
}
