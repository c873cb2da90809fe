use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::TrackerConfig;
use crate::domain::IssueReference;
use crate::tracker::{IssueSummary, IssueTracker, TrackerError};

const ISSUE_QUERY: &str = r#"
query Issue($issue: String!) {
    issue(id: $issue) {
        title
        description
    }
}
"#;

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct IssueData {
    issue: Option<IssueNode>,
}

#[derive(Debug, Deserialize)]
struct IssueNode {
    title: Option<String>,
    description: Option<String>,
}

/// Linear GraphQL client
///
/// The HTTP client is built per request; a hook makes at most one call.
#[derive(Debug, Clone)]
pub struct LinearClient {
    name: String,
    api_url: String,
    api_key: String,
    timeout: Option<Duration>,
}

impl LinearClient {
    pub fn new(name: impl Into<String>, api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        LinearClient {
            name: name.into(),
            api_url: api_url.into(),
            api_key: api_key.into(),
            timeout: None,
        }
    }

    /// Client for the configured tracker, or `None` when no API key is set
    pub fn from_config(config: &TrackerConfig) -> Option<Self> {
        if !config.is_enabled() {
            return None;
        }
        let api_key = config.api_key.clone()?;
        let mut client = LinearClient::new(&config.name, &config.api_url, api_key);
        client.timeout = config.timeout_secs.map(Duration::from_secs);
        Some(client)
    }

    fn http_client(&self) -> Result<Client, TrackerError> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}

impl IssueTracker for LinearClient {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch_issue(&self, issue: &IssueReference) -> Result<IssueSummary, TrackerError> {
        let issue_id = issue.to_string();
        debug!(issue = %issue_id, url = %self.api_url, "Querying issue tracker");

        let body = json!({
            "query": ISSUE_QUERY,
            "variables": { "issue": issue_id },
        });

        let response = self
            .http_client()?
            .post(&self.api_url)
            .header(AUTHORIZATION, &self.api_key)
            .json(&body)
            .send()?;

        let status = response.status().as_u16();
        let text = response.text()?;
        parse_issue_response(status, &text, &issue_id)
    }
}

/// Decode a GraphQL response body for the issue query.
///
/// GraphQL errors win over the HTTP status, since the API reports
/// authentication problems as a 400 with an `errors` array.
fn parse_issue_response(status: u16, body: &str, issue_id: &str) -> Result<IssueSummary, TrackerError> {
    let response: GraphQlResponse<IssueData> = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(_) if !(200..300).contains(&status) => return Err(TrackerError::Status { status }),
        Err(err) => return Err(err.into()),
    };

    if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
        return Err(TrackerError::Api {
            messages: errors.into_iter().map(|e| e.message).collect(),
        });
    }

    if !(200..300).contains(&status) {
        return Err(TrackerError::Status { status });
    }

    let node = response
        .data
        .and_then(|data| data.issue)
        .ok_or_else(|| TrackerError::NotFound(issue_id.to_string()))?;

    Ok(IssueSummary::new(
        node.title.as_deref(),
        node.description.as_deref(),
    ))
}
