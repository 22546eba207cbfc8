//! GitHub Issues API client.
//!
//! Thin HTTP wrapper for `POST /repos/{owner}/{repo}/issues`. Payload
//! assembly and response parsing are pure functions for testability.

use std::time::Duration;

use super::config::TrackerConfig;
use super::types::{CreateIssue, CreatedIssue, IssueError, IssueRequest};

const API_VERSION: &str = "2022-11-28";
const ACCEPT: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("glyphcase/", env!("CARGO_PKG_VERSION"));
const ISSUE_LABEL: &str = "icon-request";

// =============================================================================
// CLIENT
// =============================================================================

pub struct GithubClient {
    http: reqwest::Client,
    token: String,
    owner: String,
    repo: String,
    base_url: String,
}

impl GithubClient {
    /// Build a client from environment variables. See
    /// [`TrackerConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or the HTTP
    /// client fails to build.
    pub fn from_env() -> Result<Self, IssueError> {
        Self::new(TrackerConfig::from_env()?)
    }

    /// Build a client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError::HttpClientBuild`] if the HTTP client fails.
    pub fn new(config: TrackerConfig) -> Result<Self, IssueError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| IssueError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            token: config.token,
            owner: config.owner,
            repo: config.repo,
            base_url: config.base_url,
        })
    }

    /// Target repository as `owner/name`, for startup logging.
    #[must_use]
    pub fn repo_slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    async fn create(&self, request: &IssueRequest) -> Result<CreatedIssue, IssueError> {
        let body = ApiIssue {
            title: issue_title(request),
            body: issue_body(request),
            labels: &[ISSUE_LABEL],
        };
        let url = format!("{}/repos/{}/{}/issues", self.base_url, self.owner, self.repo);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .header("accept", ACCEPT)
            .header("x-github-api-version", API_VERSION)
            .header("user-agent", USER_AGENT)
            .json(&body)
            .send()
            .await
            .map_err(|e| IssueError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| IssueError::ApiRequest(e.to_string()))?;

        if (200..300).contains(&status) {
            parse_created(&text)
        } else {
            Err(status_error(status, text))
        }
    }
}

#[async_trait::async_trait]
impl CreateIssue for GithubClient {
    async fn create_issue(&self, request: &IssueRequest) -> Result<CreatedIssue, IssueError> {
        self.create(request).await
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiIssue<'a> {
    title: String,
    body: String,
    labels: &'a [&'a str],
}

#[derive(serde::Deserialize)]
struct ApiCreated {
    html_url: String,
    number: u64,
}

#[derive(serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

// =============================================================================
// PAYLOAD ASSEMBLY
// =============================================================================

fn issue_title(request: &IssueRequest) -> String {
    format!("[Icon Request] {}", request.category.as_str())
}

fn issue_body(request: &IssueRequest) -> String {
    let links = request.links.as_deref().unwrap_or("_none provided_");
    let requested_by = request
        .handle
        .as_ref()
        .map_or_else(|| "anonymous".to_owned(), |handle| format!("@{handle}"));

    format!(
        "**Category:** {}\n\n**Reference links / description:**\n{}\n\n**Requested by:** {}\n",
        request.category.as_str(),
        links,
        requested_by,
    )
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_created(json: &str) -> Result<CreatedIssue, IssueError> {
    let api: ApiCreated = serde_json::from_str(json).map_err(|e| IssueError::ApiParse(e.to_string()))?;
    Ok(CreatedIssue { url: api.html_url, number: api.number })
}

/// Map a non-success status to an error. Validation failures (422) carry a
/// message GitHub already phrases for humans; surface it as a rejection so
/// the dialog shows it verbatim.
fn status_error(status: u16, body: String) -> IssueError {
    if status == 422 {
        if let Ok(api) = serde_json::from_str::<ApiErrorBody>(&body) {
            return IssueError::Rejected { message: api.message };
        }
    }
    IssueError::ApiResponse { status, body }
}

#[cfg(test)]
#[path = "github_test.rs"]
mod tests;
