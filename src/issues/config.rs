//! Issue tracker configuration parsed from environment variables.

use super::types::IssueError;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub base_url: String,
    pub timeouts: TrackerTimeouts,
}

impl TrackerConfig {
    /// Build typed tracker config from environment variables.
    ///
    /// Required:
    /// - `GITHUB_TOKEN`: API token with issue-creation rights
    /// - `GITHUB_REPO`: target repository as `owner/name`
    ///
    /// Optional:
    /// - `GITHUB_API_BASE_URL`: default `https://api.github.com`
    /// - `GITHUB_REQUEST_TIMEOUT_SECS`: default 30
    /// - `GITHUB_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`IssueError::MissingEnv`] when a required variable is
    /// absent and [`IssueError::ConfigParse`] when `GITHUB_REPO` is not
    /// `owner/name`.
    pub fn from_env() -> Result<Self, IssueError> {
        let token = require_env("GITHUB_TOKEN")?;
        let repo_slug = require_env("GITHUB_REPO")?;
        let (owner, repo) = parse_repo(&repo_slug)?;

        let base_url = std::env::var("GITHUB_API_BASE_URL")
            .map_or_else(|_| DEFAULT_API_BASE_URL.to_owned(), |url| normalize_base_url(&url));
        let timeouts = TrackerTimeouts {
            request_secs: env_parse("GITHUB_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse("GITHUB_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { token, owner, repo, base_url, timeouts })
    }
}

fn require_env(var: &str) -> Result<String, IssueError> {
    std::env::var(var).map_err(|_| IssueError::MissingEnv { var: var.to_owned() })
}

fn env_parse(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

/// Split an `owner/name` repository slug.
pub(crate) fn parse_repo(slug: &str) -> Result<(String, String), IssueError> {
    let mut parts = slug.trim().split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner.to_owned(), repo.to_owned()))
        }
        _ => Err(IssueError::ConfigParse(format!(
            "GITHUB_REPO must be 'owner/name', got '{slug}'"
        ))),
    }
}

pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_owned()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
