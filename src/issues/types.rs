//! Issue tracker types: form input, validated requests, and errors.

use serde::{Deserialize, Serialize};

/// Message shown when the tracker fails for any reason the visitor cannot
/// act on. Only [`IssueError::Rejected`] messages are shown verbatim.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by issue-creation operations.
#[derive(Debug, thiserror::Error)]
pub enum IssueError {
    /// The request was rejected with a display-ready message (bad category,
    /// tracker-side validation). Safe to show to the visitor as-is.
    #[error("{message}")]
    Rejected { message: String },

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A required environment variable is not set.
    #[error("missing configuration: env var {var} not set")]
    MissingEnv { var: String },

    /// The HTTP request to the tracker failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The tracker returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The tracker response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl IssueError {
    /// The message to display to the visitor. Structured rejections carry
    /// their own text; everything else collapses to [`FALLBACK_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message } => message.clone(),
            _ => FALLBACK_MESSAGE.to_owned(),
        }
    }
}

// =============================================================================
// CATEGORY
// =============================================================================

/// Icon request category. Display strings match the site's form options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    BrandLogo,
    Interface,
    Navigation,
    SocialMedia,
    Technology,
    Other,
}

impl Category {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BrandLogo => "Brand/Logo",
            Self::Interface => "Interface",
            Self::Navigation => "Navigation",
            Self::SocialMedia => "Social Media",
            Self::Technology => "Technology",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "Brand/Logo" => Some(Self::BrandLogo),
            "Interface" => Some(Self::Interface),
            "Navigation" => Some(Self::Navigation),
            "Social Media" => Some(Self::SocialMedia),
            "Technology" => Some(Self::Technology),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

// =============================================================================
// FORM INPUT
// =============================================================================

/// Raw values from the request form, exactly as the visitor typed them.
/// The form inputs are uncontrolled; validation happens in
/// [`IssueRequest::from_form`], not in the dialog.
#[derive(Debug, Clone, Default)]
pub struct RequestForm {
    pub category: String,
    pub links: String,
    pub handle: String,
}

/// A validated, normalized issue request ready for the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRequest {
    pub category: Category,
    /// Reference links or a free-text description.
    pub links: Option<String>,
    /// GitHub handle without the leading `@`.
    pub handle: Option<String>,
}

impl IssueRequest {
    /// Validate and normalize raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError::Rejected`] with a display-ready message when
    /// the category is missing or not one of the known options.
    pub fn from_form(form: &RequestForm) -> Result<Self, IssueError> {
        let raw_category = form.category.trim();
        let Some(category) = Category::from_str(raw_category) else {
            return Err(IssueError::Rejected {
                message: "Please choose a valid category.".to_owned(),
            });
        };

        Ok(Self {
            category,
            links: non_empty(form.links.trim()),
            handle: non_empty(normalize_handle(&form.handle)),
        })
    }
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() { None } else { Some(value) }
}

/// Strip whitespace and at most one leading `@`. The form renders the `@`
/// as decoration outside the input, but visitors paste it in anyway.
#[must_use]
pub fn normalize_handle(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_prefix('@').unwrap_or(trimmed).trim().to_owned()
}

// =============================================================================
// TRACKER SEAM
// =============================================================================

/// The issue created on the tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedIssue {
    /// Browser-facing URL of the new issue.
    pub url: String,
    pub number: u64,
}

/// Async seam over the issue tracker. Enables mocking in tests.
#[async_trait::async_trait]
pub trait CreateIssue: Send + Sync {
    /// File one issue for the given request.
    ///
    /// # Errors
    ///
    /// Returns an [`IssueError`] if the tracker rejects the request or the
    /// call fails at the transport level.
    async fn create_issue(&self, request: &IssueRequest) -> Result<CreatedIssue, IssueError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
