//! Issue tracker integration for icon requests.
//!
//! DESIGN
//! ======
//! The tracker sits behind the [`CreateIssue`] trait so the dialog and the
//! HTTP layer can be tested against scripted mocks. [`GithubClient`] is the
//! one real implementation, configured from environment variables. Form
//! validation lives here, not in the dialog: the form submits raw values
//! and [`submit_request`] decides whether they make a filable issue.

pub mod config;
pub mod github;
pub mod types;

pub use github::GithubClient;
pub use types::{
    Category, CreateIssue, CreatedIssue, FALLBACK_MESSAGE, IssueError, IssueRequest, RequestForm,
};

/// Validate the form and file exactly one issue on the tracker.
///
/// No retry is attempted; on failure the visitor resubmits manually.
///
/// # Errors
///
/// Returns [`IssueError::Rejected`] for form validation failures and
/// tracker-side rejections, or a transport-level [`IssueError`] otherwise.
pub async fn submit_request(
    tracker: &dyn CreateIssue,
    form: &RequestForm,
) -> Result<CreatedIssue, IssueError> {
    let request = IssueRequest::from_form(form)?;
    tracker.create_issue(&request).await
}
