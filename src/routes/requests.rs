//! Icon request route.
//!
//! Accepts the request form, files exactly one issue on the tracker, and
//! maps the outcome to a JSON body the dialog renders inline. The tracker
//! being unconfigured degrades this endpoint to 503 without affecting the
//! rest of the site.

use axum::Form;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::issues::{self, IssueError};
use crate::state::AppState;

/// Form fields exactly as the dialog posts them. All default to empty so a
/// bare submission still reaches validation rather than failing
/// deserialization.
#[derive(Debug, Deserialize)]
pub struct IconRequestBody {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub links: String,
    #[serde(default)]
    pub handle: String,
}

#[derive(Serialize)]
pub struct IconRequestCreated {
    pub success: bool,
    pub url: String,
}

#[derive(Serialize)]
pub struct IconRequestError {
    pub error: String,
}

/// `POST /api/icon-requests` -- validate the form and file one issue.
pub async fn create_icon_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(body): Form<IconRequestBody>,
) -> Response {
    let Some(tracker) = state.tracker.clone() else {
        tracing::warn!("icon request received but no tracker is configured");
        return error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Icon requests are temporarily unavailable.",
        );
    };

    let key = client_key(&headers);
    if let Err(err) = state.rate_limiter.check_and_record(&key) {
        tracing::warn!(client = %key, error = %err, "icon request rate limited");
        return error_response(StatusCode::TOO_MANY_REQUESTS, &err.to_string());
    }

    let form = issues::RequestForm { category: body.category, links: body.links, handle: body.handle };
    match issues::submit_request(tracker.as_ref(), &form).await {
        Ok(created) => {
            tracing::info!(url = %created.url, number = created.number, "icon request filed");
            (
                StatusCode::CREATED,
                Json(IconRequestCreated { success: true, url: created.url }),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "icon request failed");
            error_response(issue_error_to_status(&err), &err.user_message())
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(IconRequestError { error: message.to_owned() })).into_response()
}

pub(crate) fn issue_error_to_status(err: &IssueError) -> StatusCode {
    match err {
        IssueError::Rejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// Rate-limit key for the calling client. The deployment sits behind a
/// reverse proxy, so the original address arrives in `x-forwarded-for`.
pub(crate) fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map_or_else(|| "direct".to_owned(), str::to_owned)
}

#[cfg(test)]
#[path = "requests_test.rs"]
mod tests;
