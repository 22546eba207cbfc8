//! Example catalog routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use crate::registry::Example;
use crate::state::AppState;

/// `GET /api/examples` -- list every example with its source text.
pub async fn list_examples(State(state): State<AppState>) -> Result<Json<Vec<Example>>, StatusCode> {
    let examples = state.registry.examples().map_err(|err| {
        tracing::error!(error = %err, "example listing failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(examples))
}

/// `GET /api/examples/:slug` -- fetch one example with its source text.
pub async fn get_example(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Example>, StatusCode> {
    match state.registry.example_by_slug(&slug) {
        Ok(Some(example)) => Ok(Json(example)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(err) => {
            tracing::error!(%slug, error = %err, "example lookup failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
#[path = "examples_test.rs"]
mod tests;
