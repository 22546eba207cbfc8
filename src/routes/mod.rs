//! Router assembly.
//!
//! API routes are served under `/api` with permissive CORS; the static
//! showcase site is the fallback service, mirroring how the site ships as
//! prebuilt files next to the binary.

pub mod examples;
pub mod requests;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes plus the static site fallback.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let site = ServeDir::new(site_dir()).append_index_html_on_directories(true);

    Router::new()
        .route("/api/examples", get(examples::list_examples))
        .route("/api/examples/{slug}", get(examples::get_example))
        .route("/api/icon-requests", post(requests::create_icon_request))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
}

/// Resolve the static site directory.
fn site_dir() -> PathBuf {
    std::env::var("SITE_DIR").map_or_else(|_| PathBuf::from("site"), PathBuf::from)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
