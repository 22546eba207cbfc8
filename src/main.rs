use std::sync::Arc;

use glyphcase::issues::{CreateIssue, GithubClient};
use glyphcase::registry::ExampleRegistry;
use glyphcase::routes;
use glyphcase::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Source paths in the catalog are relative to the working directory.
    let registry = ExampleRegistry::builtin(".").expect("example registry invalid");
    tracing::info!(examples = registry.records().len(), "example registry loaded");

    // Tracker config is non-fatal: without it the site still serves
    // examples, and icon requests answer 503.
    let tracker: Option<Arc<dyn CreateIssue>> = match GithubClient::from_env() {
        Ok(client) => {
            tracing::info!(repo = client.repo_slug(), "issue tracker configured");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "issue tracker not configured, icon requests disabled");
            None
        }
    };

    let state = AppState::new(Arc::new(registry), tracker);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "glyphcase listening");
    axum::serve(listener, app).await.expect("server failed");
}
