//! HTTP Server - Routing and Serving Loop
//!
//! Exposes the service endpoints via axum:
//! - `GET /`            — liveness message
//! - `GET /highest-apy` — the aggregated top yield
//!
//! CORS is wide open: the service is a read-only aggregator consumed
//! directly by browser frontends.

use std::future::Future;
use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::domain::record::YieldRecord;
use crate::usecases::highest_apy::HighestApy;

use super::error::ApiError;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The aggregation workflow, wired with its sources at startup.
    pub highest_apy: Arc<HighestApy>,
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/highest-apy", get(highest_apy))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// axum-based API server.
pub struct ApiServer {
    /// Bind address, e.g. `0.0.0.0:8080`.
    bind_address: String,
    /// Handler state.
    state: AppState,
}

impl ApiServer {
    /// Create a server bound to the given address.
    pub fn new(bind_address: String, state: AppState) -> Self {
        Self {
            bind_address,
            state,
        }
    }

    /// Serve until the shutdown future resolves.
    pub async fn run<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = router(self.state);
        let listener = tokio::net::TcpListener::bind(&self.bind_address).await?;

        info!(address = %self.bind_address, "API server started");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}

/// Liveness endpoint.
async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Server is up and running" }))
}

/// Run the aggregation and return the top record.
async fn highest_apy(State(state): State<AppState>) -> Result<Json<YieldRecord>, ApiError> {
    let best = state.highest_apy.execute().await?;
    Ok(Json(best))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[tokio::test]
    async fn root_reports_the_liveness_message() {
        let response = root().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["message"], "Server is up and running");
    }
}
