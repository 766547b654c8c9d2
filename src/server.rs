//! HTTP surface: `POST /api/summarize`.
//!
//! One route plus a liveness line. Pipeline failures come back as a fixed
//! 500 body with no provider detail.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::summarizer::Summarizer;

pub struct AppState {
    pub summarizer: Summarizer,
}

#[derive(Deserialize)]
pub struct SummarizeRequest {
    pub url: String,
    #[serde(rename = "summaryType")]
    pub summary_type: String,
}

#[derive(Serialize)]
struct SummarizeResponse {
    summary: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(info_line))
        .route("/api/summarize", post(summarize))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn info_line() -> &'static str {
    concat!("summarist ", env!("CARGO_PKG_VERSION"))
}

async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummarizeRequest>,
) -> Response {
    match state
        .summarizer
        .summarize(&request.url, &request.summary_type)
        .await
    {
        Ok(summary) => (StatusCode::OK, Json(SummarizeResponse { summary })).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
