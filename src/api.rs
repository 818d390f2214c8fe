use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::{header, HeaderMap},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::info;

use crate::{
    app_state::AppState,
    auth,
    error::{ApiError, AuthError, ValidationError},
    models::{QueryRequest, QueryResponse},
    synthesizer,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

// --- Router ---

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/hackrx/run", post(run_query_handler))
        .with_state(app_state)
}

// --- Handlers ---

#[axum::debug_handler]
async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "LLM-Powered Intelligent Query-Retrieval System",
        "version": VERSION,
        "status": "active",
    }))
}

#[axum::debug_handler]
async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": VERSION,
    }))
}

/// The main query endpoint: auth, validate, simulated latency, canned
/// synthesis, timestamped envelope.
#[axum::debug_handler]
async fn run_query_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<QueryResponse>, ApiError> {
    let started = Instant::now();

    // Auth runs before the body is even looked at; a rejected caller
    // learns nothing about whether its query was valid.
    let authorization = match headers.get(header::AUTHORIZATION) {
        None => None,
        Some(value) => Some(value.to_str().map_err(|_| AuthError::MalformedHeader)?),
    };
    auth::verify_bearer(authorization, &state.config.api_token)?;

    let Json(body) = body.map_err(|_| ValidationError::InvalidBody)?;
    let request = QueryRequest::from_value(&body)?;

    info!("Processing query: {}", request.query);

    // Stand-in for document processing and semantic search. Yields the
    // task; nothing blocks while the clock runs.
    tokio::time::sleep(state.config.processing_delay).await;

    let synthesis = synthesizer::synthesize(&request.query, &request.options);

    Ok(Json(QueryResponse {
        query: request.query,
        answer: synthesis.answer,
        confidence: synthesis.confidence,
        sources: synthesis.sources,
        reasoning: synthesis.reasoning,
        timestamp: Utc::now().to_rfc3339(),
        processing_time_ms: started.elapsed().as_millis() as u64,
    }))
}
