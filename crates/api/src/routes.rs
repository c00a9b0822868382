use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::header::HeaderName,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use cases::{CaseRecord, Commission, DataSource, SearchRequest};

use crate::AppState;
use crate::error::ApiError;
use crate::metrics::{MetricsSnapshot, TimedOperation};

/// Response header naming the path that produced the payload.
pub const DATA_SOURCE_HEADER: HeaderName = HeaderName::from_static("x-data-source");

type Sourced<T> = ([(HeaderName, &'static str); 1], Json<Vec<T>>);

fn sourced<T>(items: Vec<T>, source: DataSource) -> Sourced<T> {
    ([(DATA_SOURCE_HEADER, source.as_str())], Json(items))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    upstream: String,
}

/// Query-string form of a case search: `/cases?kind=...&state=...`
#[derive(Debug, Deserialize)]
struct CaseQuery {
    #[serde(default)]
    kind: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    commission: String,
    #[serde(default, alias = "search_value")]
    value: String,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(get_metrics))
        .route("/states", get(list_states))
        .route("/commissions/:state_id", get(list_commissions))
        .route("/cases", get(query_cases))
        .route("/cases/:kind", post(search_cases))
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let upstream = match state.lookup.provider() {
        None => "disabled".to_string(),
        Some(client) => match client.ping().await {
            Ok(()) => "ok".to_string(),
            Err(e) => format!("error: {}", e),
        },
    };

    Json(HealthResponse {
        status: "ok",
        upstream,
    })
}

async fn get_metrics(State(state): State<Arc<AppState>>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}

async fn list_states(State(state): State<Arc<AppState>>) -> Sourced<cases::State> {
    let fetched = state.lookup.states().await;
    state.metrics.record_request(true);
    state.metrics.record_source(fetched.source);
    sourced(fetched.items, fetched.source)
}

async fn list_commissions(
    State(state): State<Arc<AppState>>,
    Path(state_id): Path<String>,
) -> Sourced<Commission> {
    let fetched = state.lookup.commissions(&state_id).await;
    state.metrics.record_request(true);
    state.metrics.record_source(fetched.source);
    sourced(fetched.items, fetched.source)
}

async fn search_cases(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Sourced<CaseRecord>, ApiError> {
    let Json(request) = body.map_err(|e| {
        state.metrics.record_request(false);
        tracing::info!(%kind, error = %e, "Rejected case search body");
        ApiError::from(e)
    })?;

    run_search(&state, &kind, &request).await
}

async fn query_cases(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CaseQuery>,
) -> Result<Sourced<CaseRecord>, ApiError> {
    let request = SearchRequest::new(query.state, query.commission, query.value);
    run_search(&state, &query.kind, &request).await
}

async fn run_search(
    state: &AppState,
    kind: &str,
    request: &SearchRequest,
) -> Result<Sourced<CaseRecord>, ApiError> {
    let timer = TimedOperation::start();

    let fetched = match state.lookup.search(kind, request).await {
        Ok(fetched) => fetched,
        Err(e) => {
            state.metrics.record_request(false);
            tracing::info!(kind, error = %e, "Rejected case search");
            return Err(e.into());
        }
    };

    state.metrics.record_request(true);
    state.metrics.record_source(fetched.source);
    state.metrics.record_search(timer.elapsed());
    tracing::info!(
        kind,
        results = fetched.items.len(),
        source = fetched.source.as_str(),
        "Case search complete"
    );

    Ok(sourced(fetched.items, fetched.source))
}
