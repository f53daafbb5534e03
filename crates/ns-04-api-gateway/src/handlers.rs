//! HTTP handlers.
//!
//! Handlers are thin: decode, validate at the boundary, call the store or the
//! wall, encode. Secret values are never logged here.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderName},
    response::{IntoResponse, Response},
    Json,
};
use ns_02_admission::{
    submitter_or_anonymous, validate_value, AdmissionApi, Secret, SecretId, StoreStats,
    SubmitOutcome, SubmitResult,
};
use ns_03_wall::Wall;
use ns_telemetry::{
    encode_metrics, metric_inc, metrics_content_type, SECRETS, SUBMISSIONS, WALL_EXPOSED,
    WALL_PAGES,
};

use crate::domain::{
    ApiError, HealthResponse, RiddleResponse, SubmitRequest, EMPTY_WALL_MESSAGE,
};

pub const X_EXPOSED_TOTAL: HeaderName = HeaderName::from_static("x-exposed-total");
pub const X_EXPOSED_PAGE: HeaderName = HeaderName::from_static("x-exposed-page");
pub const X_EXPOSED_PAGES: HeaderName = HeaderName::from_static("x-exposed-pages");

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AdmissionApi>,
    pub wall: Arc<Wall>,
}

/// `GET /` and `GET /api/riddle`
pub async fn riddle(State(state): State<AppState>) -> Json<RiddleResponse> {
    Json(RiddleResponse::new(state.store.stats()))
}

/// `POST /api/secrets`
pub async fn submit(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SubmitResult>, ApiError> {
    let request: SubmitRequest = serde_json::from_slice(&body).map_err(|_| {
        metric_inc!(SUBMISSIONS, &["rejected"]);
        ApiError::InvalidBody
    })?;

    let value = validate_value(&request.value).map_err(|e| {
        metric_inc!(SUBMISSIONS, &["rejected"]);
        ApiError::from(e)
    })?;
    let submitter = submitter_or_anonymous(request.submitted_by.as_deref());

    let result = state.store.submit(value, submitter);
    metric_inc!(SUBMISSIONS, &[outcome_label(&result.outcome)]);

    Ok(Json(result))
}

/// `GET /api/secrets`
pub async fn list(State(state): State<AppState>) -> Json<Vec<Secret>> {
    Json(state.store.list())
}

/// `GET /api/secrets/:id`
pub async fn get_secret(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Secret>, ApiError> {
    let secret = state.store.require(&SecretId::from(id))?;
    Ok(Json(secret))
}

/// `GET /api/stats`
pub async fn stats(State(state): State<AppState>) -> Json<StoreStats> {
    Json(state.store.stats())
}

/// `GET /api/exposed`: the next wall page as plain text.
pub async fn exposed(State(state): State<AppState>) -> Response {
    let page = state.wall.page();

    if page.is_empty() {
        return (
            [
                (header::CONTENT_TYPE, TEXT_PLAIN.to_string()),
                (X_EXPOSED_TOTAL, "0".to_string()),
            ],
            EMPTY_WALL_MESSAGE,
        )
            .into_response();
    }

    (
        [
            (header::CONTENT_TYPE, TEXT_PLAIN.to_string()),
            (X_EXPOSED_TOTAL, page.total_exposed.to_string()),
            (X_EXPOSED_PAGE, page.page_index.to_string()),
            (X_EXPOSED_PAGES, page.total_pages.to_string()),
        ],
        page.text,
    )
        .into_response()
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// `GET /metrics`: Prometheus text exposition.
///
/// Store and wall gauges are sampled here rather than on every change.
pub async fn metrics(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let stats = state.store.stats();
    SECRETS
        .with_label_values(&["private"])
        .set(stats.private as i64);
    SECRETS
        .with_label_values(&["exposed"])
        .set(stats.exposed as i64);

    let snapshot = state.wall.snapshot();
    WALL_EXPOSED.set(snapshot.total_exposed as i64);
    WALL_PAGES.set(snapshot.total_pages as i64);

    let body = encode_metrics().map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, metrics_content_type())], body))
}

fn outcome_label(outcome: &SubmitOutcome) -> &'static str {
    match outcome {
        SubmitOutcome::Admitted => "admitted",
        SubmitOutcome::ExposedExisting { .. } => "exposed",
        SubmitOutcome::SelfExposed => "self_exposed",
    }
}
