#![deny(clippy::redundant_clone)]

use std::sync::atomic::Ordering;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use felicity_api::{status_for, ApiError, PredictRequest, PredictResponse};
use felicity_model::predict;
use serde_json::json;
use tracing::info;

use crate::AppState;

const INDEX_HTML: &str = include_str!("../frontend/index.html");
const MAIN_JS: &str = include_str!("../frontend/main.js");
const STYLE_CSS: &str = include_str!("../frontend/style.css");

fn make_request_id(state: &AppState) -> String {
    let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

fn propagated_request_id(headers: &HeaderMap, state: &AppState) -> String {
    if let Some(raw) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    make_request_id(state)
}

fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}

fn api_error_response(err: ApiError) -> Response {
    let status =
        StatusCode::from_u16(status_for(err.code)).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({"error": err}))).into_response()
}

pub(crate) async fn data_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let started = Instant::now();
    let records = state.store.snapshot().await;
    info!(
        request_id = %request_id,
        route = "/api/data",
        records = records.len(),
        latency_ms = started.elapsed().as_millis() as u64,
        "served dataset"
    );
    with_request_id(Json(records).into_response(), &request_id)
}

pub(crate) async fn predict_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let started = Instant::now();
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            info!(
                request_id = %request_id,
                route = "/api/predict",
                status = 400,
                "rejected prediction payload"
            );
            let err = ApiError::bad_request(
                "malformed prediction payload",
                json!({"reason": rejection.body_text()}),
            );
            return with_request_id(api_error_response(err), &request_id);
        }
    };
    let response = PredictResponse::from_score(predict(&request.into_input()));
    info!(
        request_id = %request_id,
        route = "/api/predict",
        score = %response.happiness_score,
        latency_ms = started.elapsed().as_millis() as u64,
        "prediction served"
    );
    with_request_id(Json(response).into_response(), &request_id)
}

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub(crate) async fn readyz_handler(State(state): State<AppState>) -> Response {
    if state.store.is_ready() {
        let records = state.store.record_count().await;
        Json(json!({"status": "ready", "records": records})).into_response()
    } else {
        api_error_response(ApiError::dataset_unavailable("dataset not loaded"))
    }
}

pub(crate) async fn version_handler() -> impl IntoResponse {
    Json(json!({
        "name": crate::CRATE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub(crate) async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub(crate) async fn main_js_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        MAIN_JS,
    )
}

pub(crate) async fn style_css_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}

pub(crate) async fn fallback_handler(uri: Uri) -> Response {
    api_error_response(ApiError::not_found(uri.path()))
}
