// SPDX-License-Identifier: Apache-2.0

pub(crate) mod analytics;
pub(crate) mod search;

use crate::AppState;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bestiary_api::ApiError;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::Ordering;

pub(crate) fn make_request_id(state: &AppState) -> String {
    let seq = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{seq:08x}")
}

pub(crate) fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}

pub(crate) fn api_error_response(status: StatusCode, error: ApiError) -> Response {
    (status, Json(error)).into_response()
}

/// Finalizes a handler result: counts it, tags it with the request id.
pub(crate) fn finalize(state: &AppState, request_id: &str, response: Response) -> Response {
    state.metrics.observe(response.status());
    with_request_id(response, request_id)
}

pub(crate) fn query_map(params: HashMap<String, String>) -> BTreeMap<String, String> {
    params.into_iter().collect()
}

pub(crate) async fn healthz_handler() -> Response {
    (StatusCode::OK, "ok").into_response()
}

pub(crate) async fn readyz_handler(State(state): State<AppState>) -> Response {
    let request_id = make_request_id(&state);
    let response = if state.ready.load(Ordering::Relaxed) {
        Json(json!({"ready": true, "records": state.dataset.len()})).into_response()
    } else {
        api_error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            ApiError::not_ready("dataset not loaded").with_request_id(&request_id),
        )
    };
    finalize(&state, &request_id, response)
}

pub(crate) async fn version_handler(State(state): State<AppState>) -> Response {
    let request_id = make_request_id(&state);
    let response = Json(json!({
        "name": crate::CRATE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
    .into_response();
    finalize(&state, &request_id, response)
}
