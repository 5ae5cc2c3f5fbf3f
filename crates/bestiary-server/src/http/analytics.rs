// SPDX-License-Identifier: Apache-2.0

use super::{api_error_response, finalize, make_request_id, query_map};
use crate::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bestiary_api::{
    distribution_by_count, distribution_by_key, histogram_bins, parse_bins,
    parse_filter_selection, parse_top_params, stat_mean_axes, top_rows, type_means_rows,
    DistributionResponseDto, HistogramResponseDto, SummaryResponseDto, TopResponseDto,
    TypeMeansResponseDto, API_VERSION, TYPE_MEANS_COLUMNS,
};
use bestiary_model::FilteredView;
use bestiary_query::{
    apply_filters, group_mean, stat_means, summary_counts, top_n, total_histogram,
    value_distribution, GroupColumn, RankColumn,
};
use serde_json::json;
use std::collections::{BTreeMap, HashMap};

fn filtered_view<'a>(
    state: &'a AppState,
    query: &BTreeMap<String, String>,
) -> Result<FilteredView<'a>, bestiary_api::ApiError> {
    let selection = parse_filter_selection(query)?;
    Ok(apply_filters(&state.dataset, &selection))
}

pub(crate) async fn summary_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let request_id = make_request_id(&state);
    let query = query_map(params);
    let response = match filtered_view(&state, &query) {
        Ok(view) => {
            let summary = summary_counts(&view, &state.baseline);
            Json(SummaryResponseDto {
                api_version: API_VERSION.to_string(),
                summary: summary.into(),
            })
            .into_response()
        }
        Err(e) => api_error_response(StatusCode::BAD_REQUEST, e.with_request_id(&request_id)),
    };
    finalize(&state, &request_id, response)
}

pub(crate) async fn top_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let request_id = make_request_id(&state);
    let query = query_map(params);
    let top = match parse_top_params(&query, state.api.default_top_n, state.api.max_top_n) {
        Ok(top) => top,
        Err(e) => {
            let response =
                api_error_response(StatusCode::BAD_REQUEST, e.with_request_id(&request_id));
            return finalize(&state, &request_id, response);
        }
    };
    let response = match filtered_view(&state, &query) {
        Ok(view) => {
            let ranked = top_n(&view, top.n, top.by);
            Json(TopResponseDto {
                api_version: API_VERSION.to_string(),
                by: top.by.as_str().to_string(),
                rows: top_rows(&ranked),
            })
            .into_response()
        }
        Err(e) => api_error_response(StatusCode::BAD_REQUEST, e.with_request_id(&request_id)),
    };
    finalize(&state, &request_id, response)
}

pub(crate) async fn type_means_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let request_id = make_request_id(&state);
    let query = query_map(params);
    let response = match filtered_view(&state, &query) {
        Ok(view) => {
            let groups = group_mean(
                &view,
                GroupColumn::PrimaryType,
                &TYPE_MEANS_COLUMNS,
                RankColumn::Total,
            );
            Json(TypeMeansResponseDto {
                api_version: API_VERSION.to_string(),
                rows: type_means_rows(&groups),
            })
            .into_response()
        }
        Err(e) => api_error_response(StatusCode::BAD_REQUEST, e.with_request_id(&request_id)),
    };
    finalize(&state, &request_id, response)
}

async fn distribution_response(
    state: AppState,
    params: HashMap<String, String>,
    column: GroupColumn,
    column_name: &str,
) -> Response {
    let request_id = make_request_id(&state);
    let query = query_map(params);
    let response = match filtered_view(&state, &query) {
        Ok(view) => {
            let counts = value_distribution(&view, column);
            // Generations chart on a numeric axis, type share by weight.
            let counts = match column {
                GroupColumn::Generation => distribution_by_key(&counts),
                GroupColumn::PrimaryType => distribution_by_count(&counts),
            };
            Json(DistributionResponseDto {
                api_version: API_VERSION.to_string(),
                column: column_name.to_string(),
                counts,
            })
            .into_response()
        }
        Err(e) => api_error_response(StatusCode::BAD_REQUEST, e.with_request_id(&request_id)),
    };
    finalize(&state, &request_id, response)
}

pub(crate) async fn type_distribution_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    distribution_response(state, params, GroupColumn::PrimaryType, "primary_type").await
}

pub(crate) async fn generation_distribution_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    distribution_response(state, params, GroupColumn::Generation, "generation").await
}

pub(crate) async fn total_histogram_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let request_id = make_request_id(&state);
    let query = query_map(params);
    let bins = match parse_bins(
        &query,
        state.api.default_histogram_bins,
        state.api.max_histogram_bins,
    ) {
        Ok(bins) => bins,
        Err(e) => {
            let response =
                api_error_response(StatusCode::BAD_REQUEST, e.with_request_id(&request_id));
            return finalize(&state, &request_id, response);
        }
    };
    let response = match filtered_view(&state, &query) {
        Ok(view) => {
            let histogram = total_histogram(&view, bins);
            Json(HistogramResponseDto {
                api_version: API_VERSION.to_string(),
                bins: histogram_bins(&histogram),
            })
            .into_response()
        }
        Err(e) => api_error_response(StatusCode::BAD_REQUEST, e.with_request_id(&request_id)),
    };
    finalize(&state, &request_id, response)
}

pub(crate) async fn stat_means_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let request_id = make_request_id(&state);
    let query = query_map(params);
    let response = match filtered_view(&state, &query) {
        Ok(view) => {
            let axes = stat_mean_axes(&stat_means(&view));
            Json(json!({"api_version": API_VERSION, "axes": axes})).into_response()
        }
        Err(e) => api_error_response(StatusCode::BAD_REQUEST, e.with_request_id(&request_id)),
    };
    finalize(&state, &request_id, response)
}
