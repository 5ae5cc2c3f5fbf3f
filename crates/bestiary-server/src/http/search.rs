// SPDX-License-Identifier: Apache-2.0

use super::{api_error_response, finalize, make_request_id, query_map};
use crate::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bestiary_api::{creature_detail, parse_search_term, SearchResponseDto, API_VERSION};
use bestiary_query::search_by_name;
use std::collections::HashMap;

/// Name lookup runs against the unfiltered dataset: the sidebar predicates
/// are deliberately ignored here.
pub(crate) async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let request_id = make_request_id(&state);
    let query = query_map(params);
    let response = match parse_search_term(&query) {
        Ok(term) => {
            let matches = search_by_name(&state.dataset, &term);
            Json(SearchResponseDto {
                api_version: API_VERSION.to_string(),
                query: term,
                matches: matches.iter().map(|r| creature_detail(r)).collect(),
            })
            .into_response()
        }
        Err(e) => api_error_response(StatusCode::BAD_REQUEST, e.with_request_id(&request_id)),
    };
    finalize(&state, &request_id, response)
}
