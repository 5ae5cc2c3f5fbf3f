// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiError;
use bestiary_query::{FilterSelection, RankColumn};
use std::collections::BTreeMap;

pub const MAX_SEARCH_BYTES: usize = 256;

fn parse_flag(query: &BTreeMap<String, String>, name: &str) -> Result<bool, ApiError> {
    match query.get(name).map(String::as_str) {
        None => Ok(false),
        Some("1" | "true" | "TRUE") => Ok(true),
        Some("0" | "false" | "FALSE") => Ok(false),
        Some(other) => Err(ApiError::invalid_param(name, other)),
    }
}

/// Parses the three sidebar predicates from the request query map. Absent or
/// empty list parameters leave that predicate unfiltered, matching the
/// default all-options-selected UI state.
pub fn parse_filter_selection(
    query: &BTreeMap<String, String>,
) -> Result<FilterSelection, ApiError> {
    let mut selection = FilterSelection::default();

    if let Some(raw) = query.get("generation") {
        for piece in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let generation = piece
                .parse::<u32>()
                .map_err(|_| ApiError::invalid_param("generation", piece))?;
            selection.generations.insert(generation);
        }
    }
    if let Some(raw) = query.get("type") {
        for piece in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            selection.primary_types.insert(piece.to_string());
        }
    }
    selection.legendary_only = parse_flag(query, "legendary")?;
    Ok(selection)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopParams {
    pub n: usize,
    pub by: RankColumn,
}

pub fn parse_top_params(
    query: &BTreeMap<String, String>,
    default_n: usize,
    max_n: usize,
) -> Result<TopParams, ApiError> {
    let n = if let Some(raw) = query.get("n") {
        let value = raw
            .parse::<usize>()
            .map_err(|_| ApiError::invalid_param("n", raw))?;
        if value > max_n {
            return Err(ApiError::invalid_param("n", raw));
        }
        value
    } else {
        default_n
    };
    let by = if let Some(raw) = query.get("by") {
        RankColumn::parse(raw).map_err(|_| ApiError::invalid_param("by", raw))?
    } else {
        RankColumn::Total
    };
    Ok(TopParams { n, by })
}

pub fn parse_bins(
    query: &BTreeMap<String, String>,
    default_bins: usize,
    max_bins: usize,
) -> Result<usize, ApiError> {
    let Some(raw) = query.get("bins") else {
        return Ok(default_bins);
    };
    let bins = raw
        .parse::<usize>()
        .map_err(|_| ApiError::invalid_param("bins", raw))?;
    if bins == 0 || bins > max_bins {
        return Err(ApiError::invalid_param("bins", raw));
    }
    Ok(bins)
}

/// The search term is the one required parameter in the API: an absent or
/// blank `name` is a request for nothing, rejected before it reaches the
/// query layer.
pub fn parse_search_term(query: &BTreeMap<String, String>) -> Result<String, ApiError> {
    let raw = query.get("name").ok_or_else(|| ApiError::missing_param("name"))?;
    let term = raw.trim();
    if term.is_empty() {
        return Err(ApiError::missing_param("name"));
    }
    if term.len() > MAX_SEARCH_BYTES {
        return Err(ApiError::invalid_param("name", term));
    }
    Ok(term.to_string())
}
