// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

pub const API_VERSION: &str = "v1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummaryDto {
    pub shown: usize,
    pub legendary: usize,
    pub legendary_pct: f64,
    pub mean_total: f64,
    pub count_delta: i64,
    pub mean_total_delta: f64,
    pub distinct_primary_types: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummaryResponseDto {
    pub api_version: String,
    pub summary: SummaryDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryCountDto {
    pub category: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DistributionResponseDto {
    pub api_version: String,
    pub column: String,
    pub counts: Vec<CategoryCountDto>,
}

/// One row of the top-N ranking table; the same columns the reference view
/// showed next to its ranking chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopRowDto {
    pub number: u32,
    pub name: String,
    pub primary_type: String,
    pub secondary_type: Option<String>,
    pub total: u32,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub legendary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopResponseDto {
    pub api_version: String,
    pub by: String,
    pub rows: Vec<TopRowDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeMeansRowDto {
    pub primary_type: String,
    pub count: u64,
    pub hp: f64,
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeMeansResponseDto {
    pub api_version: String,
    pub rows: Vec<TypeMeansRowDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistogramBinDto {
    pub lower: u32,
    pub upper: u32,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistogramResponseDto {
    pub api_version: String,
    pub bins: Vec<HistogramBinDto>,
}

/// One axis of a radial-chart vector: a display label plus a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatMeanDto {
    pub axis: String,
    pub mean: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatValueDto {
    pub axis: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatureDetailDto {
    pub number: u32,
    pub name: String,
    pub primary_type: String,
    pub secondary_type: Option<String>,
    pub generation: u32,
    pub legendary: bool,
    pub total: u32,
    /// Six-axis stat vector in fixed order, ready for spider-chart rendering.
    pub stats: Vec<StatValueDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchResponseDto {
    pub api_version: String,
    pub query: String,
    /// Empty means the distinct no-results outcome, not an error.
    pub matches: Vec<CreatureDetailDto>,
}
