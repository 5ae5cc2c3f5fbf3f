#![forbid(unsafe_code)]
//! Presentation boundary: wire DTOs, query-parameter parsing, and the API
//! error contract. The view layer consumes these structures as-is; nothing
//! here computes aggregates.

mod convert;
mod dto;
mod errors;
mod params;

pub use convert::{
    creature_detail, distribution_by_count, distribution_by_key, histogram_bins, stat_mean_axes,
    top_rows, type_means_rows, TYPE_MEANS_COLUMNS,
};
pub use dto::{
    CategoryCountDto, CreatureDetailDto, DistributionResponseDto, HistogramBinDto,
    HistogramResponseDto, SearchResponseDto, StatMeanDto, StatValueDto, SummaryDto,
    SummaryResponseDto, TopResponseDto, TopRowDto, TypeMeansResponseDto, TypeMeansRowDto,
    API_VERSION,
};
pub use errors::{ApiError, ApiErrorCode};
pub use params::{
    parse_bins, parse_filter_selection, parse_search_term, parse_top_params, TopParams,
    MAX_SEARCH_BYTES,
};

pub const CRATE_NAME: &str = "bestiary-api";
