#![forbid(unsafe_code)]
//! Pure, stateless query layer: filtering, aggregation, ranking, and name
//! search over a built [`bestiary_model::Dataset`]. Nothing here performs IO
//! or mutates the dataset.

mod aggregate;
mod filters;
mod rank;
mod search;

pub use aggregate::{
    group_mean, stat_means, summary_counts, total_histogram, value_distribution, Baseline,
    GroupColumn, GroupMeans, Histogram, HistogramBin, Summary,
};
pub use filters::{apply_filters, FilterSelection};
pub use rank::{top_n, ColumnError, RankColumn};
pub use search::{normalize_name_lookup, search_by_name};

pub const CRATE_NAME: &str = "bestiary-query";
