// SPDX-License-Identifier: Apache-2.0

use crate::rank::RankColumn;
use bestiary_model::{CreatureRecord, Dataset, FilteredView, StatAxis};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Full-dataset reference values captured once at startup; summary deltas are
/// computed against these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Baseline {
    pub record_count: usize,
    pub mean_total: f64,
}

impl Baseline {
    #[must_use]
    pub fn of(dataset: &Dataset) -> Self {
        let view = FilteredView::all(dataset);
        Self {
            record_count: view.len(),
            mean_total: mean_total(&view),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Summary {
    pub total_count: usize,
    pub legendary_count: usize,
    pub legendary_pct: f64,
    pub mean_total: f64,
    pub count_delta: i64,
    pub mean_total_delta: f64,
    pub distinct_primary_types: usize,
}

fn mean_total(view: &FilteredView<'_>) -> f64 {
    if view.is_empty() {
        return 0.0;
    }
    let sum: u64 = view.iter().map(|r| u64::from(r.total)).sum();
    sum as f64 / view.len() as f64
}

/// Scalar summary statistics for a view. Every ratio is guarded against an
/// empty view: zero rows yields 0.0, never a NaN or a panic.
#[must_use]
pub fn summary_counts(view: &FilteredView<'_>, baseline: &Baseline) -> Summary {
    let total_count = view.len();
    let legendary_count = view.iter().filter(|r| r.legendary).count();
    let legendary_pct = if total_count == 0 {
        0.0
    } else {
        legendary_count as f64 / total_count as f64 * 100.0
    };
    let mean = mean_total(view);
    let distinct: BTreeSet<&str> = view.iter().map(|r| r.primary_type.as_str()).collect();
    Summary {
        total_count,
        legendary_count,
        legendary_pct,
        mean_total: mean,
        count_delta: total_count as i64 - baseline.record_count as i64,
        mean_total_delta: mean - baseline.mean_total,
        distinct_primary_types: distinct.len(),
    }
}

/// Categorical columns a view can be grouped or counted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupColumn {
    PrimaryType,
    Generation,
}

impl GroupColumn {
    fn key(self, record: &CreatureRecord) -> String {
        match self {
            Self::PrimaryType => record.primary_type.clone(),
            Self::Generation => record.generation.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupMeans {
    pub key: String,
    pub count: u64,
    /// Per-column means, parallel to the `values` argument of [`group_mean`].
    pub means: Vec<f64>,
}

/// Per-group means over the requested columns, one entry per distinct group
/// key present in the view, sorted by the designated column's mean
/// descending (key ascending on ties). Group counts sum to `view.len()`.
#[must_use]
pub fn group_mean(
    view: &FilteredView<'_>,
    group: GroupColumn,
    values: &[RankColumn],
    sort_by: RankColumn,
) -> Vec<GroupMeans> {
    struct Acc {
        count: u64,
        sums: Vec<u64>,
        sort_sum: u64,
    }

    let mut groups: BTreeMap<String, Acc> = BTreeMap::new();
    for record in view.iter() {
        let acc = groups.entry(group.key(record)).or_insert_with(|| Acc {
            count: 0,
            sums: vec![0; values.len()],
            sort_sum: 0,
        });
        acc.count += 1;
        for (slot, column) in acc.sums.iter_mut().zip(values) {
            *slot += u64::from(column.value(record));
        }
        acc.sort_sum += u64::from(sort_by.value(record));
    }

    let mut out: Vec<(f64, GroupMeans)> = groups
        .into_iter()
        .map(|(key, acc)| {
            let count = acc.count as f64;
            let sort_mean = acc.sort_sum as f64 / count;
            let means = acc.sums.iter().map(|&s| s as f64 / count).collect();
            (
                sort_mean,
                GroupMeans {
                    key,
                    count: acc.count,
                    means,
                },
            )
        })
        .collect();
    // BTreeMap iteration already ordered the keys, so the stable sort keeps
    // key order within equal sort means.
    out.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    out.into_iter().map(|(_, g)| g).collect()
}

/// Category → row count for a categorical column. Consumers sort by key or by
/// count as needed.
#[must_use]
pub fn value_distribution(view: &FilteredView<'_>, column: GroupColumn) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for record in view.iter() {
        *counts.entry(column.key(record)).or_insert(0) += 1;
    }
    counts
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistogramBin {
    pub lower: u32,
    /// Inclusive upper bound of the bin.
    pub upper: u32,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

/// Fixed-width histogram of the total column over the view's observed range.
/// An empty view or a zero bin request yields an empty histogram; a view
/// where every total is equal degenerates to a single bin.
#[must_use]
pub fn total_histogram(view: &FilteredView<'_>, bin_count: usize) -> Histogram {
    if view.is_empty() || bin_count == 0 {
        return Histogram::default();
    }
    let mut min = u32::MAX;
    let mut max = 0;
    for record in view.iter() {
        min = min.min(record.total);
        max = max.max(record.total);
    }
    let span = u64::from(max - min) + 1;
    let width = span.div_ceil(bin_count as u64).max(1);
    let used_bins = span.div_ceil(width) as usize;

    let mut bins: Vec<HistogramBin> = (0..used_bins)
        .map(|i| {
            let lower = u64::from(min) + i as u64 * width;
            let upper = (lower + width - 1).min(u64::from(max));
            HistogramBin {
                lower: lower as u32,
                upper: upper as u32,
                count: 0,
            }
        })
        .collect();
    for record in view.iter() {
        let index = (u64::from(record.total - min) / width) as usize;
        bins[index].count += 1;
    }
    Histogram { bins }
}

/// Mean of each stat column in fixed axis order, for radial-chart rendering.
/// An empty view yields 0.0 on every axis.
#[must_use]
pub fn stat_means(view: &FilteredView<'_>) -> Vec<(StatAxis, f64)> {
    let len = view.len();
    StatAxis::ALL
        .iter()
        .map(|&axis| {
            if len == 0 {
                return (axis, 0.0);
            }
            let sum: u64 = view.iter().map(|r| u64::from(axis.of(&r.stats))).sum();
            (axis, sum as f64 / len as f64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestiary_model::{CreatureRecord, DexNumber, StatBlock};

    fn record(primary_type: &str, total: u32, legendary: bool) -> CreatureRecord {
        CreatureRecord {
            number: DexNumber::new(0),
            name: String::new(),
            primary_type: primary_type.to_string(),
            secondary_type: None,
            generation: 1,
            legendary,
            stats: StatBlock {
                hp: total,
                ..StatBlock::default()
            },
            total,
        }
    }

    #[test]
    fn summary_on_empty_view_is_all_zeros() {
        let dataset = Dataset::from_records(vec![]);
        let view = FilteredView::all(&dataset);
        let summary = summary_counts(&view, &Baseline::default());
        assert_eq!(summary.total_count, 0);
        assert_eq!(summary.legendary_pct, 0.0);
        assert_eq!(summary.mean_total, 0.0);
        assert!(summary.mean_total.is_finite());
    }

    #[test]
    fn summary_deltas_are_relative_to_baseline() {
        let dataset = Dataset::from_records(vec![
            record("Fire", 400, false),
            record("Water", 600, true),
        ]);
        let baseline = Baseline::of(&dataset);
        let view = FilteredView::from_rows(vec![&dataset.records()[1]]);
        let summary = summary_counts(&view, &baseline);
        assert_eq!(summary.total_count, 1);
        assert_eq!(summary.count_delta, -1);
        assert_eq!(summary.legendary_count, 1);
        assert_eq!(summary.legendary_pct, 100.0);
        assert_eq!(summary.mean_total, 600.0);
        assert_eq!(summary.mean_total_delta, 100.0);
        assert_eq!(summary.distinct_primary_types, 1);
    }

    #[test]
    fn group_mean_counts_cover_the_view() {
        let dataset = Dataset::from_records(vec![
            record("Fire", 400, false),
            record("Fire", 600, false),
            record("Water", 300, false),
        ]);
        let view = FilteredView::all(&dataset);
        let groups = group_mean(
            &view,
            GroupColumn::PrimaryType,
            &[RankColumn::Hp, RankColumn::Total],
            RankColumn::Total,
        );
        assert_eq!(groups.len(), 2);
        let total: u64 = groups.iter().map(|g| g.count).sum();
        assert_eq!(total as usize, view.len());
        // Sorted by mean total descending: Fire (500) before Water (300).
        assert_eq!(groups[0].key, "Fire");
        assert_eq!(groups[0].means, vec![500.0, 500.0]);
        assert_eq!(groups[1].key, "Water");
    }

    #[test]
    fn value_distribution_counts_categories() {
        let dataset = Dataset::from_records(vec![
            record("Fire", 1, false),
            record("Fire", 2, false),
            record("Water", 3, false),
        ]);
        let view = FilteredView::all(&dataset);
        let counts = value_distribution(&view, GroupColumn::PrimaryType);
        assert_eq!(counts.get("Fire"), Some(&2));
        assert_eq!(counts.get("Water"), Some(&1));
    }

    #[test]
    fn histogram_covers_range_and_counts_every_row() {
        let dataset = Dataset::from_records(vec![
            record("a", 100, false),
            record("a", 150, false),
            record("a", 199, false),
            record("a", 400, false),
        ]);
        let view = FilteredView::all(&dataset);
        let histogram = total_histogram(&view, 3);
        let counted: u64 = histogram.bins.iter().map(|b| b.count).sum();
        assert_eq!(counted, 4);
        assert_eq!(histogram.bins.first().expect("first bin").lower, 100);
        assert_eq!(histogram.bins.last().expect("last bin").upper, 400);
    }

    #[test]
    fn histogram_degenerate_cases() {
        let empty = Dataset::from_records(vec![]);
        assert!(total_histogram(&FilteredView::all(&empty), 30).bins.is_empty());

        let dataset = Dataset::from_records(vec![record("a", 500, false)]);
        let view = FilteredView::all(&dataset);
        assert!(total_histogram(&view, 0).bins.is_empty());

        let flat = total_histogram(&view, 30);
        assert_eq!(flat.bins.len(), 1);
        assert_eq!(flat.bins[0].lower, 500);
        assert_eq!(flat.bins[0].upper, 500);
        assert_eq!(flat.bins[0].count, 1);
    }

    #[test]
    fn stat_means_keeps_fixed_axis_order() {
        let dataset = Dataset::from_records(vec![record("a", 80, false)]);
        let view = FilteredView::all(&dataset);
        let means = stat_means(&view);
        assert_eq!(means.len(), 6);
        assert_eq!(means[0].0, StatAxis::Hp);
        assert_eq!(means[0].1, 80.0);
        assert_eq!(means[1].1, 0.0);
    }
}
