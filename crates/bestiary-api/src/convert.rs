// SPDX-License-Identifier: Apache-2.0

use crate::dto::{
    CategoryCountDto, CreatureDetailDto, HistogramBinDto, StatMeanDto, StatValueDto, SummaryDto,
    TopRowDto, TypeMeansRowDto,
};
use bestiary_model::{CreatureRecord, StatAxis};
use bestiary_query::{GroupMeans, Histogram, RankColumn, Summary};
use std::collections::BTreeMap;

/// Column order the per-type means table is built with; `type_means_rows`
/// assumes `GroupMeans::means` is parallel to this.
pub const TYPE_MEANS_COLUMNS: [RankColumn; 5] = [
    RankColumn::Hp,
    RankColumn::Attack,
    RankColumn::Defense,
    RankColumn::Speed,
    RankColumn::Total,
];

impl From<Summary> for SummaryDto {
    fn from(summary: Summary) -> Self {
        Self {
            shown: summary.total_count,
            legendary: summary.legendary_count,
            legendary_pct: summary.legendary_pct,
            mean_total: summary.mean_total,
            count_delta: summary.count_delta,
            mean_total_delta: summary.mean_total_delta,
            distinct_primary_types: summary.distinct_primary_types,
        }
    }
}

#[must_use]
pub fn top_rows(records: &[&CreatureRecord]) -> Vec<TopRowDto> {
    records
        .iter()
        .map(|r| TopRowDto {
            number: r.number.value(),
            name: r.name.clone(),
            primary_type: r.primary_type.clone(),
            secondary_type: r.secondary_type.clone(),
            total: r.total,
            hp: r.stats.hp,
            attack: r.stats.attack,
            defense: r.stats.defense,
            legendary: r.legendary,
        })
        .collect()
}

#[must_use]
pub fn type_means_rows(groups: &[GroupMeans]) -> Vec<TypeMeansRowDto> {
    groups
        .iter()
        .map(|g| {
            let mean = |i: usize| g.means.get(i).copied().unwrap_or(0.0);
            TypeMeansRowDto {
                primary_type: g.key.clone(),
                count: g.count,
                hp: mean(0),
                attack: mean(1),
                defense: mean(2),
                speed: mean(3),
                total: mean(4),
            }
        })
        .collect()
}

/// Distribution ordered by category key ascending (generation axes).
#[must_use]
pub fn distribution_by_key(counts: &BTreeMap<String, u64>) -> Vec<CategoryCountDto> {
    counts
        .iter()
        .map(|(category, &count)| CategoryCountDto {
            category: category.clone(),
            count,
        })
        .collect()
}

/// Distribution ordered by count descending, key ascending on ties (the
/// type-share pie).
#[must_use]
pub fn distribution_by_count(counts: &BTreeMap<String, u64>) -> Vec<CategoryCountDto> {
    let mut out = distribution_by_key(counts);
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

#[must_use]
pub fn histogram_bins(histogram: &Histogram) -> Vec<HistogramBinDto> {
    histogram
        .bins
        .iter()
        .map(|b| HistogramBinDto {
            lower: b.lower,
            upper: b.upper,
            count: b.count,
        })
        .collect()
}

#[must_use]
pub fn stat_mean_axes(means: &[(StatAxis, f64)]) -> Vec<StatMeanDto> {
    means
        .iter()
        .map(|&(axis, mean)| StatMeanDto {
            axis: axis.label().to_string(),
            mean,
        })
        .collect()
}

#[must_use]
pub fn creature_detail(record: &CreatureRecord) -> CreatureDetailDto {
    CreatureDetailDto {
        number: record.number.value(),
        name: record.name.clone(),
        primary_type: record.primary_type.clone(),
        secondary_type: record.secondary_type.clone(),
        generation: record.generation,
        legendary: record.legendary,
        total: record.total,
        stats: StatAxis::ALL
            .iter()
            .map(|&axis| StatValueDto {
                axis: axis.label().to_string(),
                value: axis.of(&record.stats),
            })
            .collect(),
    }
}
