// SPDX-License-Identifier: Apache-2.0

//! End-to-end pass over a small fixture: raw documents → dataset → filter →
//! aggregate, the same pipeline the server runs per request.

use bestiary_model::{Dataset, FilteredView};
use bestiary_query::{
    apply_filters, group_mean, search_by_name, stat_means, summary_counts, total_histogram,
    value_distribution, Baseline, FilterSelection, GroupColumn, RankColumn,
};
use serde_json::{json, Value};
use std::collections::BTreeSet;

fn fixture_documents() -> Vec<Value> {
    vec![
        json!({"#": 1, "Name": "Bulbasaur", "Type 1": "Grass", "Type 2": "Poison",
               "Generation": 1, "Legendary": false, "HP": 45, "Attack": 49,
               "Defense": 49, "Speed": 45, "Sp": {"Atk": 65, "Def": 65}, "Total": 318}),
        json!({"#": 6, "Name": "Charizard", "Type 1": "Fire", "Type 2": "Flying",
               "Generation": 1, "Legendary": false, "HP": 78, "Attack": 84,
               "Defense": 78, "Speed": 100, "Sp": {"Atk": 109, "Def": 85}, "Total": 534}),
        json!({"#": 150, "Name": "Mewtwo", "Type 1": "Psychic",
               "Generation": 1, "Legendary": true, "HP": 106, "Attack": 110,
               "Defense": 90, "Speed": 130, "Sp": {"Atk": 154, "Def": 90}, "Total": 680}),
        json!({"#": 255, "Name": "Torchic", "Type 1": "Fire",
               "Generation": 3, "Legendary": false, "HP": 45, "Attack": 60,
               "Defense": 40, "Speed": 45, "Sp": {"Atk": 70, "Def": 50}, "Total": 310}),
    ]
}

#[test]
fn pipeline_matches_hand_computed_reference() {
    let dataset = Dataset::from_documents(&fixture_documents());
    let baseline = Baseline::of(&dataset);

    let selection = FilterSelection {
        generations: BTreeSet::from([1]),
        ..Default::default()
    };
    let view = apply_filters(&dataset, &selection);
    assert_eq!(view.len(), 3);

    let summary = summary_counts(&view, &baseline);
    assert_eq!(summary.total_count, 3);
    assert_eq!(summary.legendary_count, 1);
    assert!((summary.legendary_pct - 100.0 / 3.0).abs() < 1e-9);
    assert!((summary.mean_total - (318.0 + 534.0 + 680.0) / 3.0).abs() < 1e-9);
    assert_eq!(summary.count_delta, -1);
    assert_eq!(summary.distinct_primary_types, 3);
}

#[test]
fn type_means_table_is_sorted_by_designated_column() {
    let dataset = Dataset::from_documents(&fixture_documents());
    let view = FilteredView::all(&dataset);
    let groups = group_mean(
        &view,
        GroupColumn::PrimaryType,
        &[
            RankColumn::Hp,
            RankColumn::Attack,
            RankColumn::Defense,
            RankColumn::Speed,
            RankColumn::Total,
        ],
        RankColumn::Total,
    );
    let keys: Vec<_> = groups.iter().map(|g| g.key.as_str()).collect();
    // Mean totals: Psychic 680, Fire (534+310)/2 = 422, Grass 318.
    assert_eq!(keys, ["Psychic", "Fire", "Grass"]);
    let fire = &groups[1];
    assert_eq!(fire.count, 2);
    assert_eq!(fire.means[4], 422.0);
    let counted: u64 = groups.iter().map(|g| g.count).sum();
    assert_eq!(counted as usize, view.len());
}

#[test]
fn distributions_cover_generations_and_types() {
    let dataset = Dataset::from_documents(&fixture_documents());
    let view = FilteredView::all(&dataset);

    let by_generation = value_distribution(&view, GroupColumn::Generation);
    assert_eq!(by_generation.get("1"), Some(&3));
    assert_eq!(by_generation.get("3"), Some(&1));

    let by_type = value_distribution(&view, GroupColumn::PrimaryType);
    assert_eq!(by_type.get("Fire"), Some(&2));
    assert_eq!(by_type.len(), 3);
}

#[test]
fn histogram_and_stat_means_agree_with_fixture() {
    let dataset = Dataset::from_documents(&fixture_documents());
    let view = FilteredView::all(&dataset);

    let histogram = total_histogram(&view, 30);
    let counted: u64 = histogram.bins.iter().map(|b| b.count).sum();
    assert_eq!(counted, 4);

    let means = stat_means(&view);
    let hp_mean = means[0].1;
    assert!((hp_mean - (45.0 + 78.0 + 106.0 + 45.0) / 4.0).abs() < 1e-9);
}

#[test]
fn search_runs_against_the_unfiltered_dataset() {
    let dataset = Dataset::from_documents(&fixture_documents());
    // A generation-1 filter is active in the UI, yet search still reaches
    // the generation-3 Torchic.
    let hits = search_by_name(&dataset, "torch");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Torchic");
    assert!(search_by_name(&dataset, "zzz-no-such").is_empty());
}
