// SPDX-License-Identifier: Apache-2.0

use bestiary_model::{CreatureRecord, Dataset, FilteredView};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The three independent predicates supplied by the presentation layer on
/// every render cycle. An empty generation or type set means "no filter
/// applied": the default UI state has every option selected, which is
/// equivalent to no selection at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FilterSelection {
    pub generations: BTreeSet<u32>,
    pub primary_types: BTreeSet<String>,
    pub legendary_only: bool,
}

impl FilterSelection {
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.generations.is_empty() && self.primary_types.is_empty() && !self.legendary_only
    }

    fn retains(&self, record: &CreatureRecord) -> bool {
        if !self.generations.is_empty() && !self.generations.contains(&record.generation) {
            return false;
        }
        if !self.primary_types.is_empty() && !self.primary_types.contains(&record.primary_type) {
            return false;
        }
        if self.legendary_only && !record.legendary {
            return false;
        }
        true
    }
}

/// Produces the row subset retained by all three predicates, preserving
/// dataset order. Unknown values in a selection simply match zero rows; there
/// are no error conditions.
#[must_use]
pub fn apply_filters<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> FilteredView<'a> {
    FilteredView::from_rows(dataset.iter().filter(|r| selection.retains(r)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestiary_model::{DexNumber, StatBlock};

    fn record(generation: u32, primary_type: &str, legendary: bool) -> CreatureRecord {
        CreatureRecord {
            number: DexNumber::new(generation),
            name: format!("{primary_type}-{generation}"),
            primary_type: primary_type.to_string(),
            secondary_type: None,
            generation,
            legendary,
            stats: StatBlock::default(),
            total: 0,
        }
    }

    #[test]
    fn empty_selection_retains_every_row_in_order() {
        let dataset = Dataset::from_records(vec![
            record(1, "Fire", false),
            record(2, "Water", true),
            record(3, "Grass", false),
        ]);
        let view = apply_filters(&dataset, &FilterSelection::default());
        assert_eq!(view.len(), 3);
        let gens: Vec<_> = view.iter().map(|r| r.generation).collect();
        assert_eq!(gens, [1, 2, 3]);
    }

    #[test]
    fn unknown_selection_values_match_zero_rows() {
        let dataset = Dataset::from_records(vec![record(1, "Fire", false)]);
        let selection = FilterSelection {
            generations: BTreeSet::from([9]),
            ..Default::default()
        };
        assert!(apply_filters(&dataset, &selection).is_empty());

        let selection = FilterSelection {
            primary_types: BTreeSet::from(["Dragon".to_string()]),
            ..Default::default()
        };
        assert!(apply_filters(&dataset, &selection).is_empty());
    }

    #[test]
    fn predicates_compose_conjunctively() {
        let dataset = Dataset::from_records(vec![
            record(1, "Fire", true),
            record(1, "Fire", false),
            record(2, "Fire", true),
            record(1, "Water", true),
        ]);
        let selection = FilterSelection {
            generations: BTreeSet::from([1]),
            primary_types: BTreeSet::from(["Fire".to_string()]),
            legendary_only: true,
        };
        let view = apply_filters(&dataset, &selection);
        assert_eq!(view.len(), 1);
        assert!(view.rows()[0].legendary);
        assert_eq!(view.rows()[0].generation, 1);
    }
}
