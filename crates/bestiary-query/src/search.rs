// SPDX-License-Identifier: Apache-2.0

use bestiary_model::{CreatureRecord, Dataset};
use unicode_normalization::UnicodeNormalization;

/// Canonical lookup normalization policy: NFKC + Unicode lowercase.
#[must_use]
pub fn normalize_name_lookup(input: &str) -> String {
    input.nfkc().collect::<String>().to_lowercase()
}

/// Case-insensitive substring match against the name column. Always runs
/// against the full dataset: search is independent of the sidebar filters.
/// Zero matches is a no-results outcome, not an error.
#[must_use]
pub fn search_by_name<'a>(dataset: &'a Dataset, needle: &str) -> Vec<&'a CreatureRecord> {
    let needle = normalize_name_lookup(needle);
    dataset
        .iter()
        .filter(|r| normalize_name_lookup(&r.name).contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestiary_model::{DexNumber, StatBlock};

    fn named(name: &str) -> CreatureRecord {
        CreatureRecord {
            number: DexNumber::new(1),
            name: name.to_string(),
            primary_type: "Fire".to_string(),
            secondary_type: None,
            generation: 1,
            legendary: false,
            stats: StatBlock::default(),
            total: 0,
        }
    }

    #[test]
    fn match_is_case_insensitive() {
        let dataset = Dataset::from_records(vec![named("Charizard"), named("Squirtle")]);
        let hits = search_by_name(&dataset, "CHAR");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Charizard");
    }

    #[test]
    fn substring_matches_anywhere_in_the_name() {
        let dataset = Dataset::from_records(vec![named("Charizard"), named("Charmander")]);
        assert_eq!(search_by_name(&dataset, "char").len(), 2);
        assert_eq!(search_by_name(&dataset, "izar").len(), 1);
    }

    #[test]
    fn no_match_returns_empty_not_error() {
        let dataset = Dataset::from_records(vec![named("Charizard")]);
        assert!(search_by_name(&dataset, "zzz-no-such").is_empty());
    }

    #[test]
    fn normalization_folds_fullwidth_forms() {
        // NFKC maps fullwidth latin letters onto their ASCII forms.
        let dataset = Dataset::from_records(vec![named("Ｃｈａｒｉｚａｒｄ")]);
        assert_eq!(search_by_name(&dataset, "char").len(), 1);
    }
}
