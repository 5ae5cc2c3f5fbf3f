// SPDX-License-Identifier: Apache-2.0

use bestiary_model::{CreatureRecord, FilteredView};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnError(pub String);

impl std::fmt::Display for ColumnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for ColumnError {}

/// Numeric columns a view can be ranked or grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RankColumn {
    Total,
    Hp,
    Attack,
    Defense,
    Speed,
    SpecialAttack,
    SpecialDefense,
}

impl RankColumn {
    pub fn parse(raw: &str) -> Result<Self, ColumnError> {
        match raw {
            "total" => Ok(Self::Total),
            "hp" => Ok(Self::Hp),
            "attack" => Ok(Self::Attack),
            "defense" => Ok(Self::Defense),
            "speed" => Ok(Self::Speed),
            "special_attack" => Ok(Self::SpecialAttack),
            "special_defense" => Ok(Self::SpecialDefense),
            other => Err(ColumnError(format!("unknown rank column: {other}"))),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Hp => "hp",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::Speed => "speed",
            Self::SpecialAttack => "special_attack",
            Self::SpecialDefense => "special_defense",
        }
    }

    #[must_use]
    pub const fn value(self, record: &CreatureRecord) -> u32 {
        match self {
            Self::Total => record.total,
            Self::Hp => record.stats.hp,
            Self::Attack => record.stats.attack,
            Self::Defense => record.stats.defense,
            Self::Speed => record.stats.speed,
            Self::SpecialAttack => record.stats.special_attack,
            Self::SpecialDefense => record.stats.special_defense,
        }
    }
}

/// Top `n` rows by the chosen column, descending. The sort is stable, so
/// ties keep their original dataset order. Returns exactly
/// `min(n, view.len())` rows for any `n`.
#[must_use]
pub fn top_n<'a>(view: &FilteredView<'a>, n: usize, by: RankColumn) -> Vec<&'a CreatureRecord> {
    let mut rows: Vec<&'a CreatureRecord> = view.rows().to_vec();
    rows.sort_by(|a, b| by.value(b).cmp(&by.value(a)));
    rows.truncate(n);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestiary_model::{Dataset, DexNumber, StatBlock};

    fn record(number: u32, total: u32) -> CreatureRecord {
        CreatureRecord {
            number: DexNumber::new(number),
            name: format!("r{number}"),
            primary_type: "Normal".to_string(),
            secondary_type: None,
            generation: 1,
            legendary: false,
            stats: StatBlock::default(),
            total,
        }
    }

    #[test]
    fn ranks_descending_and_truncates() {
        let dataset = Dataset::from_records(vec![record(1, 300), record(2, 500), record(3, 400)]);
        let view = FilteredView::all(&dataset);
        let top = top_n(&view, 2, RankColumn::Total);
        let numbers: Vec<_> = top.iter().map(|r| r.number.value()).collect();
        assert_eq!(numbers, [2, 3]);
    }

    #[test]
    fn ties_keep_original_row_order() {
        let dataset = Dataset::from_records(vec![record(7, 400), record(8, 400), record(9, 400)]);
        let view = FilteredView::all(&dataset);
        let top = top_n(&view, 3, RankColumn::Total);
        let numbers: Vec<_> = top.iter().map(|r| r.number.value()).collect();
        assert_eq!(numbers, [7, 8, 9]);
    }

    #[test]
    fn n_zero_and_oversized_n_are_safe() {
        let dataset = Dataset::from_records(vec![record(1, 100)]);
        let view = FilteredView::all(&dataset);
        assert!(top_n(&view, 0, RankColumn::Total).is_empty());
        assert_eq!(top_n(&view, 50, RankColumn::Total).len(), 1);
    }

    #[test]
    fn column_parse_round_trips() {
        for col in [
            RankColumn::Total,
            RankColumn::Hp,
            RankColumn::Attack,
            RankColumn::Defense,
            RankColumn::Speed,
            RankColumn::SpecialAttack,
            RankColumn::SpecialDefense,
        ] {
            assert_eq!(RankColumn::parse(col.as_str()).expect("parse"), col);
        }
        assert!(RankColumn::parse("height").is_err());
    }
}
