// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Sentinel category for records whose primary type is absent or blank.
pub const UNKNOWN_TYPE: &str = "unknown";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord, Default,
)]
#[serde(transparent)]
pub struct DexNumber(u32);

impl DexNumber {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Display for DexNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The six base-stat columns. All fields are non-negative; absent source
/// fields default to 0 uniformly across the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct StatBlock {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub special_attack: u32,
    pub special_defense: u32,
}

impl StatBlock {
    #[must_use]
    pub const fn sum(&self) -> u32 {
        self.hp
            .saturating_add(self.attack)
            .saturating_add(self.defense)
            .saturating_add(self.speed)
            .saturating_add(self.special_attack)
            .saturating_add(self.special_defense)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StatAxis {
    Hp,
    Attack,
    Defense,
    Speed,
    SpecialAttack,
    SpecialDefense,
}

impl StatAxis {
    /// Fixed axis order used for radial-chart vectors.
    pub const ALL: [Self; 6] = [
        Self::Hp,
        Self::Attack,
        Self::Defense,
        Self::Speed,
        Self::SpecialAttack,
        Self::SpecialDefense,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::Speed => "Speed",
            Self::SpecialAttack => "Sp. Atk",
            Self::SpecialDefense => "Sp. Def",
        }
    }

    #[must_use]
    pub const fn of(self, stats: &StatBlock) -> u32 {
        match self {
            Self::Hp => stats.hp,
            Self::Attack => stats.attack,
            Self::Defense => stats.defense,
            Self::Speed => stats.speed,
            Self::SpecialAttack => stats.special_attack,
            Self::SpecialDefense => stats.special_defense,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatureRecord {
    pub number: DexNumber,
    pub name: String,
    pub primary_type: String,
    pub secondary_type: Option<String>,
    pub generation: u32,
    pub legendary: bool,
    pub stats: StatBlock,
    pub total: u32,
}
