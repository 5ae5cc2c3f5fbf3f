// SPDX-License-Identifier: Apache-2.0

use crate::creature::{CreatureRecord, DexNumber, StatBlock, UNKNOWN_TYPE};
use serde_json::Value;

/// Field names as they appear in the source documents.
pub mod keys {
    pub const NUMBER: &str = "#";
    pub const NAME: &str = "Name";
    pub const PRIMARY_TYPE: &str = "Type 1";
    pub const SECONDARY_TYPE: &str = "Type 2";
    pub const GENERATION: &str = "Generation";
    pub const LEGENDARY: &str = "Legendary";
    pub const HP: &str = "HP";
    pub const ATTACK: &str = "Attack";
    pub const DEFENSE: &str = "Defense";
    pub const SPEED: &str = "Speed";
    pub const TOTAL: &str = "Total";
    pub const SPECIAL: &str = "Sp";
    pub const SPECIAL_ATTACK: &str = "Atk";
    pub const SPECIAL_DEFENSE: &str = "Def";
}

fn num_field(doc: &Value, key: &str) -> u32 {
    match doc.get(key).and_then(Value::as_f64) {
        Some(v) if v.is_finite() && v >= 0.0 => v as u32,
        _ => 0,
    }
}

fn text_field(doc: &Value, key: &str) -> Option<String> {
    let raw = doc.get(key)?.as_str()?.trim();
    if raw.is_empty() {
        return None;
    }
    Some(raw.to_string())
}

fn bool_field(doc: &Value, key: &str) -> bool {
    match doc.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

// Row-independent flattening policy: a mapping contributes its sub-keys
// (each defaulting to 0), anything else contributes 0/0. The derived
// columns exist on every row regardless of input order.
fn special_pair(doc: &Value) -> (u32, u32) {
    match doc.get(keys::SPECIAL) {
        Some(nested @ Value::Object(_)) => (
            num_field(nested, keys::SPECIAL_ATTACK),
            num_field(nested, keys::SPECIAL_DEFENSE),
        ),
        _ => (0, 0),
    }
}

impl CreatureRecord {
    /// Shapes one raw store document into a record. Absent or malformed
    /// numeric fields default to 0, an absent primary type becomes the
    /// [`UNKNOWN_TYPE`] sentinel, and an absent total is recomputed from the
    /// stat columns.
    #[must_use]
    pub fn from_document(doc: &Value) -> Self {
        let (special_attack, special_defense) = special_pair(doc);
        let stats = StatBlock {
            hp: num_field(doc, keys::HP),
            attack: num_field(doc, keys::ATTACK),
            defense: num_field(doc, keys::DEFENSE),
            speed: num_field(doc, keys::SPEED),
            special_attack,
            special_defense,
        };
        let total = match doc.get(keys::TOTAL).and_then(Value::as_f64) {
            Some(v) if v.is_finite() && v >= 0.0 => v as u32,
            _ => stats.sum(),
        };
        Self {
            number: DexNumber::new(num_field(doc, keys::NUMBER)),
            name: text_field(doc, keys::NAME).unwrap_or_default(),
            primary_type: text_field(doc, keys::PRIMARY_TYPE)
                .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
            secondary_type: text_field(doc, keys::SECONDARY_TYPE),
            generation: num_field(doc, keys::GENERATION),
            legendary: bool_field(doc, keys::LEGENDARY),
            stats,
            total,
        }
    }
}

/// The load-once, read-only record collection. Built from the store's raw
/// documents at process start and shared behind an `Arc` for the rest of the
/// session; nothing downstream mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    records: Vec<CreatureRecord>,
}

impl Dataset {
    #[must_use]
    pub fn from_documents(docs: &[Value]) -> Self {
        Self {
            records: docs.iter().map(CreatureRecord::from_document).collect(),
        }
    }

    #[must_use]
    pub fn from_records(records: Vec<CreatureRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[CreatureRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CreatureRecord> {
        self.records.iter()
    }
}
