#![forbid(unsafe_code)]
//! Bestiary model SSOT: creature records, the load-once dataset, and the
//! non-owning filtered view handed to the query layer.

mod creature;
mod dataset;
mod view;

pub use creature::{CreatureRecord, DexNumber, StatAxis, StatBlock, UNKNOWN_TYPE};
pub use dataset::{keys, Dataset};
pub use view::FilteredView;

pub const CRATE_NAME: &str = "bestiary-model";
