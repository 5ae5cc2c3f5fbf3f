#![forbid(unsafe_code)]
//! Record-source boundary: one operation, fetch every document from the
//! backing collection. No query pushdown, no pagination, no retry; a fetch
//! failure at startup is terminal for the session.

mod fake;
mod mongo;

use async_trait::async_trait;
use serde_json::Value;

pub use fake::StaticSource;
pub use mongo::MongoSource;

pub const CRATE_NAME: &str = "bestiary-source";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceErrorKind {
    Connect,
    Query,
    Decode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    pub kind: SourceErrorKind,
    pub message: String,
}

impl SourceError {
    #[must_use]
    pub fn new(kind: SourceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn connect(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Connect, message)
    }

    #[must_use]
    pub fn query(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Query, message)
    }

    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Decode, message)
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}
impl std::error::Error for SourceError {}

/// Port over the remote document store. Implementations return the raw
/// documents of the whole collection, unordered, untyped; the dataset builder
/// owns all shaping and defaulting.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Value>, SourceError>;
}
