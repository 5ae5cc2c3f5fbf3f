// SPDX-License-Identifier: Apache-2.0

use crate::{RecordSource, SourceError};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

/// In-memory fixture backend for tests: serves a fixed document list, counts
/// fetch calls, and can be armed to fail.
pub struct StaticSource {
    pub documents: Mutex<Vec<Value>>,
    pub fetch_calls: AtomicU64,
    pub fail_with: Mutex<Option<SourceError>>,
}

impl Default for StaticSource {
    fn default() -> Self {
        Self {
            documents: Mutex::new(Vec::new()),
            fetch_calls: AtomicU64::new(0),
            fail_with: Mutex::new(None),
        }
    }
}

impl StaticSource {
    #[must_use]
    pub fn with_documents(documents: Vec<Value>) -> Self {
        Self {
            documents: Mutex::new(documents),
            ..Self::default()
        }
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    async fn fetch_all(&self) -> Result<Vec<Value>, SourceError> {
        self.fetch_calls.fetch_add(1, Ordering::Relaxed);
        if let Some(err) = self.fail_with.lock().await.clone() {
            return Err(err);
        }
        Ok(self.documents.lock().await.clone())
    }
}
