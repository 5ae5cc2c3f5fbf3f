// SPDX-License-Identifier: Apache-2.0

use crate::{RecordSource, SourceError};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Client;
use serde_json::Value;

/// Store backend over a MongoDB collection. The connection string is always
/// supplied by the caller (sourced from the environment at startup); it is
/// never embedded here.
pub struct MongoSource {
    client: Client,
    database: String,
    collection: String,
}

impl MongoSource {
    pub async fn connect(
        uri: &str,
        database: impl Into<String>,
        collection: impl Into<String>,
    ) -> Result<Self, SourceError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| SourceError::connect(format!("mongodb client init failed: {e}")))?;
        Ok(Self {
            client,
            database: database.into(),
            collection: collection.into(),
        })
    }
}

#[async_trait]
impl RecordSource for MongoSource {
    async fn fetch_all(&self) -> Result<Vec<Value>, SourceError> {
        let collection = self
            .client
            .database(&self.database)
            .collection::<Document>(&self.collection);
        // One find-all scan, no filter, no pagination: the whole collection
        // becomes the in-memory dataset.
        let cursor = collection
            .find(doc! {})
            .await
            .map_err(|e| SourceError::query(format!("find failed: {e}")))?;
        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| SourceError::query(format!("cursor drain failed: {e}")))?;
        documents
            .iter()
            .map(|d| {
                serde_json::to_value(d)
                    .map_err(|e| SourceError::decode(format!("document decode failed: {e}")))
            })
            .collect()
    }
}
