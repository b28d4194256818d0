//! Upstash Vector REST adapter
//!
//! Talks to an Upstash-style vector index with built-in embeddings:
//! - POST /upsert-data  — store raw text, the service embeds it
//! - POST /query-data   — similarity search for the embedding of a query
//! - GET  /info         — index statistics
//!
//! All responses arrive wrapped in a `{"result": ...}` envelope and are
//! authorized with a bearer token.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::{Result, TwinError};
use crate::vector::gateway::{IndexInfo, Metadata, ScoredMatch, UpsertItem, VectorIndexGateway};

/// Request timeout for index calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// REST client for an Upstash-style vector index
#[derive(Debug, Clone)]
pub struct UpstashVectorClient {
    client: Client,
    base_url: String,
    token: String,
}

#[derive(Debug, Serialize)]
struct UpsertRecord {
    id: String,
    data: String,
    metadata: Metadata,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest {
    data: String,
    top_k: usize,
    include_metadata: bool,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    result: T,
}

#[derive(Debug, Deserialize)]
struct QueryMatch {
    #[serde(default)]
    id: String,
    #[serde(default)]
    score: f64,
    #[serde(default)]
    metadata: Option<Metadata>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct InfoResponse {
    vector_count: u64,
    pending_vector_count: u64,
    dimension: u64,
}

impl UpstashVectorClient {
    /// Create a client for the given index URL and REST token
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(TwinError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TwinError::Retrieval(format!("HTTP {}: {}", status, body)));
        }
        Ok(response)
    }
}

#[async_trait]
impl VectorIndexGateway for UpstashVectorClient {
    async fn upsert(&self, items: Vec<UpsertItem>) -> Result<()> {
        let records: Vec<UpsertRecord> = items
            .into_iter()
            .map(|item| UpsertRecord {
                id: item.id,
                data: item.text,
                metadata: item.metadata,
            })
            .collect();

        let response = self
            .client
            .post(self.endpoint("upsert-data"))
            .bearer_auth(&self.token)
            .json(&records)
            .send()
            .await
            .map_err(|e| TwinError::Retrieval(format!("upsert failed: {}", e)))?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn query(
        &self,
        text: &str,
        top_k: usize,
        include_metadata: bool,
    ) -> Result<Vec<ScoredMatch>> {
        let request = QueryRequest {
            data: text.to_string(),
            top_k,
            include_metadata,
        };

        let response = self
            .client
            .post(self.endpoint("query-data"))
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await
            .map_err(|e| TwinError::Retrieval(format!("query failed: {}", e)))?;

        let envelope: Envelope<Vec<QueryMatch>> = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| TwinError::Retrieval(format!("malformed query response: {}", e)))?;

        Ok(envelope
            .result
            .into_iter()
            .map(|m| ScoredMatch {
                id: m.id,
                score: m.score,
                metadata: m.metadata.unwrap_or_default(),
            })
            .collect())
    }

    async fn info(&self) -> Result<IndexInfo> {
        let response = self
            .client
            .get(self.endpoint("info"))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| TwinError::Retrieval(format!("info failed: {}", e)))?;

        let envelope: Envelope<InfoResponse> = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| TwinError::Retrieval(format!("malformed info response: {}", e)))?;

        Ok(IndexInfo {
            vector_count: envelope.result.vector_count,
            pending_vector_count: envelope.result.pending_vector_count,
            dimension: envelope.result.dimension,
        })
    }
}
