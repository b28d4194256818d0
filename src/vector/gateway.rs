//! Vector index gateway contract
//!
//! The assistant only depends on this narrow interface: bulk upsert of
//! text + metadata, similarity query over a service-side embedding of the
//! query text, and an index stats call used to decide whether the one-time
//! bulk load is needed. Tests substitute deterministic fakes.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::errors::Result;

/// Metadata mapping stored alongside a vector
pub type Metadata = Map<String, Value>;

/// One item handed to the index for embedding and storage
#[derive(Debug, Clone)]
pub struct UpsertItem {
    pub id: String,
    /// Text the service embeds
    pub text: String,
    /// Must carry at least `title` and `content`; the index does not echo
    /// back the embedded text at query time
    pub metadata: Metadata,
}

/// One similarity match, ranked by descending score
#[derive(Debug, Clone)]
pub struct ScoredMatch {
    pub id: String,
    pub score: f64,
    pub metadata: Metadata,
}

/// Index statistics
#[derive(Debug, Clone, Default)]
pub struct IndexInfo {
    pub vector_count: u64,
    pub pending_vector_count: u64,
    pub dimension: u64,
}

/// Similarity index with service-side embeddings
#[async_trait]
pub trait VectorIndexGateway: Send + Sync {
    /// Store items; called once, only when the index reports zero vectors
    async fn upsert(&self, items: Vec<UpsertItem>) -> Result<()>;

    /// Top-k similarity search for the service's embedding of `text`
    async fn query(
        &self,
        text: &str,
        top_k: usize,
        include_metadata: bool,
    ) -> Result<Vec<ScoredMatch>>;

    /// Index statistics; `vector_count` gates the bulk load
    async fn info(&self) -> Result<IndexInfo>;
}
