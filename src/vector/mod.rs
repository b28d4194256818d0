//! Vector index integration
//!
//! The gateway trait is the only surface the pipeline depends on; the
//! Upstash adapter is the production implementation.

pub mod gateway;
pub mod upstash;

pub use gateway::{IndexInfo, Metadata, ScoredMatch, UpsertItem, VectorIndexGateway};
pub use upstash::UpstashVectorClient;
