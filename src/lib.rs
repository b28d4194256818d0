//! ProfileTwin - AI Profile Assistant
//!
//! Turns a structured professional profile into a retrieval-augmented
//! assistant that answers questions in first person as the profile's
//! subject.
//!
//! # Architecture
//!
//! - **profile**: typed profile schema + deterministic chunking model
//! - **vector** / **llm**: narrow trait seams over the two external
//!   services (similarity index with built-in embeddings, chat completion)
//! - **rag**: context assembly and the question -> answer pipeline
//! - **bootstrap**: one-time bulk load of the profile into the index
//! - **repl** / **cli**: the interactive terminal surface

pub mod errors;
pub mod config;
pub mod profile;
pub mod vector;
pub mod llm;
pub mod rag;
pub mod bootstrap;
pub mod repl;
pub mod cli;

// Re-export commonly used types
pub use errors::{Result, TwinError};
pub use profile::{chunk_profile, Chunk, ChunkKind, ProfileRecord};
pub use rag::{RagConfig, RagPipeline, NO_INFORMATION};
