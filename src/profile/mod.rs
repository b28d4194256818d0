//! Profile document model and chunking
//!
//! Components:
//! - Schema: typed sections of the profile document
//! - Loader: read + parse the document from disk
//! - Chunker: flatten a profile into retrievable chunks

pub mod chunker;
pub mod loader;
pub mod schema;

pub use chunker::{chunk_profile, Chunk, ChunkKind};
pub use loader::{load_profile, parse_profile};
pub use schema::ProfileRecord;
