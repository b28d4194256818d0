//! Retrieval-augmented answering
//!
//! Components:
//! - Context Assembler: compose grounding text from ranked results
//! - Pipeline: question -> retrieval -> context -> completion -> answer

pub mod context;
pub mod pipeline;

pub use context::{ContextAssembler, ContextBlock, RetrievedResult};
pub use pipeline::{RagConfig, RagPipeline, NO_INFORMATION};
