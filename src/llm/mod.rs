//! Completion service integration
//!
//! The generator trait is the only surface the pipeline depends on; the
//! Groq adapter is the production implementation.

pub mod generator;
pub mod groq;

pub use generator::{AnswerGenerator, CompletionRequest};
pub use groq::GroqClient;
