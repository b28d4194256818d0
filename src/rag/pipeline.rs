//! End-to-end answer pipeline
//!
//! One operation: question in, answer out. Retrieval and generation are
//! reached through their gateway traits; every per-question failure is
//! converted into a degraded-but-valid answer string so the surrounding
//! chat loop never crashes on a single query.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::llm::generator::{AnswerGenerator, CompletionRequest};
use crate::rag::context::{ContextAssembler, ContextBlock, RetrievedResult};
use crate::vector::gateway::VectorIndexGateway;

/// Fixed response when nothing relevant is stored for a question
pub const NO_INFORMATION: &str = "I don't have specific information about that topic.";

/// Persona instruction for every completion
const SYSTEM_PERSONA: &str = "You are an AI digital twin. Answer questions as if you are \
the person, speaking in first person about your background, skills, and experience.";

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagConfig {
    /// Number of results requested from the vector index
    pub top_k: usize,
    /// Completion model
    pub model: String,
    /// Sampling temperature; moderate by default to balance fidelity to the
    /// stored profile against natural phrasing
    pub temperature: f32,
    /// Output length bound
    pub max_tokens: u32,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            top_k: 3,
            model: "llama-3.1-8b-instant".to_string(),
            temperature: 0.7,
            max_tokens: 500,
        }
    }
}

/// Outcome of one answered question, for display purposes
#[derive(Debug, Clone)]
pub struct AnswerReport {
    /// The answer text (always present, possibly a fallback or error string)
    pub answer: String,
    /// Hits that survived context assembly, in ranked order
    pub hits: Vec<RetrievedResult>,
}

/// Retrieval-augmented answer pipeline
pub struct RagPipeline {
    gateway: Arc<dyn VectorIndexGateway>,
    generator: Arc<dyn AnswerGenerator>,
    assembler: ContextAssembler,
    config: RagConfig,
}

impl RagPipeline {
    pub fn new(gateway: Arc<dyn VectorIndexGateway>, generator: Arc<dyn AnswerGenerator>) -> Self {
        Self::with_config(gateway, generator, RagConfig::default())
    }

    pub fn with_config(
        gateway: Arc<dyn VectorIndexGateway>,
        generator: Arc<dyn AnswerGenerator>,
        config: RagConfig,
    ) -> Self {
        Self {
            gateway,
            generator,
            assembler: ContextAssembler::new(),
            config,
        }
    }

    pub fn config(&self) -> &RagConfig {
        &self.config
    }

    /// Answer a question. Infallible by design: retrieval failures degrade
    /// to the no-information fallback, generation failures to an error
    /// string.
    pub async fn answer(&self, question: &str) -> String {
        self.answer_with_report(question).await.answer
    }

    /// Answer a question and report the retrieval hits used
    pub async fn answer_with_report(&self, question: &str) -> AnswerReport {
        let question = question.trim();
        if question.is_empty() {
            // The chat loop never dispatches empty input; nothing to do
            return AnswerReport {
                answer: String::new(),
                hits: Vec::new(),
            };
        }

        let results = self.retrieve(question).await;

        let Some(context) = self.assembler.assemble(&results) else {
            return AnswerReport {
                answer: NO_INFORMATION.to_string(),
                hits: Vec::new(),
            };
        };

        let request = self.build_request(question, &context);
        let answer = match self.generator.complete(request).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => format!("Error generating response: {}", e),
        };

        AnswerReport {
            answer,
            hits: results.into_iter().filter(|r| !r.content.is_empty()).collect(),
        }
    }

    /// Top-k retrieval; a failed index call degrades to zero results
    async fn retrieve(&self, question: &str) -> Vec<RetrievedResult> {
        match self
            .gateway
            .query(question, self.config.top_k, true)
            .await
        {
            Ok(matches) => matches.into_iter().map(RetrievedResult::from).collect(),
            Err(_) => Vec::new(),
        }
    }

    fn build_request(&self, question: &str, context: &ContextBlock) -> CompletionRequest {
        let user_message = format!(
            "Based on the following information about yourself, answer the question.\n\
             Speak in first person as if you are describing your own background.\n\n\
             Your Information:\n{}\n\n\
             Question: {}\n\n\
             Provide a helpful, professional response:",
            context.text, question
        );

        CompletionRequest {
            system_message: SYSTEM_PERSONA.to_string(),
            user_message,
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }
}
