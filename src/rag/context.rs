//! Context assembly for retrieval-augmented answers
//!
//! Takes the ranked results returned by the vector index and composes the
//! grounding text handed to the generator. Ranking order is preserved;
//! results without recoverable content are dropped. Zero survivors is a
//! normal outcome signalled as `None`, never as an empty block.

use serde::Serialize;

use crate::vector::gateway::ScoredMatch;

/// One retrieval hit with its stored text recovered from metadata
#[derive(Debug, Clone, Serialize)]
pub struct RetrievedResult {
    pub id: String,
    pub score: f64,
    pub title: String,
    pub content: String,
}

impl From<ScoredMatch> for RetrievedResult {
    fn from(m: ScoredMatch) -> Self {
        let title = m
            .metadata
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or("Information")
            .to_string();
        let content = m
            .metadata
            .get("content")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        Self {
            id: m.id,
            score: m.score,
            title,
            content,
        }
    }
}

/// Assembled grounding context
#[derive(Debug, Clone, Serialize)]
pub struct ContextBlock {
    /// The formatted context text
    pub text: String,
    /// Number of results included
    pub entry_count: usize,
    /// Ids of the included results, in ranked order
    pub entry_ids: Vec<String>,
}

/// Composes context blocks from ranked retrieval results
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextAssembler;

impl ContextAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Build a context block, or `None` when no result carries content
    pub fn assemble(&self, results: &[RetrievedResult]) -> Option<ContextBlock> {
        let survivors: Vec<&RetrievedResult> =
            results.iter().filter(|r| !r.content.is_empty()).collect();

        if survivors.is_empty() {
            return None;
        }

        let text = survivors
            .iter()
            .map(|r| format!("{}: {}", r.title, r.content))
            .collect::<Vec<_>>()
            .join("\n\n");

        Some(ContextBlock {
            text,
            entry_count: survivors.len(),
            entry_ids: survivors.iter().map(|r| r.id.clone()).collect(),
        })
    }
}
