//! Startup bootstrap for the vector index
//!
//! Decides whether the one-time bulk load is needed (the index reports
//! zero vectors) and, when it is, reads the profile document, chunks it,
//! and hands the chunks to the index in a single upsert.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::errors::{Result, TwinError};
use crate::profile::chunker::chunk_profile;
use crate::profile::loader::load_profile;
use crate::vector::gateway::{UpsertItem, VectorIndexGateway};

/// Outcome of the bootstrap pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Chunks uploaded by this pass (zero when already loaded)
    pub chunks_loaded: usize,
    /// True when the index already held vectors and nothing was uploaded
    pub already_loaded: bool,
}

/// One-time index loader
pub struct IndexBootstrap {
    gateway: Arc<dyn VectorIndexGateway>,
    show_progress: bool,
}

impl IndexBootstrap {
    pub fn new(gateway: Arc<dyn VectorIndexGateway>) -> Self {
        Self {
            gateway,
            show_progress: false,
        }
    }

    /// Enable a terminal spinner during the load
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Ensure the index holds the profile; loads it only when empty.
    ///
    /// A missing or unparsable profile document is fatal here, but only
    /// when a load is actually needed — an already-populated index never
    /// touches the document.
    pub async fn ensure_loaded(&self, profile_path: &Path) -> Result<LoadReport> {
        let info = self.gateway.info().await?;
        if info.vector_count > 0 {
            return Ok(LoadReport {
                chunks_loaded: 0,
                already_loaded: true,
            });
        }

        let profile = load_profile(profile_path)?;
        let chunks = chunk_profile(&profile);
        if chunks.is_empty() {
            return Err(TwinError::Chunking(
                "no content chunks produced from profile document".to_string(),
            ));
        }

        let spinner = self.spinner(chunks.len());
        let items: Vec<UpsertItem> = chunks
            .iter()
            .map(|chunk| UpsertItem {
                id: chunk.id.clone(),
                text: chunk.embedding_text(),
                metadata: chunk.metadata(),
            })
            .collect();

        let upserted = items.len();
        let result = self.gateway.upsert(items).await;
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }
        result?;

        Ok(LoadReport {
            chunks_loaded: upserted,
            already_loaded: false,
        })
    }

    fn spinner(&self, chunk_count: usize) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message(format!("Uploading {} profile chunks...", chunk_count));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }
}
