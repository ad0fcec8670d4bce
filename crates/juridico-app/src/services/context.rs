use std::sync::Arc;

use thiserror::Error;

use crate::config::{AppConfig, FallacySource};
use crate::paths::{AppPaths, PathError};
use crate::pipeline::Summarizer;
use crate::services::resources::{ResourceError, load_stopwords};
use crate::text::{SegmentError, StopwordSet};

pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Segment(#[from] SegmentError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Read-only resources shared by every pipeline run: the segmentation engines,
/// the stopword set and the stage options. Built once at startup.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    pub summarizer: Summarizer,
    pub stopwords: Arc<StopwordSet>,
    pub fallacy_source: FallacySource,
}

impl PipelineContext {
    pub fn new(summarizer: Summarizer, stopwords: Arc<StopwordSet>) -> Self {
        Self {
            summarizer,
            stopwords,
            fallacy_source: FallacySource::default(),
        }
    }

    /// In-memory context: bundled stopwords and built-in engines, no filesystem.
    pub fn builtin() -> Self {
        Self::new(Summarizer::builtin(), Arc::new(StopwordSet::bundled()))
    }

    pub fn with_fallacy_source(mut self, source: FallacySource) -> Self {
        self.fallacy_source = source;
        self
    }
}

impl Default for PipelineContext {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolves the data directory, loads (or installs) language resources and
/// wires the built-in engines.
pub fn build_pipeline_context(config: &AppConfig) -> PipelineResult<PipelineContext> {
    let paths = AppPaths::new(&config.storage.data_dir)?;
    let stopwords = load_stopwords(&paths)?;
    tracing::debug!(
        data_dir = %paths.data_dir().display(),
        stopwords = stopwords.len(),
        "pipeline context ready"
    );

    Ok(
        PipelineContext::new(Summarizer::builtin(), Arc::new(stopwords))
            .with_fallacy_source(config.pipeline.fallacy_source),
    )
}
