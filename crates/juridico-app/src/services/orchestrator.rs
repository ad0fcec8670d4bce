use std::num::NonZeroUsize;

use tracing::debug;

use crate::config::FallacySource;
use crate::pipeline::{FallacyReport, PipelineReport, detect_fallacies, translate_jargon};
use crate::services::context::{PipelineContext, PipelineResult};
use crate::text::{NormalizeOptions, SegmenterKind, normalize_text};

/// Runs cleanup, jargon annotation, summary and fallacy heuristics over one text.
#[derive(Debug, Clone, Default)]
pub struct LegalPipeline {
    ctx: PipelineContext,
}

impl LegalPipeline {
    pub fn new(ctx: PipelineContext) -> Self {
        Self { ctx }
    }

    /// Normalizer stage, optionally dropping stopwords from the injected set.
    pub fn clean(&self, text: &str, remove_stopwords: bool) -> String {
        let options = if remove_stopwords {
            NormalizeOptions::removing_stopwords(&self.ctx.stopwords)
        } else {
            NormalizeOptions::default()
        };
        normalize_text(text, options)
    }

    pub fn summarize(
        &self,
        text: &str,
        sentence_count: NonZeroUsize,
        kind: SegmenterKind,
    ) -> PipelineResult<String> {
        Ok(self.ctx.summarizer.summarize(text, sentence_count, kind)?)
    }

    pub fn detect(&self, text: &str) -> FallacyReport {
        detect_fallacies(text)
    }

    /// Full pipeline. The summary always uses the legal segmenter; any stage
    /// error aborts the run.
    pub fn run(&self, text: &str, sentence_count: NonZeroUsize) -> PipelineResult<PipelineReport> {
        let cleaned = self.clean(text, false);
        debug!(
            input_chars = text.chars().count(),
            cleaned_chars = cleaned.chars().count(),
            "normalized input"
        );

        let translated = translate_jargon(&cleaned);
        debug!(translated_chars = translated.chars().count(), "annotated jargon");

        let summary = self.summarize(&translated, sentence_count, SegmenterKind::Legal)?;
        debug!(
            sentence_count = sentence_count.get(),
            summary_chars = summary.chars().count(),
            "summarized"
        );

        let fallacy_input = match self.ctx.fallacy_source {
            FallacySource::Translated => translated.as_str(),
            FallacySource::Cleaned => cleaned.as_str(),
        };
        let fallacies = self.detect(fallacy_input);
        debug!(findings = fallacies.findings().len(), "checked fallacy heuristics");

        Ok(PipelineReport {
            original: text.trim().to_string(),
            cleaned,
            translated,
            summary,
            fallacies,
        })
    }
}

/// Runs the pipeline with the in-memory built-in context.
pub fn run_pipeline(text: &str, sentence_count: NonZeroUsize) -> PipelineResult<PipelineReport> {
    LegalPipeline::default().run(text, sentence_count)
}
