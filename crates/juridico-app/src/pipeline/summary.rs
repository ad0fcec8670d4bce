use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::text::{
    LegalSentenceSegmenter, SegmentError, SegmenterKind, SentenceSegmenter,
    SimpleSentenceSegmenter,
};

pub const DEFAULT_SENTENCE_COUNT: NonZeroUsize = NonZeroUsize::new(3).unwrap();

/// Returns the first `sentence_count` sentences of `text` joined by single spaces.
///
/// Falls back to the trimmed input when the segmenter yields nothing.
/// Segmenter failures are returned as-is.
pub fn summarize(
    text: &str,
    sentence_count: NonZeroUsize,
    segmenter: &dyn SentenceSegmenter,
) -> Result<String, SegmentError> {
    let sentences = segmenter
        .segment(text)?
        .into_iter()
        .map(|sentence| sentence.trim().to_string())
        .filter(|sentence| !sentence.is_empty())
        .collect::<Vec<_>>();

    if sentences.is_empty() {
        return Ok(text.trim().to_string());
    }

    Ok(sentences
        .into_iter()
        .take(sentence_count.get())
        .collect::<Vec<_>>()
        .join(" "))
}

/// Holds both segmentation engines and picks one per call.
#[derive(Clone)]
pub struct Summarizer {
    legal: Arc<dyn SentenceSegmenter>,
    simple: Arc<dyn SentenceSegmenter>,
}

impl Summarizer {
    pub fn new(legal: Arc<dyn SentenceSegmenter>, simple: Arc<dyn SentenceSegmenter>) -> Self {
        Self { legal, simple }
    }

    /// Summarizer backed by the engines shipped with the crate.
    pub fn builtin() -> Self {
        Self::new(
            Arc::new(LegalSentenceSegmenter),
            Arc::new(SimpleSentenceSegmenter),
        )
    }

    pub fn segmenter(&self, kind: SegmenterKind) -> &dyn SentenceSegmenter {
        match kind {
            SegmenterKind::Legal => self.legal.as_ref(),
            SegmenterKind::Simple => self.simple.as_ref(),
        }
    }

    pub fn summarize(
        &self,
        text: &str,
        sentence_count: NonZeroUsize,
        kind: SegmenterKind,
    ) -> Result<String, SegmentError> {
        summarize(text, sentence_count, self.segmenter(kind))
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("legal", &self.legal.name())
            .field("simple", &self.simple.name())
            .finish()
    }
}
