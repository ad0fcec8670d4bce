//! Text utilities kept pure for reuse across services and pipelines.
//!
//! Functions and types exposed here must remain side-effect free so they can
//! be composed from orchestrators without introducing hidden IO or mutable
//! state.

pub mod cleanup;
pub mod segmenter;
pub mod stopwords;

pub use cleanup::{NormalizeOptions, clean_text, normalize_text};
pub use segmenter::{
    LegalSentenceSegmenter, PortugueseSentenceSplit, SegmentError, SegmenterKind,
    SentenceSegmenter, SimpleSentenceSegmenter,
};
pub use stopwords::{BUNDLED_STOPWORDS, StopwordSet};
