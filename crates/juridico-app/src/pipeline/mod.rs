//! Pure pipeline transformations that operate on document text.
//!
//! Modules under this namespace must remain free of IO and external side effects
//! so they can be reused across orchestrators and test harnesses. Segmentation
//! engines arrive as injected trait objects.

pub mod fallacy;
pub mod jargon;
pub mod report;
pub mod summary;

pub use fallacy::{
    FALLACY_RULES, FallacyFinding, FallacyReport, FallacyRule, NO_FALLACY_SENTINEL,
    PhrasePattern, detect_fallacies,
};
pub use jargon::{JargonDictionary, JargonEntry, translate_jargon};
pub use report::PipelineReport;
pub use summary::{DEFAULT_SENTENCE_COUNT, Summarizer, summarize};
