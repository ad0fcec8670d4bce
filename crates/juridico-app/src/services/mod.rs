//! Orchestration layer: injected resources and the pipeline runner.
//!
//! Modules exposed here own startup-time resource loading and stage
//! sequencing. Keep stateless helpers in `crate::text` or `crate::pipeline`.

pub mod context;
pub mod orchestrator;
pub mod resources;

pub use context::{PipelineContext, PipelineError, PipelineResult, build_pipeline_context};
pub use orchestrator::{LegalPipeline, run_pipeline};
pub use resources::{ResourceError, install_stopwords, load_stopwords, load_stopwords_at};
