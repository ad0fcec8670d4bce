use serde::Serialize;

use super::fallacy::FallacyReport;

/// Everything one pipeline run produces, in stage order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    pub original: String,
    pub cleaned: String,
    pub translated: String,
    pub summary: String,
    pub fallacies: FallacyReport,
}

impl PipelineReport {
    /// `(field name, rendered value)` pairs for human-readable output.
    pub fn fields(&self) -> [(&'static str, String); 5] {
        [
            ("original", self.original.clone()),
            ("cleaned", self.cleaned.clone()),
            ("translated", self.translated.clone()),
            ("summary", self.summary.clone()),
            ("fallacies", self.fallacies.to_string()),
        ]
    }
}
