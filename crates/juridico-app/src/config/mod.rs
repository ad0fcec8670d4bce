//! Configuration loading.
//!
//! Precedence, lowest first: built-in defaults, `config/settings.*` relative to
//! the working directory, the file named by `JURIDICO_CONFIG_FILE`, then
//! `JURIDICO__SECTION__KEY` environment variables.

use std::env;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use crate::paths::{self, PathError};
use crate::text::SegmenterKind;

const CONFIG_FILE: &str = "config/settings";
const CONFIG_FILE_ENV: &str = "JURIDICO_CONFIG_FILE";
const ENV_PREFIX: &str = "JURIDICO";

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error(transparent)]
    Paths(#[from] PathError),
    #[error(transparent)]
    Build(#[from] config::ConfigError),
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub pipeline: PipelineConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PipelineConfig {
    /// Sentences kept by the summary stage.
    pub sentence_count: NonZeroUsize,
    /// Which text the fallacy heuristics inspect.
    pub fallacy_source: FallacySource,
    /// Engine used by the standalone `summarize` command.
    pub summary_segmenter: SegmenterKind,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

/// Input of the fallacy stage: the annotated text or the cleaned text before
/// jargon glosses are inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallacySource {
    #[default]
    Translated,
    Cleaned,
}

pub fn load() -> Result<AppConfig, AppConfigError> {
    let default_data_dir = paths::default_data_dir()?;
    let mut builder = Config::builder()
        .set_default("pipeline.sentence_count", 3)?
        .set_default("pipeline.fallacy_source", "translated")?
        .set_default("pipeline.summary_segmenter", "simple")?
        .set_default(
            "storage.data_dir",
            default_data_dir.to_string_lossy().to_string(),
        )?
        .add_source(File::with_name(CONFIG_FILE).required(false));

    if let Some(path) = env::var_os(CONFIG_FILE_ENV) {
        builder = builder.add_source(File::from(PathBuf::from(path)).required(true));
    }

    let cfg = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?
        .try_deserialize()?;
    Ok(cfg)
}
