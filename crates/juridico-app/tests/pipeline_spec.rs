use std::error::Error;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use juridico_app::config::{AppConfig, FallacySource, PipelineConfig, StorageConfig};
use juridico_app::pipeline::{DEFAULT_SENTENCE_COUNT, FallacyReport, translate_jargon};
use juridico_app::services::{LegalPipeline, build_pipeline_context, run_pipeline};
use juridico_app::text::{SegmenterKind, clean_text};
use serde_json::Value;
use tempfile::TempDir;

const EXAMPLE: &str = "
    Segundo especialistas, a decisão foi correta, mesmo sem apresentar provas.
    A petição inicial já indicava litisconsórcio. Todo mundo sabe que sempre acontece assim.
";

fn n(value: usize) -> NonZeroUsize {
    NonZeroUsize::new(value).expect("non-zero")
}

fn config_with_data_dir(data_dir: PathBuf) -> AppConfig {
    AppConfig {
        pipeline: PipelineConfig {
            sentence_count: DEFAULT_SENTENCE_COUNT,
            fallacy_source: FallacySource::Translated,
            summary_segmenter: SegmenterKind::Simple,
        },
        storage: StorageConfig { data_dir },
    }
}

#[test]
fn example_paragraph_flags_authority_and_generalization() -> Result<(), Box<dyn Error>> {
    let report = run_pipeline(EXAMPLE, DEFAULT_SENTENCE_COUNT)?;

    assert_eq!(
        report.fallacies.labels(),
        vec!["Apelo à Autoridade", "Generalização Apressada"]
    );
    assert!(report.original.starts_with("Segundo especialistas,"));
    assert!(report.original.ends_with("acontece assim."));
    assert_eq!(
        report.cleaned,
        "segundo especialistas a decisão foi correta mesmo sem apresentar provas \
         a petição inicial já indicava litisconsórcio todo mundo sabe que sempre acontece assim"
    );
    Ok(())
}

#[test]
fn cleaned_form_has_only_letters_and_single_spaces() -> Result<(), Box<dyn Error>> {
    let report = run_pipeline(
        "Segundo especialistas, a decisão foi correta, mesmo sem apresentar provas.",
        DEFAULT_SENTENCE_COUNT,
    )?;

    assert!(report.fallacies.labels().contains(&"Apelo à Autoridade"));
    assert!(!report.cleaned.chars().any(|c| c.is_ascii_digit()));
    assert!(report.cleaned.chars().all(|c| c == ' ' || c.is_alphabetic()));
    assert!(!report.cleaned.contains("  "));
    Ok(())
}

#[test]
fn translated_text_carries_glosses() -> Result<(), Box<dyn Error>> {
    let report = run_pipeline(EXAMPLE, DEFAULT_SENTENCE_COUNT)?;

    assert!(
        report
            .translated
            .contains("[petição inicial: primeiro documento de um processo]")
    );
    assert!(
        report
            .translated
            .contains("[litisconsórcio: quando várias pessoas são parte em um processo]")
    );
    // Cleaned text has no sentence punctuation, so the summary is the whole text.
    assert_eq!(report.summary, report.translated);
    Ok(())
}

#[test]
fn translator_preserves_input_casing() {
    let translated = translate_jargon("A Petição Inicial foi protocolada.");
    assert_eq!(
        translated,
        "A [Petição Inicial: primeiro documento de um processo] foi protocolada."
    );
}

#[test]
fn normalization_is_idempotent_on_example() {
    let once = clean_text(EXAMPLE);
    assert_eq!(clean_text(&once), once);
}

#[test]
fn text_without_patterns_reports_sentinel() -> Result<(), Box<dyn Error>> {
    let report = run_pipeline("O recurso foi conhecido. A sentença foi mantida.", n(1))?;
    assert_eq!(report.fallacies, FallacyReport::NoneDetected);
    assert_eq!(report.translated, report.cleaned);
    Ok(())
}

#[test]
fn report_serializes_with_five_fields() -> Result<(), Box<dyn Error>> {
    let report = run_pipeline(EXAMPLE, DEFAULT_SENTENCE_COUNT)?;
    let value = serde_json::to_value(&report)?;

    let object = value.as_object().expect("report serializes to an object");
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["cleaned", "fallacies", "original", "summary", "translated"]
    );
    assert_eq!(
        value["fallacies"][0],
        Value::from("🔸 Apelo à Autoridade: argumento baseado em autoridade sem evidência.")
    );
    Ok(())
}

#[test]
fn context_from_config_installs_stopwords() -> Result<(), Box<dyn Error>> {
    let tmp = TempDir::new()?;
    let data_dir = tmp.path().join("data");
    let config = config_with_data_dir(data_dir.clone());

    let pipeline = LegalPipeline::new(build_pipeline_context(&config)?);
    assert!(data_dir.join("stopwords").join("portuguese.txt").is_file());
    assert_eq!(
        pipeline.clean("A petição inicial de um processo.", true),
        "petição inicial processo"
    );

    let first = pipeline.run(EXAMPLE, DEFAULT_SENTENCE_COUNT)?;
    let second = pipeline.run(EXAMPLE, DEFAULT_SENTENCE_COUNT)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn summary_respects_requested_sentence_count() -> Result<(), Box<dyn Error>> {
    let pipeline = LegalPipeline::default();
    let text = "Primeira frase. Segunda frase. Terceira frase.";

    let one = pipeline.summarize(text, n(1), SegmenterKind::Legal)?;
    assert_eq!(one, "Primeira frase.");

    let all = pipeline.summarize(text, n(9), SegmenterKind::Simple)?;
    assert_eq!(all, text);
    Ok(())
}
