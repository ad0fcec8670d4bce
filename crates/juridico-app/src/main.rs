use std::fs;
use std::io::{self, Read, Write};
use std::num::NonZeroUsize;
use std::process;

use juridico_app::cli::{Cli, Commands, InputArgs, OutputFormat};
use juridico_app::config::{self, AppConfig};
use juridico_app::error::AppError;
use juridico_app::pipeline::{
    JargonDictionary, PipelineReport, Summarizer, detect_fallacies, translate_jargon,
};
use juridico_app::services::{LegalPipeline, PipelineError, build_pipeline_context};
use juridico_app::text::clean_text;
use tracing_subscriber::{filter::LevelFilter, fmt};

const DEMO_TEXT: &str = "
    Segundo especialistas, a decisão foi correta, mesmo sem apresentar provas.
    A petição inicial já indicava litisconsórcio. Todo mundo sabe que sempre acontece assim.
";

fn main() {
    let cli = Cli::parse();
    let log_level = determine_log_level(&cli);
    init_tracing(log_level);

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}

fn determine_log_level(cli: &Cli) -> LevelFilter {
    match cli.command.as_ref() {
        Some(Commands::Analyze(_)) | Some(Commands::Demo(_)) => match cli.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        },
        _ => match cli.verbose {
            0 => LevelFilter::OFF,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        },
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let Some(command) = cli.command else {
        Cli::print_help();
        return Ok(());
    };

    match command {
        Commands::Glossary => print_glossary(),
        Commands::Translate(args) => {
            let text = read_input(&args)?;
            emit(&translate_jargon(&text))
        }
        Commands::Fallacies(args) => {
            let text = read_input(&args)?;
            emit(&detect_fallacies(&text).to_string())
        }
        Commands::Clean(args) => {
            let text = read_input(&args.input)?;
            if args.remove_stopwords {
                let pipeline = load_pipeline(&config::load()?)?;
                emit(&pipeline.clean(&text, true))
            } else {
                emit(&clean_text(&text))
            }
        }
        Commands::Summarize(args) => {
            let config = config::load()?;
            let text = read_input(&args.input)?;
            let sentences = args.sentences.unwrap_or(config.pipeline.sentence_count);
            let segmenter = args.segmenter.unwrap_or(config.pipeline.summary_segmenter);
            tracing::debug!(%segmenter, sentences = sentences.get(), "summarizing input");
            let summary = Summarizer::builtin()
                .summarize(&text, sentences, segmenter)
                .map_err(PipelineError::from)?;
            emit(&summary)
        }
        Commands::Analyze(args) => {
            let config = config::load()?;
            let text = read_input(&args.input)?;
            let sentences = args.sentences.unwrap_or(config.pipeline.sentence_count);
            run_report(&load_pipeline(&config)?, &text, sentences, args.format)
        }
        Commands::Demo(args) => {
            let config = config::load()?;
            let sentences = args.sentences.unwrap_or(config.pipeline.sentence_count);
            run_report(&load_pipeline(&config)?, DEMO_TEXT, sentences, args.format)
        }
    }
}

fn load_pipeline(config: &AppConfig) -> Result<LegalPipeline, AppError> {
    Ok(LegalPipeline::new(build_pipeline_context(config)?))
}

fn run_report(
    pipeline: &LegalPipeline,
    text: &str,
    sentences: NonZeroUsize,
    format: OutputFormat,
) -> Result<(), AppError> {
    tracing::info!(sentences = sentences.get(), "running legal text pipeline");
    let report = pipeline.run(text, sentences)?;
    tracing::info!(fallacies = report.fallacies.findings().len(), "pipeline finished");
    render_report(&report, format)
}

fn render_report(report: &PipelineReport, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => emit(&serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let mut out = io::stdout().lock();
            for (field, value) in report.fields() {
                writeln!(out, "\n🔹 {}:\n{}", field.to_uppercase(), value)
                    .map_err(AppError::Output)?;
            }
            Ok(())
        }
    }
}

fn print_glossary() -> Result<(), AppError> {
    let mut out = io::stdout().lock();
    for entry in JargonDictionary::standard().entries() {
        writeln!(out, "{}: {}", entry.term, entry.explanation).map_err(AppError::Output)?;
    }
    Ok(())
}

fn emit(value: &str) -> Result<(), AppError> {
    let mut out = io::stdout().lock();
    writeln!(out, "{value}").map_err(AppError::Output)
}

fn read_input(args: &InputArgs) -> Result<String, AppError> {
    if let Some(text) = args.text.as_ref() {
        return Ok(text.clone());
    }

    if let Some(path) = args.input.as_ref() {
        return fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.clone(),
            source,
        });
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(AppError::Stdin)?;
    Ok(buffer)
}
