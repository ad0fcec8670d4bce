use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::text::SegmenterKind;

pub mod validators;

/// Top-level CLI entry point.
#[derive(Debug, Parser)]
#[command(
    name = "juridico",
    version,
    author,
    about = "Portuguese legal-text pipeline: cleanup, jargon glosses, summaries and fallacy heuristics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn print_help() {
        let mut cmd = Cli::command();
        let _ = cmd.print_help();
        println!();
    }
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full pipeline and print the report.
    Analyze(AnalyzeArgs),
    /// Lowercase and strip everything but letters.
    Clean(CleanArgs),
    /// Annotate legal jargon with plain-language glosses.
    Translate(InputArgs),
    /// Keep the first sentences of a text.
    Summarize(SummarizeArgs),
    /// Check the text against the fallacy heuristics.
    Fallacies(InputArgs),
    /// Print the jargon dictionary.
    Glossary,
    /// Run the pipeline on a built-in example paragraph.
    Demo(DemoArgs),
}

/// Where the text comes from: `--text`, then FILE, then stdin.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// File to read; stdin is used when neither FILE nor --text is given.
    #[arg(value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,
    /// Inline text to process.
    #[arg(long)]
    pub text: Option<String>,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Sentences kept in the summary (defaults to `pipeline.sentence_count`).
    #[arg(short = 'n', long, value_parser = validators::parse_sentence_count)]
    pub sentences: Option<NonZeroUsize>,
    /// Output rendering.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct CleanArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Drop Portuguese stopwords after cleanup.
    #[arg(long)]
    pub remove_stopwords: bool,
}

#[derive(Debug, Args)]
pub struct SummarizeArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Sentences to keep (defaults to `pipeline.sentence_count`).
    #[arg(short = 'n', long, value_parser = validators::parse_sentence_count)]
    pub sentences: Option<NonZeroUsize>,
    /// Segmentation engine (`legal` or `simple`; defaults to `pipeline.summary_segmenter`).
    #[arg(long, value_parser = validators::parse_segmenter)]
    pub segmenter: Option<SegmenterKind>,
}

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Sentences kept in the summary (defaults to `pipeline.sentence_count`).
    #[arg(short = 'n', long, value_parser = validators::parse_sentence_count)]
    pub sentences: Option<NonZeroUsize>,
    /// Output rendering.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How to render pipeline reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_analyze_with_inline_text() {
        let cli = Cli::try_parse_from([
            "juridico",
            "-vv",
            "analyze",
            "--text",
            "A petição inicial.",
            "-n",
            "2",
            "--format",
            "json",
        ])
        .expect("parse");
        assert_eq!(cli.verbose, 2);
        let Some(Commands::Analyze(args)) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.input.text.as_deref(), Some("A petição inicial."));
        assert_eq!(args.sentences.map(NonZeroUsize::get), Some(2));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn rejects_zero_sentences() {
        let err = Cli::try_parse_from(["juridico", "summarize", "--text", "x", "-n", "0"])
            .unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn file_and_inline_text_conflict() {
        assert!(
            Cli::try_parse_from(["juridico", "translate", "doc.txt", "--text", "x"]).is_err()
        );
    }

    #[test]
    fn summarize_accepts_segmenter() {
        let cli = Cli::try_parse_from(["juridico", "summarize", "--segmenter", "simple"])
            .expect("parse");
        let Some(Commands::Summarize(args)) = cli.command else {
            panic!("expected summarize");
        };
        assert_eq!(args.segmenter, Some(SegmenterKind::Simple));
        assert!(args.input.input.is_none());
    }
}
