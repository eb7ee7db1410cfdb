//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use corpus_text::NormalizerOptions;

#[derive(Parser)]
#[command(
    name = "corpus",
    version,
    about = "Clean text corpora and report descriptive statistics",
    long_about = "Clean text corpora and report descriptive statistics.\n\n\
                  Reads a CSV with text, summary and category columns, normalizes the\n\
                  text fields and prints length, sentence, word and compression\n\
                  statistics."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a corpus, clean it and print statistics and one sample.
    Analyze(AnalyzeArgs),

    /// Write the built-in two-article sample dataset.
    Sample(SampleArgs),

    /// Normalize a single string and print the result.
    Normalize(NormalizeArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// CSV file with a header row.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// TOML file with [preprocess] and [sample] settings.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub normalize: NormalizeFlags,

    /// Skip preprocessing and analyze the corpus as loaded.
    #[arg(long = "raw")]
    pub raw: bool,

    /// Record to print after the statistics (default 0).
    #[arg(long = "sample-index", value_name = "N")]
    pub sample_index: Option<usize>,

    /// Characters of text shown in the sample (default 200).
    #[arg(long = "max-chars", value_name = "N")]
    pub max_chars: Option<usize>,

    /// Do not print a sample record.
    #[arg(long = "no-sample")]
    pub no_sample: bool,

    /// Print statistics as a table instead of the plain report.
    #[arg(long = "table")]
    pub table: bool,

    /// Save the processed corpus, derived columns included, to this CSV.
    #[arg(long = "output", value_name = "FILE", conflicts_with = "raw")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SampleArgs {
    /// Destination CSV path.
    #[arg(value_name = "OUTPUT", default_value = "data/sample-news-summary.csv")]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Text to normalize.
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub normalize: NormalizeFlags,
}

/// Optional normalization steps.
#[derive(Args, Clone, Copy)]
pub struct NormalizeFlags {
    /// Remove punctuation and other non-word characters.
    #[arg(long = "remove-special-chars")]
    pub remove_special_chars: bool,

    /// Remove English stopwords.
    #[arg(long = "remove-stopwords")]
    pub remove_stopwords: bool,
}

impl NormalizeFlags {
    /// Flags switch steps on; they never switch off a step enabled in `base`.
    pub fn apply(self, base: NormalizerOptions) -> NormalizerOptions {
        NormalizerOptions {
            remove_special_chars: base.remove_special_chars || self.remove_special_chars,
            remove_stopwords: base.remove_stopwords || self.remove_stopwords,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_flags() {
        let cli = Cli::try_parse_from([
            "corpus",
            "analyze",
            "news.csv",
            "--remove-special-chars",
            "--sample-index",
            "3",
            "-v",
        ])
        .unwrap();
        let Command::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert!(args.normalize.remove_special_chars);
        assert!(!args.normalize.remove_stopwords);
        assert_eq!(args.sample_index, Some(3));
        assert!(cli.verbosity.is_present());
    }

    #[test]
    fn test_output_conflicts_with_raw() {
        let result = Cli::try_parse_from(["corpus", "analyze", "a.csv", "--raw", "--output", "b.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_only_enable_steps() {
        let flags = NormalizeFlags {
            remove_special_chars: false,
            remove_stopwords: true,
        };
        let base = NormalizerOptions {
            remove_special_chars: true,
            remove_stopwords: false,
        };
        let options = flags.apply(base);
        assert!(options.remove_special_chars);
        assert!(options.remove_stopwords);
    }
}
