use anyhow::{Context, Result};
use tracing::info_span;

use corpus_cli::config::{PipelineConfig, load_config};
use corpus_cli::processor::CorpusProcessor;
use corpus_cli::summary::{print_sample, print_statistics_table};
use corpus_ingest::write_sample_dataset;
use corpus_stats::print_statistics;
use corpus_text::{LanguageResources, NormalizerOptions, TextNormalizer};

use crate::cli::{AnalyzeArgs, NormalizeArgs, SampleArgs};

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let span = info_span!("analyze", input = %args.input.display());
    let _guard = span.enter();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => PipelineConfig::default(),
    };
    let options = args.normalize.apply(config.preprocess);
    let sample_index = args.sample_index.unwrap_or(config.sample.index);
    let max_chars = args.max_chars.unwrap_or(config.sample.max_chars);

    let mut processor = CorpusProcessor::with_path(&args.input, LanguageResources::english());
    processor
        .load_data(None)
        .with_context(|| format!("load {}", args.input.display()))?;
    if !args.raw {
        processor
            .preprocess_data(options)
            .context("preprocess corpus")?;
    }

    let stats = processor.analyze_data().context("compute statistics")?;
    if args.table {
        print_statistics_table(stats);
    } else {
        print_statistics(stats);
    }
    let is_empty = stats.total_samples == 0;

    if !args.no_sample && !is_empty {
        let record = processor.get_sample(sample_index)?;
        print_sample(&record, max_chars);
    }

    if let Some(output) = &args.output {
        processor
            .save_processed_data(output)
            .with_context(|| format!("save {}", output.display()))?;
        println!();
        println!("Processed data saved to {}", output.display());
    }
    Ok(())
}

pub fn run_sample(args: &SampleArgs) -> Result<()> {
    let corpus = write_sample_dataset(&args.output)
        .with_context(|| format!("write {}", args.output.display()))?;
    println!(
        "Sample dataset with {} records saved to {}",
        corpus.len(),
        args.output.display()
    );
    Ok(())
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let options = args.normalize.apply(NormalizerOptions::default());
    let normalizer = TextNormalizer::new(options, &LanguageResources::english());
    println!("{}", normalizer.normalize(Some(&args.text)));
    Ok(())
}
