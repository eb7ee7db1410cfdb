//! Load, clean, analyze and save one corpus.
//!
//! [`CorpusProcessor`] holds the raw corpus as loaded and, once
//! [`preprocess_data`](CorpusProcessor::preprocess_data) has run, a processed
//! copy with `clean_text` / `clean_summary` columns. Statistics and samples
//! come from the processed copy when there is one, otherwise from the raw
//! corpus.

use std::path::{Path, PathBuf};

use corpus_ingest::{IngestError, read_corpus, write_corpus};
use corpus_model::{Corpus, ModelError, Record};
use corpus_stats::{CorpusAnalyzer, CorpusStatistics, StatsError};
use corpus_text::{LanguageResources, NormalizerOptions, TextNormalizer};
use polars::prelude::{NamedFrom, Series};
use thiserror::Error;
use tracing::{info, info_span};

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("no input file given")]
    MissingPath,

    #[error("no dataset loaded, load a corpus first")]
    CorpusNotLoaded,

    #[error("dataset not preprocessed, run preprocessing before saving")]
    NotPreprocessed,

    #[error("sample index {index} out of range for corpus with {len} samples")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, ProcessorError>;

/// Drives one corpus through the cleaning and statistics pipeline.
pub struct CorpusProcessor {
    file_path: Option<PathBuf>,
    resources: LanguageResources,
    raw: Option<Corpus>,
    analyzer: Option<CorpusAnalyzer>,
    preprocessed: bool,
}

impl CorpusProcessor {
    pub fn new(resources: LanguageResources) -> Self {
        Self {
            file_path: None,
            resources,
            raw: None,
            analyzer: None,
            preprocessed: false,
        }
    }

    /// A processor that loads from `path` when [`load_data`](Self::load_data)
    /// is called without one.
    pub fn with_path(path: impl Into<PathBuf>, resources: LanguageResources) -> Self {
        Self {
            file_path: Some(path.into()),
            ..Self::new(resources)
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_preprocessed(&self) -> bool {
        self.preprocessed
    }

    /// Read a CSV corpus. A given `path` replaces the stored one.
    ///
    /// Any earlier preprocessing and statistics are discarded.
    pub fn load_data(&mut self, path: Option<&Path>) -> Result<&Corpus> {
        if let Some(path) = path {
            self.file_path = Some(path.to_path_buf());
        }
        let path = self.file_path.clone().ok_or(ProcessorError::MissingPath)?;
        let corpus = read_corpus(&path)?;
        Ok(self.load_corpus(corpus))
    }

    /// Take an in-memory corpus as if it had been loaded from disk.
    pub fn load_corpus(&mut self, corpus: Corpus) -> &Corpus {
        self.analyzer = Some(CorpusAnalyzer::new(corpus.clone(), &self.resources));
        self.preprocessed = false;
        self.raw.insert(corpus)
    }

    /// The corpus as loaded.
    pub fn raw_corpus(&self) -> Option<&Corpus> {
        self.raw.as_ref()
    }

    /// The corpus statistics and samples are taken from.
    pub fn working_corpus(&self) -> Option<&Corpus> {
        self.analyzer.as_ref().map(CorpusAnalyzer::corpus)
    }

    /// Add `clean_text` / `clean_summary` to a copy of the raw corpus.
    ///
    /// Running it again starts from the raw corpus, so options do not stack.
    pub fn preprocess_data(&mut self, options: NormalizerOptions) -> Result<&Corpus> {
        let mut processed = self.raw.clone().ok_or(ProcessorError::CorpusNotLoaded)?;

        let span = info_span!(
            "preprocess",
            remove_special_chars = options.remove_special_chars,
            remove_stopwords = options.remove_stopwords
        );
        let _guard = span.enter();

        let normalizer = TextNormalizer::new(options, &self.resources);
        for field in processed.schema().text_fields() {
            let cleaned: Vec<String> = processed
                .string_values(field.source_column())?
                .into_iter()
                .map(|value| normalizer.normalize(value))
                .collect();
            processed.set_column(Series::new(field.clean_column().into(), cleaned))?;
        }

        info!(samples = processed.len(), "Preprocessing complete");
        self.preprocessed = true;
        let analyzer = self
            .analyzer
            .insert(CorpusAnalyzer::new(processed, &self.resources));
        Ok(analyzer.corpus())
    }

    /// Statistics for the working corpus, computed once and cached.
    pub fn analyze_data(&mut self) -> Result<&CorpusStatistics> {
        let analyzer = self
            .analyzer
            .as_mut()
            .ok_or(ProcessorError::CorpusNotLoaded)?;
        Ok(analyzer.compute_statistics()?)
    }

    /// Cached statistics, if [`analyze_data`](Self::analyze_data) has run
    /// since the last load or preprocess.
    pub fn statistics(&self) -> Option<&CorpusStatistics> {
        self.analyzer.as_ref().and_then(CorpusAnalyzer::cached)
    }

    /// Write the processed corpus, with derived statistic columns when
    /// statistics have been computed.
    pub fn save_processed_data(&self, path: &Path) -> Result<()> {
        if !self.preprocessed {
            return Err(ProcessorError::NotPreprocessed);
        }
        let corpus = self
            .working_corpus()
            .ok_or(ProcessorError::CorpusNotLoaded)?;
        let span = info_span!("save", path = %path.display());
        let _guard = span.enter();
        write_corpus(path, corpus)?;
        Ok(())
    }

    /// One record of the working corpus.
    pub fn get_sample(&self, index: usize) -> Result<Record> {
        let corpus = self
            .working_corpus()
            .ok_or(ProcessorError::CorpusNotLoaded)?;
        if index >= corpus.len() {
            return Err(ProcessorError::IndexOutOfBounds {
                index,
                len: corpus.len(),
            });
        }
        Ok(corpus.record(index)?)
    }
}
