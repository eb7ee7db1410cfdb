//! Memoized statistics computation over one corpus.

use std::sync::Arc;

use corpus_model::{COMPRESSION_RATIO_COLUMN, Corpus, TextField};
use corpus_text::{LanguageResources, Tokenizer};
use polars::prelude::{NamedFrom, Series};
use tracing::{debug, info, info_span};

use crate::bundle::{CorpusStatistics, MissingCount};
use crate::error::Result;
use crate::features::{FieldFeatures, category_distribution, compression_ratios, mean_defined};

/// Computes and caches the statistics bundle for a corpus it owns.
///
/// The first call to [`compute_statistics`](Self::compute_statistics) adds
/// the derived feature columns to the corpus and caches the bundle; later
/// calls return the cache. A new corpus needs a new analyzer.
pub struct CorpusAnalyzer {
    corpus: Corpus,
    tokenizer: Arc<dyn Tokenizer>,
    stats: Option<CorpusStatistics>,
}

impl CorpusAnalyzer {
    pub fn new(corpus: Corpus, resources: &LanguageResources) -> Self {
        Self::with_tokenizer(corpus, Arc::clone(resources.tokenizer()))
    }

    pub fn with_tokenizer(corpus: Corpus, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self {
            corpus,
            tokenizer,
            stats: None,
        }
    }

    /// The analyzed corpus, including any derived columns.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn into_corpus(self) -> Corpus {
        self.corpus
    }

    /// The cached bundle, if already computed.
    pub fn cached(&self) -> Option<&CorpusStatistics> {
        self.stats.as_ref()
    }

    /// Compute on first call, then return the cached bundle.
    pub fn compute_statistics(&mut self) -> Result<&CorpusStatistics> {
        let stats = match self.stats.take() {
            Some(stats) => stats,
            None => self.build_statistics()?,
        };
        Ok(self.stats.insert(stats))
    }

    /// Same as [`compute_statistics`](Self::compute_statistics).
    pub fn statistics(&mut self) -> Result<&CorpusStatistics> {
        self.compute_statistics()
    }

    /// Discard the cache and build a fresh bundle.
    pub fn recompute(&mut self) -> Result<&CorpusStatistics> {
        self.stats = None;
        self.compute_statistics()
    }

    fn build_statistics(&mut self) -> Result<CorpusStatistics> {
        let span = info_span!("compute_statistics", samples = self.corpus.len());
        let _guard = span.enter();

        let schema = self.corpus.schema().clone();

        let mut missing_values = Vec::with_capacity(schema.columns().len());
        for column in schema.columns() {
            missing_values.push(MissingCount {
                column: column.clone(),
                count: self.corpus.missing_count(column)?,
            });
        }

        let mut stats = CorpusStatistics {
            total_samples: self.corpus.len(),
            missing_values,
            text: None,
            summary: None,
            avg_compression_ratio: None,
            category_distribution: None,
        };

        let mut text_lengths = None;
        let mut summary_lengths = None;
        for field in schema.text_fields() {
            let features = FieldFeatures::derive(&self.corpus, field, self.tokenizer.as_ref())?;
            features.write_to(&mut self.corpus, field)?;
            let averages = features.averages();
            debug!(
                field = field.source_column(),
                avg_length = averages.avg_length,
                avg_sentence_count = averages.avg_sentence_count,
                avg_word_count = averages.avg_word_count,
                "Derived text features"
            );
            match field {
                TextField::Text => {
                    stats.text = Some(averages);
                    text_lengths = Some(features.lengths);
                }
                TextField::Summary => {
                    stats.summary = Some(averages);
                    summary_lengths = Some(features.lengths);
                }
            }
        }

        if let (Some(text), Some(summary)) = (&text_lengths, &summary_lengths) {
            let ratios = compression_ratios(text, summary);
            let undefined = ratios.iter().filter(|ratio| ratio.is_none()).count();
            if undefined > 0 {
                debug!(
                    records = undefined,
                    "Excluding records with empty text from compression ratio"
                );
            }
            stats.avg_compression_ratio = Some(mean_defined(&ratios));
            self.corpus
                .set_column(Series::new(COMPRESSION_RATIO_COLUMN.into(), ratios))?;
        }

        if schema.has_category() {
            let distribution = category_distribution(&self.corpus)?;
            debug!(categories = distribution.len(), "Counted categories");
            stats.category_distribution = Some(distribution);
        }

        info!(
            samples = stats.total_samples,
            sections = stats.keys().len(),
            "Computed corpus statistics"
        );
        Ok(stats)
    }
}

impl std::fmt::Debug for CorpusAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorpusAnalyzer")
            .field("samples", &self.corpus.len())
            .field("computed", &self.stats.is_some())
            .finish_non_exhaustive()
    }
}
