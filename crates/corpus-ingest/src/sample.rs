//! Bundled sample dataset.

use std::path::Path;

use corpus_model::Corpus;
use tracing::info;

use crate::csv::write_corpus;
use crate::error::Result;

/// Source articles of the sample corpus.
pub const SAMPLE_TEXTS: [&str; 2] = [
    "The BBC is facing a major crisis as the TV license fee comes under scrutiny. \
     The government has frozen the license fee for two years and is considering its future. \
     The BBC says this will impact its programming and services.",
    "Scientists have discovered a new species of deep-sea fish that can survive extreme pressure. \
     The fish was found at a depth of over 8,000 meters in the Mariana Trench. \
     Researchers say this discovery could help in understanding adaptation to extreme environments.",
];

/// Reference summaries, aligned with [`SAMPLE_TEXTS`].
pub const SAMPLE_SUMMARIES: [&str; 2] = [
    "BBC facing crisis as TV license fee is frozen for two years with future under consideration.",
    "New deep-sea fish species discovered in Mariana Trench that can survive extreme pressure.",
];

/// Two news articles with reference summaries.
pub fn sample_corpus() -> Result<Corpus> {
    let texts: Vec<Option<&str>> = SAMPLE_TEXTS.iter().copied().map(Some).collect();
    let summaries: Vec<Option<&str>> = SAMPLE_SUMMARIES.iter().copied().map(Some).collect();
    Ok(Corpus::from_columns(vec![
        ("text", texts),
        ("summary", summaries),
    ])?)
}

/// Write the sample corpus as CSV and return it.
pub fn write_sample_dataset(path: &Path) -> Result<Corpus> {
    let corpus = sample_corpus()?;
    write_corpus(path, &corpus)?;
    info!(path = %path.display(), samples = corpus.len(), "Sample dataset written");
    Ok(corpus)
}
