//! Per-record feature derivation.

use std::collections::HashMap;

use corpus_model::{CATEGORY_COLUMN, Corpus, TextField};
use corpus_text::Tokenizer;
use polars::prelude::{NamedFrom, Series};

use crate::bundle::{CategoryCount, FieldAverages};
use crate::error::Result;

/// Lengths and token counts of one text field, one entry per record.
///
/// Missing values contribute zeros.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldFeatures {
    pub lengths: Vec<i64>,
    pub sentence_counts: Vec<i64>,
    pub word_counts: Vec<i64>,
}

impl FieldFeatures {
    /// Derive features for every record of `field`.
    pub fn derive(corpus: &Corpus, field: TextField, tokenizer: &dyn Tokenizer) -> Result<Self> {
        let values = corpus.string_values(field.source_column())?;
        let mut features = Self {
            lengths: Vec::with_capacity(values.len()),
            sentence_counts: Vec::with_capacity(values.len()),
            word_counts: Vec::with_capacity(values.len()),
        };
        for value in values {
            let (length, sentences, words) = match value {
                Some(text) => (
                    text.chars().count(),
                    tokenizer.sentence_count(text),
                    tokenizer.word_count(text),
                ),
                None => (0, 0, 0),
            };
            features.lengths.push(length as i64);
            features.sentence_counts.push(sentences as i64);
            features.word_counts.push(words as i64);
        }
        Ok(features)
    }

    /// Store the three feature columns on the corpus.
    pub fn write_to(&self, corpus: &mut Corpus, field: TextField) -> Result<()> {
        corpus.set_column(Series::new(
            field.length_column().into(),
            self.lengths.as_slice(),
        ))?;
        corpus.set_column(Series::new(
            field.sentence_count_column().into(),
            self.sentence_counts.as_slice(),
        ))?;
        corpus.set_column(Series::new(
            field.word_count_column().into(),
            self.word_counts.as_slice(),
        ))?;
        Ok(())
    }

    /// Arithmetic means over all records, zeros included.
    pub fn averages(&self) -> FieldAverages {
        FieldAverages {
            avg_length: mean(&self.lengths),
            avg_sentence_count: mean(&self.sentence_counts),
            avg_word_count: mean(&self.word_counts),
        }
    }
}

/// Per-record `summary / text` length ratio; `None` where the text is empty.
pub fn compression_ratios(text_lengths: &[i64], summary_lengths: &[i64]) -> Vec<Option<f64>> {
    text_lengths
        .iter()
        .zip(summary_lengths)
        .map(|(&text, &summary)| {
            if text == 0 {
                None
            } else {
                Some(summary as f64 / text as f64)
            }
        })
        .collect()
}

/// Count records per category, most frequent first.
///
/// Null and empty labels are skipped. Equal counts keep the order in which
/// the categories first appear.
pub fn category_distribution(corpus: &Corpus) -> Result<Vec<CategoryCount>> {
    let values = corpus.string_values(CATEGORY_COLUMN)?;
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for value in values.into_iter().flatten() {
        if value.is_empty() {
            continue;
        }
        match positions.get(value) {
            Some(&idx) => counts[idx].count += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push(CategoryCount {
                    category: value.to_string(),
                    count: 1,
                });
            }
        }
    }
    // sort_by is stable
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(counts)
}

pub(crate) fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<i64>() as f64 / values.len() as f64
}

/// Mean of the defined ratios; NaN when none are defined.
pub(crate) fn mean_defined(values: &[Option<f64>]) -> f64 {
    let defined: Vec<f64> = values.iter().flatten().copied().collect();
    if defined.is_empty() {
        return f64::NAN;
    }
    defined.iter().sum::<f64>() / defined.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpus_text::UnicodeTokenizer;

    #[test]
    fn test_derive_counts_missing_as_zero() {
        let corpus = Corpus::from_columns(vec![(
            "text",
            vec![Some("The cat sat. It was happy."), None, Some("Dogs run.")],
        )])
        .unwrap();
        let features =
            FieldFeatures::derive(&corpus, TextField::Text, &UnicodeTokenizer::new()).unwrap();
        assert_eq!(features.lengths, vec![26, 0, 9]);
        assert_eq!(features.sentence_counts, vec![2, 0, 1]);
        assert_eq!(features.word_counts, vec![8, 0, 3]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let corpus = Corpus::from_columns(vec![("summary", vec![Some("Ελλάδα")])]).unwrap();
        let features =
            FieldFeatures::derive(&corpus, TextField::Summary, &UnicodeTokenizer::new()).unwrap();
        assert_eq!(features.lengths, vec![6]);
    }

    #[test]
    fn test_averages() {
        let features = FieldFeatures {
            lengths: vec![10, 0, 5],
            sentence_counts: vec![1, 0, 2],
            word_counts: vec![4, 0, 2],
        };
        let averages = features.averages();
        assert_eq!(averages.avg_length, 5.0);
        assert_eq!(averages.avg_sentence_count, 1.0);
        assert_eq!(averages.avg_word_count, 2.0);
    }

    #[test]
    fn test_mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_compression_ratios_skip_empty_text() {
        let ratios = compression_ratios(&[10, 0, 4], &[5, 3, 4]);
        assert_eq!(ratios, vec![Some(0.5), None, Some(1.0)]);
        assert_eq!(mean_defined(&ratios), 0.75);
        assert!(mean_defined(&[None, None]).is_nan());
    }

    #[test]
    fn test_category_distribution_order() {
        let corpus = Corpus::from_columns(vec![(
            "category",
            vec![
                Some("a"),
                Some("b"),
                Some("a"),
                Some("c"),
                Some("b"),
                Some("a"),
            ],
        )])
        .unwrap();
        let counts = category_distribution(&corpus).unwrap();
        let pairs: Vec<(&str, usize)> = counts
            .iter()
            .map(|entry| (entry.category.as_str(), entry.count))
            .collect();
        assert_eq!(pairs, vec![("a", 3), ("b", 2), ("c", 1)]);
    }

    #[test]
    fn test_category_distribution_ties_keep_first_seen() {
        let corpus = Corpus::from_columns(vec![(
            "category",
            vec![Some("sport"), None, Some("tech"), Some(""), Some("tech"), Some("sport")],
        )])
        .unwrap();
        let counts = category_distribution(&corpus).unwrap();
        let names: Vec<&str> = counts.iter().map(|entry| entry.category.as_str()).collect();
        assert_eq!(names, vec!["sport", "tech"]);
        assert!(counts.iter().all(|entry| entry.count == 2));
    }
}
