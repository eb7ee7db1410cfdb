//! The statistics bundle.

use corpus_model::TextField;

/// Means of the derived features of one text field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldAverages {
    /// Mean character count.
    pub avg_length: f64,
    pub avg_sentence_count: f64,
    pub avg_word_count: f64,
}

/// Null or empty values in one source column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCount {
    pub column: String,
    pub count: usize,
}

/// Occurrences of one category value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Aggregate statistics for one analysis run.
///
/// Built once by [`CorpusAnalyzer`](crate::CorpusAnalyzer) and never mutated;
/// recomputation replaces the whole value. Optional sections are `None` when
/// the corpus schema lacks the columns they need.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusStatistics {
    pub total_samples: usize,
    /// Per source column, in column order.
    pub missing_values: Vec<MissingCount>,
    pub text: Option<FieldAverages>,
    pub summary: Option<FieldAverages>,
    /// Mean of `summary_length / text_length` over records with non-empty
    /// text. NaN when no record qualifies.
    pub avg_compression_ratio: Option<f64>,
    /// Sorted by descending count, ties in first-seen order.
    pub category_distribution: Option<Vec<CategoryCount>>,
}

impl CorpusStatistics {
    /// Averages for a text field, if its column was present.
    pub fn field(&self, field: TextField) -> Option<&FieldAverages> {
        match field {
            TextField::Text => self.text.as_ref(),
            TextField::Summary => self.summary.as_ref(),
        }
    }

    /// Missing count for a source column.
    pub fn missing(&self, column: &str) -> Option<usize> {
        self.missing_values
            .iter()
            .find(|entry| entry.column == column)
            .map(|entry| entry.count)
    }

    /// Occurrences of a category value.
    pub fn category_count(&self, category: &str) -> Option<usize> {
        self.category_distribution
            .as_ref()?
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.count)
    }

    /// Numeric statistic by name, e.g. `avg_summary_word_count`.
    pub fn scalar(&self, key: &str) -> Option<f64> {
        match key {
            "total_samples" => Some(self.total_samples as f64),
            "avg_text_length" => self.text.map(|a| a.avg_length),
            "avg_sentence_count" => self.text.map(|a| a.avg_sentence_count),
            "avg_word_count" => self.text.map(|a| a.avg_word_count),
            "avg_summary_length" => self.summary.map(|a| a.avg_length),
            "avg_summary_sentence_count" => self.summary.map(|a| a.avg_sentence_count),
            "avg_summary_word_count" => self.summary.map(|a| a.avg_word_count),
            "avg_compression_ratio" => self.avg_compression_ratio,
            _ => None,
        }
    }

    /// True if the bundle has an entry with this name.
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys().iter().any(|present| *present == key)
    }

    /// Names of the statistics present, in computation order.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = vec!["missing_values", "total_samples"];
        if self.text.is_some() {
            keys.extend(["avg_text_length", "avg_sentence_count", "avg_word_count"]);
        }
        if self.summary.is_some() {
            keys.extend([
                "avg_summary_length",
                "avg_summary_sentence_count",
                "avg_summary_word_count",
            ]);
        }
        if self.avg_compression_ratio.is_some() {
            keys.push("avg_compression_ratio");
        }
        if self.category_distribution.is_some() {
            keys.push("category_distribution");
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_only() -> CorpusStatistics {
        CorpusStatistics {
            total_samples: 4,
            missing_values: vec![MissingCount {
                column: "text".to_string(),
                count: 1,
            }],
            text: Some(FieldAverages {
                avg_length: 10.0,
                avg_sentence_count: 1.0,
                avg_word_count: 2.5,
            }),
            summary: None,
            avg_compression_ratio: None,
            category_distribution: None,
        }
    }

    #[test]
    fn test_keys_follow_present_sections() {
        let stats = text_only();
        assert_eq!(
            stats.keys(),
            vec![
                "missing_values",
                "total_samples",
                "avg_text_length",
                "avg_sentence_count",
                "avg_word_count",
            ]
        );
        assert!(!stats.contains_key("avg_summary_length"));
        assert!(!stats.contains_key("category_distribution"));
    }

    #[test]
    fn test_scalar_lookup() {
        let stats = text_only();
        assert_eq!(stats.scalar("total_samples"), Some(4.0));
        assert_eq!(stats.scalar("avg_word_count"), Some(2.5));
        assert_eq!(stats.scalar("avg_summary_word_count"), None);
        assert_eq!(stats.scalar("unknown"), None);
    }

    #[test]
    fn test_missing_lookup() {
        let stats = text_only();
        assert_eq!(stats.missing("text"), Some(1));
        assert_eq!(stats.missing("summary"), None);
    }
}
