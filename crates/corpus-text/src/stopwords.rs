//! English stopword list.

use std::collections::HashSet;

/// The 179-entry English stopword list distributed with the NLTK corpora.
///
/// Entries are lowercase; matching is exact, so callers lowercase first.
#[rustfmt::skip]
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself",
    "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing",
    "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
    "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each",
    "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "don't", "should", "should've", "now", "d", "ll", "m", "o",
    "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't",
    "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't",
    "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
    "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// A fixed set of words removed during normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The standard English list.
    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOPWORDS.iter().copied())
    }

    /// Build a set from arbitrary words. Matching stays case-sensitive.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_list_size() {
        assert_eq!(ENGLISH_STOPWORDS.len(), 179);
        assert_eq!(StopwordSet::english().len(), 179);
    }

    #[test]
    fn test_english_list_is_lowercase() {
        for word in ENGLISH_STOPWORDS {
            assert_eq!(*word, word.to_lowercase());
        }
    }

    #[test]
    fn test_contains_is_exact() {
        let set = StopwordSet::english();
        assert!(set.contains("this"));
        assert!(set.contains("don't"));
        assert!(!set.contains("This"));
        assert!(!set.contains("test"));
    }

    #[test]
    fn test_from_words() {
        let set = StopwordSet::from_words(["fox", "dog"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("fox"));
        assert!(!set.contains("the"));
    }
}
