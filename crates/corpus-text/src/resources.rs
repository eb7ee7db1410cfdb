//! Shared language resources.

use std::fmt;
use std::sync::Arc;

use crate::stopwords::StopwordSet;
use crate::tokenizer::{Tokenizer, UnicodeTokenizer};

/// Stopword set and tokenizer, created once at startup and handed to the
/// normalizer and the statistics engine.
///
/// Cloning is cheap: both resources sit behind `Arc`.
#[derive(Clone)]
pub struct LanguageResources {
    stopwords: Arc<StopwordSet>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl LanguageResources {
    pub fn new(stopwords: StopwordSet, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self {
            stopwords: Arc::new(stopwords),
            tokenizer,
        }
    }

    /// English stopwords with the UAX #29 tokenizer.
    pub fn english() -> Self {
        tracing::debug!("Loading English language resources");
        Self::new(StopwordSet::english(), Arc::new(UnicodeTokenizer::new()))
    }

    /// Replace the stopword set.
    #[must_use]
    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = Arc::new(stopwords);
        self
    }

    /// Replace the tokenizer.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn stopwords(&self) -> &Arc<StopwordSet> {
        &self.stopwords
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }
}

impl Default for LanguageResources {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Debug for LanguageResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageResources")
            .field("stopwords", &self.stopwords.len())
            .finish_non_exhaustive()
    }
}
