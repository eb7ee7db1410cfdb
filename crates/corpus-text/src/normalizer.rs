//! Text cleaning.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::resources::LanguageResources;
use crate::stopwords::StopwordSet;
use crate::tokenizer::Tokenizer;

/// Anything that is neither a word character nor whitespace.
static SPECIAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("Invalid special character regex"));

/// Optional normalization steps. Lowercasing and whitespace collapsing
/// always run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerOptions {
    /// Drop every character outside `[\w\s]`.
    pub remove_special_chars: bool,
    /// Drop tokens found in the stopword set.
    pub remove_stopwords: bool,
}

/// Converts raw text into its cleaned canonical form.
///
/// Steps run in a fixed order: lowercase, strip special characters,
/// collapse whitespace, remove stopwords.
#[derive(Clone)]
pub struct TextNormalizer {
    options: NormalizerOptions,
    stopwords: Option<Arc<StopwordSet>>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl TextNormalizer {
    /// The stopword set is only retained when stopword removal is enabled.
    pub fn new(options: NormalizerOptions, resources: &LanguageResources) -> Self {
        let stopwords = options
            .remove_stopwords
            .then(|| Arc::clone(resources.stopwords()));
        Self {
            options,
            stopwords,
            tokenizer: Arc::clone(resources.tokenizer()),
        }
    }

    pub fn options(&self) -> NormalizerOptions {
        self.options
    }

    /// Normalize one value. Missing input yields an empty string.
    pub fn normalize(&self, raw: Option<&str>) -> String {
        let Some(raw) = raw else {
            return String::new();
        };

        let mut text = raw.to_lowercase();

        if self.options.remove_special_chars {
            text = SPECIAL_CHARS.replace_all(&text, "").into_owned();
        }

        text = collapse_whitespace(&text);

        if let Some(stopwords) = &self.stopwords {
            text = self
                .tokenizer
                .words(&text)
                .into_iter()
                .filter(|word| !stopwords.contains(word))
                .collect::<Vec<_>>()
                .join(" ");
        }

        text
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Join whitespace-separated runs with single spaces, trimming both ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer(remove_special_chars: bool, remove_stopwords: bool) -> TextNormalizer {
        TextNormalizer::new(
            NormalizerOptions {
                remove_special_chars,
                remove_stopwords,
            },
            &LanguageResources::english(),
        )
    }

    #[test]
    fn test_missing_input_is_empty() {
        for (special, stop) in [(false, false), (true, false), (false, true), (true, true)] {
            assert_eq!(normalizer(special, stop).normalize(None), "");
        }
    }

    #[test]
    fn test_default_collapses_whitespace() {
        let n = normalizer(false, false);
        assert_eq!(n.normalize(Some("a\t\tb   c\n")), "a b c");
        assert_eq!(n.normalize(Some("  Hello,   World!! ")), "hello, world!!");
    }

    #[test]
    fn test_remove_special_chars() {
        let n = normalizer(true, false);
        assert_eq!(n.normalize(Some("Hello, World!!")), "hello world");
        assert_eq!(n.normalize(Some("snake_case & co.")), "snake_case co");
        assert_eq!(n.normalize(Some("Ünïcödé — text")), "ünïcödé text");
    }

    #[test]
    fn test_remove_stopwords() {
        let n = normalizer(false, true);
        assert_eq!(n.normalize(Some("this is a test")), "test");
        assert_eq!(n.normalize(Some("THIS Is A Test")), "test");
    }

    #[test]
    fn test_remove_stopwords_splits_punctuation() {
        let n = normalizer(false, true);
        assert_eq!(n.normalize(Some("The cat, it sat.")), "cat , sat .");
    }

    #[test]
    fn test_all_steps() {
        let n = normalizer(true, true);
        assert_eq!(
            n.normalize(Some("The BBC is facing a major crisis!")),
            "bbc facing major crisis"
        );
    }

    #[test]
    fn test_stopwords_dropped_when_disabled() {
        let n = normalizer(false, false);
        assert!(n.stopwords.is_none());
        assert_eq!(n.normalize(Some("this is a test")), "this is a test");
    }

    #[test]
    fn test_injected_stopwords_replace_english_list() {
        let resources =
            LanguageResources::english().with_stopwords(StopwordSet::from_words(["cat", "sat"]));
        let n = TextNormalizer::new(
            NormalizerOptions {
                remove_special_chars: true,
                remove_stopwords: true,
            },
            &resources,
        );
        assert_eq!(n.normalize(Some("The cat sat on the mat.")), "the on the mat");
    }

    #[test]
    fn test_options_from_toml() {
        let options: NormalizerOptions = toml::from_str("remove_stopwords = true").unwrap();
        assert!(options.remove_stopwords);
        assert!(!options.remove_special_chars);
    }
}
