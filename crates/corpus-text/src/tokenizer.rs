//! Sentence and word tokenization.
//!
//! Counts reported by the statistics engine depend directly on these
//! boundaries, so the default [`UnicodeTokenizer`] is fixed to UAX #29
//! segmentation:
//!
//! | Input | Sentences | Words |
//! |---|---|---|
//! | `The cat sat. It was happy.` | 2 | 8 |
//! | `Dogs run.` | 1 | 3 |
//! | `Don't stop.` | 1 | 3 |

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into sentences and word tokens.
pub trait Tokenizer: Send + Sync {
    /// Sentence segments, each containing some non-whitespace text.
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Word and punctuation tokens, whitespace removed.
    fn words<'a>(&self, text: &'a str) -> Vec<&'a str>;

    fn sentence_count(&self, text: &str) -> usize {
        self.sentences(text).len()
    }

    fn word_count(&self, text: &str) -> usize {
        self.words(text).len()
    }
}

/// UAX #29 tokenizer.
///
/// Punctuation marks become their own tokens (`sat.` → `sat`, `.`), while
/// contractions and decimal numbers stay whole (`don't`, `3.5`).
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl UnicodeTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for UnicodeTokenizer {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_sentence_bounds()
            .filter(|segment| !is_blank(segment))
            .collect()
    }

    fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_word_bounds()
            .filter(|segment| !is_blank(segment))
            .collect()
    }
}

fn is_blank(segment: &str) -> bool {
    segment.chars().all(char::is_whitespace)
}
