//! Text normalization and tokenization for corpus analysis.
//!
//! - **Normalizer**: lowercases, optionally strips punctuation, collapses
//!   whitespace and optionally drops English stopwords
//! - **Tokenizer**: UAX #29 sentence and word segmentation
//! - **Resources**: the stopword set and tokenizer, built once and shared
//!
//! # Example
//!
//! ```
//! use corpus_text::{LanguageResources, NormalizerOptions, TextNormalizer};
//!
//! let resources = LanguageResources::english();
//! let options = NormalizerOptions {
//!     remove_special_chars: true,
//!     remove_stopwords: false,
//! };
//! let normalizer = TextNormalizer::new(options, &resources);
//! assert_eq!(normalizer.normalize(Some("Hello, World!!")), "hello world");
//! ```

mod normalizer;
mod resources;
mod stopwords;
mod tokenizer;

pub use normalizer::{NormalizerOptions, TextNormalizer};
pub use resources::LanguageResources;
pub use stopwords::{ENGLISH_STOPWORDS, StopwordSet};
pub use tokenizer::{Tokenizer, UnicodeTokenizer};
