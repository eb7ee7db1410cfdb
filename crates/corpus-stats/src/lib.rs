//! Corpus statistics engine.
//!
//! Derives per-record features (character lengths, sentence and word counts,
//! compression ratios) and corpus-level aggregates from a [`Corpus`].
//!
//! # Example
//!
//! ```ignore
//! use corpus_stats::CorpusAnalyzer;
//! use corpus_text::LanguageResources;
//!
//! let resources = LanguageResources::english();
//! let mut analyzer = CorpusAnalyzer::new(corpus, &resources);
//! let stats = analyzer.compute_statistics()?;
//! println!("{stats}");
//! ```
//!
//! Each aggregate section only appears when the schema carries the columns
//! it needs:
//!
//! | Section | Requires |
//! |---|---|
//! | text averages | `text` |
//! | summary averages | `summary` |
//! | compression ratio | `text` and `summary` |
//! | category distribution | `category` |
//!
//! [`Corpus`]: corpus_model::Corpus

mod analyzer;
mod bundle;
mod error;
mod features;
mod report;

pub use analyzer::CorpusAnalyzer;
pub use bundle::{CategoryCount, CorpusStatistics, FieldAverages, MissingCount};
pub use error::{Result, StatsError};
pub use features::{FieldFeatures, category_distribution, compression_ratios};
pub use report::{print_statistics, render_statistics};
