//! Corpus ingestion utilities.
//!
//! Loads tabular text corpora from CSV into a [`Corpus`](corpus_model::Corpus)
//! and writes processed corpora back out.
//!
//! # Features
//!
//! - **CSV Loading**: header row, quoted multi-line fields, empty cells kept
//!   as nulls rather than `"nan"` strings
//! - **Guards**: file size limit and UTF-16 detection before parsing
//! - **CSV Writing**: source and derived columns together
//! - **Sample Dataset**: a two-record news corpus for smoke runs
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use corpus_ingest::{read_corpus, write_corpus};
//!
//! let corpus = read_corpus(Path::new("data/news-summary.csv"))?;
//! write_corpus(Path::new("processed.csv"), &corpus)?;
//! ```

mod csv;
mod error;
mod sample;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading / Writing ===
pub use csv::{
    MAX_CSV_FILE_SIZE, ReadOptions, check_file_size, check_file_size_with_limit, read_corpus,
    read_corpus_with_options, validate_encoding, write_corpus,
};

// === Sample Data ===
pub use sample::{SAMPLE_SUMMARIES, SAMPLE_TEXTS, sample_corpus, write_sample_dataset};
