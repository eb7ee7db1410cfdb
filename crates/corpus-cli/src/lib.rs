//! CLI library components for the corpus analyzer.
//!
//! The binary wires these together; they are public so integration tests can
//! drive a [`CorpusProcessor`](processor::CorpusProcessor) without a process
//! boundary.

pub mod config;
pub mod logging;
pub mod processor;
pub mod summary;
