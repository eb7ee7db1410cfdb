//! Corpus data model.
//!
//! A [`Corpus`] is an in-memory batch of text records held in a Polars
//! [`DataFrame`](polars::prelude::DataFrame). Its [`CorpusSchema`] is captured
//! once at construction and answers every "does this corpus have column X"
//! question for the rest of the pipeline.
//!
//! # Columns
//!
//! - `text`, `summary`: free text fields, see [`TextField`]
//! - `category`: optional categorical label ([`CATEGORY_COLUMN`])
//! - derived columns (`text_length`, `clean_summary`, ...) added later by the
//!   normalizer and the statistics engine

mod corpus;
mod error;
mod field;
mod record;
mod schema;

pub mod polars;

pub use corpus::Corpus;
pub use error::{ModelError, Result};
pub use field::{CATEGORY_COLUMN, COMPRESSION_RATIO_COLUMN, TextField, is_derived_column};
pub use record::{Record, truncate_chars};
pub use schema::CorpusSchema;

pub use crate::polars::{any_to_string, format_numeric};
