//! CSV corpus loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use corpus_model::Corpus;
use polars::prelude::*;
use tracing::{info, info_span, warn};

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Rows sampled for dtype inference.
const DEFAULT_INFER_SCHEMA_LENGTH: usize = 100;

/// Column count above which a load is logged as unusually wide.
const WIDE_DATASET_COLUMNS: usize = 500;

/// Options for [`read_corpus_with_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    /// Reject files larger than this many bytes.
    pub max_file_size: u64,
    /// Rows used for dtype inference; `None` scans the whole file.
    pub infer_schema_length: Option<usize>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            max_file_size: MAX_CSV_FILE_SIZE,
            infer_schema_length: Some(DEFAULT_INFER_SCHEMA_LENGTH),
        }
    }
}

fn open_error(path: &Path, err: std::io::Error) -> IngestError {
    if err.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reject UTF-16 input, which the CSV reader would decode as garbage.
///
/// A UTF-8 BOM is accepted.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }

    Ok(())
}

/// Check column names after loading.
fn validate_columns(df: &DataFrame, path: &Path) -> Result<()> {
    if df.width() > WIDE_DATASET_COLUMNS {
        warn!(
            path = %path.display(),
            columns = df.width(),
            "Dataset has more than {WIDE_DATASET_COLUMNS} columns"
        );
    }

    for name in df.get_column_names() {
        if name.trim().is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
            });
        }
    }

    Ok(())
}

/// Reads a CSV file with a header row into a [`Corpus`].
pub fn read_corpus(path: &Path) -> Result<Corpus> {
    read_corpus_with_options(path, &ReadOptions::default())
}

/// Reads a CSV file into a [`Corpus`] with explicit options.
///
/// Empty cells become nulls, so a missing summary stays distinguishable from
/// any real string value.
pub fn read_corpus_with_options(path: &Path, options: &ReadOptions) -> Result<Corpus> {
    let span = info_span!("read_corpus", path = %path.display());
    let _guard = span.enter();

    check_file_size_with_limit(path, options.max_file_size)?;
    validate_encoding(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(options.infer_schema_length)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_columns(&df, path)?;

    info!(
        rows = df.height(),
        columns = df.width(),
        "Dataset loaded"
    );
    Ok(Corpus::new(df)?)
}
