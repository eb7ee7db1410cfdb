//! CSV corpus writing.

use std::fs::{self, File};
use std::path::Path;

use corpus_model::Corpus;
use polars::prelude::*;
use tracing::info;

use crate::error::{IngestError, Result};

/// Write every column of the corpus, derived ones included, with a header.
///
/// Parent directories are created as needed.
pub fn write_corpus(path: &Path, corpus: &Corpus) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| IngestError::FileWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut frame = corpus.frame().clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut frame)
        .map_err(|e| IngestError::CsvWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    info!(
        path = %path.display(),
        rows = frame.height(),
        columns = frame.width(),
        "Corpus saved"
    );
    Ok(())
}
