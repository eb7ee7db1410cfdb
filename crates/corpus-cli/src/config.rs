//! Pipeline configuration file.
//!
//! ```toml
//! [preprocess]
//! remove_special_chars = true
//! remove_stopwords = false
//!
//! [sample]
//! index = 0
//! max_chars = 200
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::fs;
use std::path::{Path, PathBuf};

use corpus_text::NormalizerOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Characters of text shown per field when printing a sample.
pub const DEFAULT_SAMPLE_MAX_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Everything the `analyze` command can take from a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub preprocess: NormalizerOptions,
    pub sample: SampleConfig,
}

/// Which record to print after analysis, and how much of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    pub index: usize,
    pub max_chars: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            index: 0,
            max_chars: DEFAULT_SAMPLE_MAX_CHARS,
        }
    }
}

/// Parse a configuration from TOML text.
pub fn parse_config(source: &str, path: &Path) -> Result<PipelineConfig, ConfigError> {
    toml::from_str(source).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a configuration file.
pub fn load_config(path: &Path) -> Result<PipelineConfig, ConfigError> {
    let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&source, path)
}
