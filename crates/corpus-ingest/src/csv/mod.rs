//! CSV reading and writing.

mod reader;
mod writer;

pub use reader::{
    MAX_CSV_FILE_SIZE, ReadOptions, check_file_size, check_file_size_with_limit, read_corpus,
    read_corpus_with_options, validate_encoding,
};
pub use writer::write_corpus;
