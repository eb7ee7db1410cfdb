//! Integration tests for loading and saving corpora.

use std::fs;

use corpus_ingest::{
    IngestError, ReadOptions, SAMPLE_TEXTS, read_corpus, read_corpus_with_options,
    write_sample_dataset,
};

#[test]
fn test_sample_dataset_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data/sample-news-summary.csv");

    write_sample_dataset(&path).unwrap();
    let corpus = read_corpus(&path).unwrap();

    assert_eq!(corpus.len(), 2);
    let texts = corpus.string_values("text").unwrap();
    // the second article contains "8,000" and must survive quoting
    assert_eq!(texts[1], Some(SAMPLE_TEXTS[1]));
}

#[test]
fn test_multiline_quoted_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("multiline.csv");
    fs::write(
        &path,
        "text,summary,category\n\"First line.\nSecond line.\",Lines.,demo\n\"Solo.\",,\n",
    )
    .unwrap();

    let corpus = read_corpus(&path).unwrap();

    assert_eq!(corpus.len(), 2);
    assert_eq!(
        corpus.string_values("text").unwrap()[0],
        Some("First line.\nSecond line.")
    );
    assert_eq!(corpus.missing_count("summary").unwrap(), 1);
    assert_eq!(corpus.missing_count("category").unwrap(), 1);
}

#[test]
fn test_header_only_file_is_an_empty_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "text,summary\n").unwrap();

    let corpus = read_corpus(&path).unwrap();

    assert!(corpus.is_empty());
    assert!(corpus.schema().has_text_and_summary());
}

#[test]
fn test_size_limit_applies() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.csv");
    fs::write(&path, "text\nsome article text\n").unwrap();

    let options = ReadOptions {
        max_file_size: 8,
        ..ReadOptions::default()
    };
    let err = read_corpus_with_options(&path, &options).unwrap_err();

    assert!(matches!(err, IngestError::FileTooLarge { .. }));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_corpus(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
