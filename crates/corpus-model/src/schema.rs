//! Corpus schema captured at load time.

use polars::prelude::DataFrame;

use crate::field::{CATEGORY_COLUMN, TextField, is_derived_column};

/// Source columns of a corpus and the optional fields they provide.
///
/// Built once from the loaded frame. Derived columns (lengths, cleaned text,
/// ratios) are never part of the schema, even when the file already carried
/// them, so a saved output can be loaded and processed again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSchema {
    columns: Vec<String>,
    has_text: bool,
    has_summary: bool,
    has_category: bool,
}

impl CorpusSchema {
    /// Capture the schema of a freshly loaded frame.
    pub fn from_frame(frame: &DataFrame) -> Self {
        let columns: Vec<String> = frame
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();
        Self::from_columns(columns)
    }

    /// Build a schema from an ordered list of column names.
    pub fn from_columns(columns: Vec<String>) -> Self {
        let columns: Vec<String> = columns
            .into_iter()
            .filter(|column| !is_derived_column(column))
            .collect();
        let has = |name: &str| columns.iter().any(|column| column == name);
        let has_text = has(TextField::Text.source_column());
        let has_summary = has(TextField::Summary.source_column());
        let has_category = has(CATEGORY_COLUMN);
        Self {
            columns,
            has_text,
            has_summary,
            has_category,
        }
    }

    /// Source columns in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// True if `name` is a source column.
    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    /// True if the source column for `field` was loaded.
    pub fn has_field(&self, field: TextField) -> bool {
        match field {
            TextField::Text => self.has_text,
            TextField::Summary => self.has_summary,
        }
    }

    /// Present text fields in report order.
    pub fn text_fields(&self) -> Vec<TextField> {
        TextField::ALL
            .into_iter()
            .filter(|field| self.has_field(*field))
            .collect()
    }

    /// True when a compression ratio can be derived.
    pub fn has_text_and_summary(&self) -> bool {
        self.has_text && self.has_summary
    }

    pub fn has_category(&self) -> bool {
        self.has_category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(columns: &[&str]) -> CorpusSchema {
        CorpusSchema::from_columns(columns.iter().map(|c| (*c).to_string()).collect())
    }

    #[test]
    fn test_schema_flags() {
        let schema = schema(&["id", "text", "category"]);
        assert!(schema.has_field(TextField::Text));
        assert!(!schema.has_field(TextField::Summary));
        assert!(schema.has_category());
        assert!(!schema.has_text_and_summary());
        assert_eq!(schema.text_fields(), vec![TextField::Text]);
    }

    #[test]
    fn test_schema_keeps_column_order() {
        let schema = schema(&["summary", "text"]);
        assert_eq!(schema.columns(), &["summary".to_string(), "text".to_string()]);
        assert_eq!(schema.text_fields(), vec![TextField::Text, TextField::Summary]);
        assert!(schema.has_text_and_summary());
    }

    #[test]
    fn test_schema_is_case_sensitive() {
        let schema = schema(&["Text", "SUMMARY"]);
        assert!(schema.text_fields().is_empty());
        assert!(schema.contains("Text"));
    }

    #[test]
    fn test_schema_skips_derived_columns() {
        let schema = schema(&["text", "clean_text", "text_length", "summary_word_count", "compression_ratio", "id"]);
        assert_eq!(schema.columns(), &["text".to_string(), "id".to_string()]);
        assert!(!schema.contains("clean_text"));
        assert_eq!(schema.text_fields(), vec![TextField::Text]);
    }
}
