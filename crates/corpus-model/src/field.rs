//! Column naming for source and derived fields.

/// Optional categorical label column.
pub const CATEGORY_COLUMN: &str = "category";

/// Per-record `summary_length / text_length`.
pub const COMPRESSION_RATIO_COLUMN: &str = "compression_ratio";

/// A free-text source field and the columns derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    /// Source document (`text`).
    Text,
    /// Reference summary (`summary`).
    Summary,
}

impl TextField {
    /// Fields in report order.
    pub const ALL: [TextField; 2] = [TextField::Text, TextField::Summary];

    /// Name of the source column.
    pub fn source_column(self) -> &'static str {
        match self {
            TextField::Text => "text",
            TextField::Summary => "summary",
        }
    }

    /// Character count column.
    pub fn length_column(self) -> &'static str {
        match self {
            TextField::Text => "text_length",
            TextField::Summary => "summary_length",
        }
    }

    /// Sentence count column.
    pub fn sentence_count_column(self) -> &'static str {
        match self {
            TextField::Text => "sentence_count",
            TextField::Summary => "summary_sentence_count",
        }
    }

    /// Word token count column.
    pub fn word_count_column(self) -> &'static str {
        match self {
            TextField::Text => "word_count",
            TextField::Summary => "summary_word_count",
        }
    }

    /// Normalized text column.
    pub fn clean_column(self) -> &'static str {
        match self {
            TextField::Text => "clean_text",
            TextField::Summary => "clean_summary",
        }
    }

    /// Every column derived from this field.
    pub fn derived_columns(self) -> [&'static str; 4] {
        [
            self.length_column(),
            self.sentence_count_column(),
            self.word_count_column(),
            self.clean_column(),
        ]
    }

    /// Human-readable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            TextField::Text => "Text",
            TextField::Summary => "Summary",
        }
    }
}

/// True for a column the pipeline derives, whichever file it was read from.
pub fn is_derived_column(name: &str) -> bool {
    name == COMPRESSION_RATIO_COLUMN
        || TextField::ALL
            .iter()
            .flat_map(|field| field.derived_columns())
            .any(|column| column == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_columns() {
        let field = TextField::Text;
        assert_eq!(field.source_column(), "text");
        assert_eq!(field.length_column(), "text_length");
        assert_eq!(field.sentence_count_column(), "sentence_count");
        assert_eq!(field.word_count_column(), "word_count");
        assert_eq!(field.clean_column(), "clean_text");
    }

    #[test]
    fn test_summary_columns() {
        let field = TextField::Summary;
        assert_eq!(field.source_column(), "summary");
        assert_eq!(field.length_column(), "summary_length");
        assert_eq!(field.sentence_count_column(), "summary_sentence_count");
        assert_eq!(field.word_count_column(), "summary_word_count");
        assert_eq!(field.clean_column(), "clean_summary");
    }

    #[test]
    fn test_derived_column_names() {
        assert!(is_derived_column("clean_summary"));
        assert!(is_derived_column("sentence_count"));
        assert!(is_derived_column("compression_ratio"));
        assert!(!is_derived_column("text"));
        assert!(!is_derived_column("category"));
    }
}
