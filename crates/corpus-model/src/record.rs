//! Single-row view used for sample inspection.

/// One row of a corpus, with values rendered as strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    index: usize,
    fields: Vec<(String, Option<String>)>,
}

impl Record {
    pub fn new(index: usize, fields: Vec<(String, Option<String>)>) -> Self {
        Self { index, fields }
    }

    /// Row position in the corpus.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Value of a field; `None` when the field is absent or null.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .and_then(|(_, value)| value.as_deref())
    }

    /// True if the corpus had this column, whatever the value.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|(field, _)| field == name)
    }

    pub fn fields(&self) -> &[(String, Option<String>)] {
        &self.fields
    }
}

/// Cut `text` to at most `max_chars` characters, appending `...` when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}
