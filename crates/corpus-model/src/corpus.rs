//! The in-memory corpus.

use polars::prelude::*;

use crate::error::{ModelError, Result};
use crate::field::{CATEGORY_COLUMN, TextField};
use crate::record::Record;
use crate::schema::CorpusSchema;

/// Ordered, column-uniform collection of text records.
#[derive(Debug, Clone)]
pub struct Corpus {
    frame: DataFrame,
    schema: CorpusSchema,
}

impl Corpus {
    /// Wrap a loaded frame, capturing its schema.
    ///
    /// The `text`, `summary` and `category` columns are cast to strings so
    /// that CSV type inference cannot turn a label column into integers.
    pub fn new(mut frame: DataFrame) -> Result<Self> {
        let schema = CorpusSchema::from_frame(&frame);
        let string_columns = TextField::ALL
            .iter()
            .map(|field| field.source_column())
            .chain(std::iter::once(CATEGORY_COLUMN));
        for name in string_columns {
            if !schema.contains(name) {
                continue;
            }
            let column = frame.column(name)?;
            if column.dtype() != &DataType::String {
                let cast = column.cast(&DataType::String)?;
                frame.with_column(cast)?;
            }
        }
        Ok(Self { frame, schema })
    }

    /// Build a corpus from named, nullable string columns.
    pub fn from_columns(columns: Vec<(&str, Vec<Option<&str>>)>) -> Result<Self> {
        let columns: Vec<Column> = columns
            .into_iter()
            .map(|(name, values)| Series::new(name.into(), values).into_column())
            .collect();
        Self::new(DataFrame::new(columns)?)
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn schema(&self) -> &CorpusSchema {
        &self.schema
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// True if the column exists, source or derived.
    pub fn has_column(&self, name: &str) -> bool {
        self.frame.column(name).is_ok()
    }

    /// String values of a column, `None` for nulls.
    pub fn string_values(&self, name: &str) -> Result<Vec<Option<&str>>> {
        let column = self
            .frame
            .column(name)
            .map_err(|_| ModelError::ColumnNotFound {
                column: name.to_string(),
            })?;
        Ok(column.str()?.iter().collect())
    }

    /// Number of null or empty-string values in a column.
    pub fn missing_count(&self, name: &str) -> Result<usize> {
        let column = self
            .frame
            .column(name)
            .map_err(|_| ModelError::ColumnNotFound {
                column: name.to_string(),
            })?;
        let nulls = column.null_count();
        let empty = match column.str() {
            Ok(values) => values
                .iter()
                .flatten()
                .filter(|value| value.is_empty())
                .count(),
            Err(_) => 0,
        };
        Ok(nulls + empty)
    }

    /// Add or replace a derived column. Source columns are read-only.
    pub fn set_column(&mut self, series: Series) -> Result<()> {
        let name = series.name().to_string();
        if self.schema.contains(&name) {
            return Err(ModelError::SourceColumnOverwrite { column: name });
        }
        if series.len() != self.frame.height() {
            return Err(ModelError::LengthMismatch {
                column: name,
                expected: self.frame.height(),
                actual: series.len(),
            });
        }
        self.frame.with_column(series)?;
        Ok(())
    }

    /// Snapshot of one row.
    pub fn record(&self, index: usize) -> Result<Record> {
        let len = self.frame.height();
        if index >= len {
            return Err(ModelError::RowOutOfBounds { index, len });
        }
        let mut fields = Vec::with_capacity(self.frame.width());
        for column in self.frame.get_columns() {
            let value = match column.get(index)? {
                AnyValue::Null => None,
                other => Some(crate::polars::any_to_string(other)),
            };
            fields.push((column.name().to_string(), value));
        }
        Ok(Record::new(index, fields))
    }
}
