//! Human-readable statistics report.

use std::fmt;

use corpus_model::TextField;

use crate::bundle::{CorpusStatistics, FieldAverages};

impl fmt::Display for CorpusStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset Analysis:")?;
        writeln!(f, "Total samples: {}", self.total_samples)?;
        writeln!(f, "Missing values:")?;
        for entry in &self.missing_values {
            writeln!(f, "  {}: {}", entry.column, entry.count)?;
        }

        if let Some(text) = &self.text {
            writeln!(f)?;
            write_field_section(f, TextField::Text, text)?;
        }

        if let Some(summary) = &self.summary {
            writeln!(f)?;
            write_field_section(f, TextField::Summary, summary)?;
            if let Some(ratio) = self.avg_compression_ratio {
                writeln!(f, "Average compression ratio: {}", format_average(ratio))?;
            }
        }

        if let Some(distribution) = &self.category_distribution {
            writeln!(f)?;
            writeln!(f, "Category distribution:")?;
            for entry in distribution {
                writeln!(f, "  {}: {}", entry.category, entry.count)?;
            }
        }
        Ok(())
    }
}

fn write_field_section(
    f: &mut fmt::Formatter<'_>,
    field: TextField,
    averages: &FieldAverages,
) -> fmt::Result {
    // text counts read "Average word count", summary counts are qualified
    let count_prefix = match field {
        TextField::Text => "",
        TextField::Summary => "summary ",
    };
    writeln!(f, "{} statistics:", field.label())?;
    writeln!(
        f,
        "Average {} length (characters): {}",
        field.source_column(),
        format_average(averages.avg_length)
    )?;
    writeln!(
        f,
        "Average {count_prefix}sentence count: {}",
        format_average(averages.avg_sentence_count)
    )?;
    writeln!(
        f,
        "Average {count_prefix}word count: {}",
        format_average(averages.avg_word_count)
    )
}

fn format_average(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "n/a".to_string()
    }
}

/// Render the report as text.
pub fn render_statistics(stats: &CorpusStatistics) -> String {
    stats.to_string()
}

/// Print the report to stdout, preceded by a blank line.
pub fn print_statistics(stats: &CorpusStatistics) {
    println!();
    print!("{stats}");
}
