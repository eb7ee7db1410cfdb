//! Terminal output for samples and statistics.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use corpus_model::{Record, TextField, truncate_chars};
use corpus_stats::CorpusStatistics;

/// Render one record: original and cleaned text cut to `max_chars`, then the
/// original and cleaned summary in full. Fields the corpus lacks are skipped.
pub fn render_sample(record: &Record, max_chars: usize) -> String {
    let mut out = format!("Sample #{}:\n", record.index());
    let text = TextField::Text;
    if record.has_field(text.source_column()) {
        out.push_str(&format!("\nOriginal text (first {max_chars} chars):\n"));
        out.push_str(&truncate_chars(record.get(text.source_column()).unwrap_or(""), max_chars));
        out.push('\n');
    }
    if record.has_field(text.clean_column()) {
        out.push_str(&format!("\nCleaned text (first {max_chars} chars):\n"));
        out.push_str(&truncate_chars(record.get(text.clean_column()).unwrap_or(""), max_chars));
        out.push('\n');
    }
    let summary = TextField::Summary;
    if record.has_field(summary.source_column()) {
        out.push_str("\nOriginal summary:\n");
        out.push_str(record.get(summary.source_column()).unwrap_or(""));
        out.push('\n');
    }
    if record.has_field(summary.clean_column()) {
        out.push_str("\nCleaned summary:\n");
        out.push_str(record.get(summary.clean_column()).unwrap_or(""));
        out.push('\n');
    }
    out
}

pub fn print_sample(record: &Record, max_chars: usize) {
    println!();
    print!("{}", render_sample(record, max_chars));
}

/// The statistics bundle as a two-column table.
pub fn statistics_table(stats: &CorpusStatistics) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    for key in stats.keys() {
        match key {
            "missing_values" => {
                for entry in &stats.missing_values {
                    table.add_row(vec![
                        Cell::new(format!("missing: {}", entry.column)),
                        count_cell(entry.count),
                    ]);
                }
            }
            "category_distribution" => {
                for entry in stats.category_distribution.iter().flatten() {
                    table.add_row(vec![
                        Cell::new(format!("category: {}", entry.category)),
                        Cell::new(entry.count),
                    ]);
                }
            }
            "total_samples" => {
                table.add_row(vec![
                    Cell::new(key).add_attribute(Attribute::Bold),
                    Cell::new(stats.total_samples).add_attribute(Attribute::Bold),
                ]);
            }
            _ => {
                let value = stats.scalar(key).unwrap_or(f64::NAN);
                table.add_row(vec![Cell::new(key), average_cell(value)]);
            }
        }
    }
    table
}

pub fn print_statistics_table(stats: &CorpusStatistics) {
    println!("{}", statistics_table(stats));
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        Cell::new(count).fg(Color::DarkGrey)
    } else {
        Cell::new(count).fg(Color::Yellow)
    }
}

fn average_cell(value: f64) -> Cell {
    if value.is_finite() {
        Cell::new(format!("{value:.2}"))
    } else {
        Cell::new("n/a").fg(Color::DarkGrey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpus_stats::{CategoryCount, FieldAverages, MissingCount};

    fn record(fields: &[(&str, Option<&str>)]) -> Record {
        Record::new(
            1,
            fields
                .iter()
                .map(|(name, value)| (name.to_string(), value.map(str::to_string)))
                .collect(),
        )
    }

    #[test]
    fn test_render_sample_truncates_text_only() {
        let record = record(&[
            ("text", Some("The cat sat on the mat.")),
            ("summary", Some("A cat sat somewhere comfortable.")),
            ("clean_text", Some("the cat sat on the mat")),
            ("clean_summary", Some("a cat sat somewhere comfortable")),
        ]);
        let rendered = render_sample(&record, 7);
        assert_eq!(
            rendered,
            "Sample #1:\n\
             \nOriginal text (first 7 chars):\nThe cat...\n\
             \nCleaned text (first 7 chars):\nthe cat...\n\
             \nOriginal summary:\nA cat sat somewhere comfortable.\n\
             \nCleaned summary:\na cat sat somewhere comfortable\n"
        );
    }

    #[test]
    fn test_render_sample_skips_absent_fields() {
        let record = record(&[("text", None), ("category", Some("news"))]);
        let rendered = render_sample(&record, 200);
        assert_eq!(
            rendered,
            "Sample #1:\n\nOriginal text (first 200 chars):\n\n"
        );
    }

    #[test]
    fn test_statistics_table_rows() {
        let stats = CorpusStatistics {
            total_samples: 3,
            missing_values: vec![MissingCount {
                column: "text".to_string(),
                count: 1,
            }],
            text: Some(FieldAverages {
                avg_length: 10.0,
                avg_sentence_count: 1.0,
                avg_word_count: 2.5,
            }),
            summary: None,
            avg_compression_ratio: None,
            category_distribution: Some(vec![CategoryCount {
                category: "news".to_string(),
                count: 2,
            }]),
        };
        let rendered = statistics_table(&stats).to_string();
        assert!(rendered.contains("missing: text"));
        assert!(rendered.contains("avg_word_count"));
        assert!(rendered.contains("2.50"));
        assert!(rendered.contains("category: news"));
        assert!(!rendered.contains("avg_summary_length"));
    }
}
