//! Coverage table rendering.

use comfy_table::{presets, CellAlignment, ContentArrangement, Table};

/// Translation status of one non-template locale.
pub struct LocaleCoverage {
    /// Locale tag, e.g. `pt_BR`.
    pub locale: String,
    pub translated: usize,
    /// Keys with no usable translation, in template order.
    pub missing: Vec<String>,
}

impl LocaleCoverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Share of `message_count` that is translated, rounded to a whole percent.
    fn percent(&self, message_count: usize) -> String {
        if message_count == 0 {
            return "100%".to_string();
        }
        let ratio = self.translated as f64 / message_count as f64;
        format!("{:.0}%", ratio * 100.0)
    }
}

/// One row per locale: translated count, percentage and missing count.
pub fn format_coverage_table(message_count: usize, coverage: &[LocaleCoverage]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Locale", "Translated", "Percent", "Missing"]);

    for entry in coverage {
        table.add_row(vec![
            entry.locale.clone(),
            format!("{}/{message_count}", entry.translated),
            entry.percent(message_count),
            entry.missing.len().to_string(),
        ]);
    }
    for index in 1..=3 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table
}
