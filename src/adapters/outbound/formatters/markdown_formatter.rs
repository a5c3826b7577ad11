use crate::application::read_models::InventoryReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// MarkdownFormatter adapter rendering the report as a Markdown document
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_header(&self, output: &mut String, report: &InventoryReport) {
        output.push_str("# Hardware Inventory Report\n\n");
        output.push_str(&format!(
            "Generated {} by {} {}\n\n",
            report.metadata.generated_at, report.metadata.tool_name, report.metadata.tool_version
        ));
    }

    fn render_summary(&self, output: &mut String, report: &InventoryReport) {
        let summary = &report.summary;
        output.push_str("## Summary\n\n");
        output.push_str(&format!("- Files scanned: {}\n", summary.files_scanned));
        output.push_str(&format!("- Archives scanned: {}\n", summary.archives_scanned));
        if summary.sources_failed > 0 {
            output.push_str(&format!("- Unreadable sources: {}\n", summary.sources_failed));
        }
        output.push_str(&format!("- Total entries found: {}\n", summary.total_found));
        output.push_str(&format!("- Duplicates removed: {}\n", summary.duplicates_removed));
        output.push_str(&format!("- Unique entries: {}\n\n", summary.unique_kept));
    }

    fn render_inventory(&self, output: &mut String, report: &InventoryReport) {
        let columns = report.columns();
        output.push_str("## Inventory\n\n");
        output.push_str(&format!("| {} |\n", columns.join(" | ")));
        output.push_str(&format!("|{}\n", "---|".repeat(columns.len())));

        for row in &report.rows {
            let cells: Vec<String> = row
                .cells(report.include_group)
                .into_iter()
                .map(Self::escape_markdown_table_cell)
                .collect();
            output.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &InventoryReport) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, report);
        self.render_summary(&mut output, report);
        self.render_inventory(&mut output, report);
        Ok(output)
    }
}
