//! Statement exporters: bordered table, CSV, JSON and Markdown.

/// Renders [`ReportData`] into one text format
pub trait ReportExporter {
    fn export(&self, report: &dyn ReportData) -> String;

    /// File extension for this format
    fn extension(&self) -> &'static str;
}

/// Tabular report: title, column headers, rows and summary pairs
pub trait ReportData {
    fn title(&self) -> &str;

    fn headers(&self) -> Vec<String>;

    /// Rows already formatted as cells, one cell per header
    fn rows(&self) -> Vec<Vec<String>>;

    fn summary(&self) -> Vec<(String, String)>;
}

// ============================================================================
// Table Exporter
// ============================================================================

/// Bordered text table with a rule between every row
///
/// ```text
/// +------+-------------+
/// | Date | Description |
/// +------+-------------+
/// |      |   Totals    |
/// +------+-------------+
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TableExporter;

impl TableExporter {
    pub fn new() -> Self {
        Self
    }

    fn rule(widths: &[usize]) -> String {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    }

    fn line(cells: &[String], widths: &[usize]) -> String {
        let mut line = String::from("|");
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            line.push_str(&format!(" {:^width$} |", cell, width = width));
        }
        line.push('\n');
        line
    }
}

impl ReportExporter for TableExporter {
    fn export(&self, report: &dyn ReportData) -> String {
        let headers = report.headers();
        let rows = report.rows();

        // Column widths in characters
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let rule = Self::rule(&widths);
        let mut output = rule.clone();
        output.push_str(&Self::line(&headers, &widths));
        output.push_str(&rule);
        for row in &rows {
            output.push_str(&Self::line(row, &widths));
            output.push_str(&rule);
        }

        output
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}

// ============================================================================
// CSV Exporter
// ============================================================================

/// Comma separated values with a header line
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExporter;

impl CsvExporter {
    const DELIMITER: char = ',';

    pub fn new() -> Self {
        Self
    }

    /// Quote a field holding the delimiter, a quote or a newline
    fn escape(field: &str) -> String {
        if field.contains(Self::DELIMITER) || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn record(fields: &[String]) -> String {
        let mut line = fields
            .iter()
            .map(|field| Self::escape(field))
            .collect::<Vec<_>>()
            .join(&Self::DELIMITER.to_string());
        line.push('\n');
        line
    }
}

impl ReportExporter for CsvExporter {
    fn export(&self, report: &dyn ReportData) -> String {
        let mut output = Self::record(&report.headers());
        for row in report.rows() {
            output.push_str(&Self::record(&row));
        }
        output
    }

    fn extension(&self) -> &'static str {
        "csv"
    }
}

// ============================================================================
// JSON Exporter
// ============================================================================

/// Pretty-printed JSON: `{ "title", "summary", "data" }`, one object per row
/// keyed by column header
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportExporter for JsonExporter {
    fn export(&self, report: &dyn ReportData) -> String {
        let headers = report.headers();

        let data: Vec<serde_json::Value> = report
            .rows()
            .into_iter()
            .map(|row| {
                let object: serde_json::Map<String, serde_json::Value> = headers
                    .iter()
                    .cloned()
                    .zip(row.into_iter().map(serde_json::Value::String))
                    .collect();
                serde_json::Value::Object(object)
            })
            .collect();

        let summary: serde_json::Map<String, serde_json::Value> = report
            .summary()
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect();

        let output = serde_json::json!({
            "title": report.title(),
            "summary": summary,
            "data": data,
        });

        serde_json::to_string_pretty(&output).unwrap_or_default()
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

// ============================================================================
// Markdown Exporter
// ============================================================================

/// Markdown document: title heading, summary list, then a pipe table
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownExporter;

impl MarkdownExporter {
    pub fn new() -> Self {
        Self
    }

    fn table_row<S: AsRef<str>>(cells: &[S]) -> String {
        let cells: Vec<String> = cells
            .iter()
            .map(|c| c.as_ref().replace('|', "\\|"))
            .collect();
        format!("| {} |\n", cells.join(" | "))
    }
}

impl ReportExporter for MarkdownExporter {
    fn export(&self, report: &dyn ReportData) -> String {
        let mut output = format!("# {}\n\n## Summary\n\n", report.title());

        for (key, value) in report.summary() {
            output.push_str(&format!("- **{}**: {}\n", key, value));
        }
        output.push_str("\n## Transactions\n\n");

        let headers = report.headers();
        if headers.is_empty() {
            return output;
        }
        output.push_str(&Self::table_row(&headers));
        output.push_str(&Self::table_row(&vec!["---"; headers.len()]));
        for row in report.rows() {
            output.push_str(&Self::table_row(&row));
        }

        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}
