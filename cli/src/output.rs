//! Output formatting for the minibrowser CLI
//!
//! Handles formatting command outcomes for terminal display.
//! Supports human-readable, JSON and quiet output.

use clap::ValueEnum;

use crate::error::{CliError, Result};
use crate::types::{ExtractOptions, HistoryView, Outcome, PageReport, Table};

/// Rows of each table shown in human output
const TABLE_PREVIEW_ROWS: usize = 10;

/// Longest cell shown in human output before truncating
const CELL_PREVIEW_CHARS: usize = 40;

// =============================================================================
// Output Format
// =============================================================================

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
    /// Quiet mode - errors only
    Quiet,
}

// =============================================================================
// Output Formatter
// =============================================================================

/// Formats command outcomes for display
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Create a new formatter with the given format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format and print a command outcome
    pub fn print_outcome(&self, outcome: &Outcome) -> Result<()> {
        let output = self.format_outcome(outcome)?;
        if !output.is_empty() {
            print_success(&output);
        }
        Ok(())
    }

    /// Print an error that ended a command
    pub fn print_failure(&self, error: &CliError) {
        print_error(&self.format_error(error));
    }

    fn format_outcome(&self, outcome: &Outcome) -> Result<String> {
        Ok(match self.format {
            OutputFormat::Human => match outcome {
                Outcome::Page(report) => format_report(report),
                Outcome::History(view) => format_history(view),
                Outcome::Options(options) => format_options(options),
                Outcome::Saved { files } if files.is_empty() => "Nothing to save".to_string(),
                Outcome::Saved { files } => files
                    .iter()
                    .map(|f| format!("Saved {}", f.display()))
                    .collect::<Vec<_>>()
                    .join("\n"),
                Outcome::Unchanged => String::new(),
                Outcome::Message { text } => text.clone(),
            },
            OutputFormat::Json => match outcome {
                Outcome::Unchanged => String::new(),
                _ => serde_json::to_string(outcome)?,
            },
            OutputFormat::Quiet => String::new(),
        })
    }

    fn format_error(&self, error: &CliError) -> String {
        match self.format {
            OutputFormat::Human => format!("Error: {}", error),
            OutputFormat::Json => serde_json::json!({
                "kind": "error",
                "error": error.to_string(),
                "exit_code": error.exit_code(),
            })
            .to_string(),
            OutputFormat::Quiet => error.to_string(),
        }
    }
}

// =============================================================================
// Specialized Formatters
// =============================================================================

/// Format a page report section by section
pub fn format_report(report: &PageReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("Current URL: {}\n", report.url));

    if let Some(path) = &report.screenshot {
        output.push_str(&format!("Page Screenshot: {}\n", path.display()));
    }

    for warning in &report.warnings {
        output.push_str(&format!("Warning: {}\n", warning));
    }

    if let Some(text) = &report.text {
        output.push_str("\n== Page Text ==\n");
        output.push_str(text);
        output.push('\n');
    }

    if let Some(tables) = report.tables.as_ref().filter(|t| !t.is_empty()) {
        output.push_str("\n== Tables Found ==\n");
        for (i, table) in tables.iter().enumerate() {
            output.push_str(&format!(
                "Table {} ({} columns, {} rows)\n",
                i + 1,
                table.headers.len(),
                table.rows.len()
            ));
            output.push_str(&format_table(table));
        }
    }

    if let Some(links) = &report.links {
        output.push_str("\n== Links Found ==\n");
        for (i, link) in links.iter().enumerate() {
            let label = if link.text.is_empty() {
                "(no text)"
            } else {
                link.text.as_str()
            };
            output.push_str(&format!("[{}] {} -> {}\n", i, label, link.href));
        }
    }

    if let Some(images) = &report.images {
        output.push_str("\n== Images Found ==\n");
        for src in images {
            output.push_str(&format!("{}\n", src));
        }
    }

    if let Some(custom) = &report.custom {
        output.push_str(&format!("\n== Custom Selector Results ({}) ==\n", custom.selector));
        match &custom.error {
            Some(error) => output.push_str(&format!("Error with custom selector: {}\n", error)),
            None => {
                for text in &custom.matches {
                    output.push_str(&format!("{}\n", text));
                }
            }
        }
    }

    output.push_str("\nExtraction Complete");
    output
}

/// Format the table header and the first rows, pipe separated
pub fn format_table(table: &Table) -> String {
    let mut output = String::new();
    output.push_str(&format!("  {}\n", join_cells(&table.headers)));

    for row in table.rows.iter().take(TABLE_PREVIEW_ROWS) {
        output.push_str(&format!("  {}\n", join_cells(row)));
    }

    if table.rows.len() > TABLE_PREVIEW_ROWS {
        output.push_str(&format!(
            "  ... {} more rows\n",
            table.rows.len() - TABLE_PREVIEW_ROWS
        ));
    }

    output
}

fn join_cells(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| {
            if cell.chars().count() > CELL_PREVIEW_CHARS {
                let cut: String = cell.chars().take(CELL_PREVIEW_CHARS).collect();
                format!("{}...", cut)
            } else {
                cell.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Format history with a marker on the current entry
pub fn format_history(view: &HistoryView) -> String {
    if view.entries.is_empty() {
        return format!("No history yet (showing {})", view.current_url);
    }

    let mut output = String::new();
    output.push_str("History:\n\n");

    for (i, url) in view.entries.iter().enumerate() {
        let marker = if i as isize == view.cursor { "* " } else { "  " };
        output.push_str(&format!("{}[{}] {}\n", marker, i, url));
    }

    output
}

/// Format the extraction toggles
pub fn format_options(options: &ExtractOptions) -> String {
    let flag = |on: bool| if on { "on" } else { "off" };
    format!(
        "text: {}\ntables: {}\nlinks: {}\nimages: {}\nscreenshot: {}\nselector: {}",
        flag(options.text),
        flag(options.tables),
        flag(options.links),
        flag(options.images),
        flag(options.screenshot),
        options.selector.as_deref().unwrap_or("(none)")
    )
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Print a success message to stdout
pub fn print_success(message: &str) {
    println!("{}", message);
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{}", message);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Link, SelectorResult};
    use std::path::PathBuf;

    fn sample_report() -> PageReport {
        PageReport {
            url: "https://a.test/".to_string(),
            fetched_at: "2026-01-01T00:00:00Z".to_string(),
            screenshot: Some(PathBuf::from("/tmp/shot.png")),
            text: Some("Hello".to_string()),
            tables: Some(vec![Table {
                headers: vec!["Name".to_string(), "Age".to_string()],
                rows: vec![vec!["Ann".to_string(), "31".to_string()]],
            }]),
            links: Some(vec![Link {
                href: "/next".to_string(),
                text: "Next".to_string(),
            }]),
            images: None,
            custom: Some(SelectorResult {
                selector: "p[".to_string(),
                matches: Vec::new(),
                error: Some("invalid selector 'p['".to_string()),
            }),
            warnings: vec!["Screenshot unavailable".to_string()],
        }
    }

    #[test]
    fn output_formatter_new_stores_format() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        assert!(matches!(formatter.format, OutputFormat::Json));
    }

    #[test]
    fn format_report_renders_every_section() {
        let output = format_report(&sample_report());
        assert!(output.contains("Current URL: https://a.test/"));
        assert!(output.contains("Page Screenshot: /tmp/shot.png"));
        assert!(output.contains("Warning: Screenshot unavailable"));
        assert!(output.contains("== Page Text ==\nHello"));
        assert!(output.contains("Table 1 (2 columns, 1 rows)"));
        assert!(output.contains("  Name | Age"));
        assert!(output.contains("[0] Next -> /next"));
        assert!(output.contains("Error with custom selector: invalid selector 'p['"));
        assert!(!output.contains("Images Found"));
        assert!(output.ends_with("Extraction Complete"));
    }

    #[test]
    fn format_table_truncates_long_tables_and_cells() {
        let table = Table {
            headers: vec!["h".to_string()],
            rows: (0..12).map(|i| vec![format!("{}{}", i, "x".repeat(50))]).collect(),
        };
        let output = format_table(&table);
        assert!(output.contains("... 2 more rows"));
        assert!(output.contains("..."));
        assert!(!output.contains(&"x".repeat(50)));
    }

    #[test]
    fn format_history_marks_cursor() {
        let view = HistoryView {
            entries: vec!["https://a.test".to_string(), "https://b.test".to_string()],
            cursor: 0,
            current_url: "https://a.test".to_string(),
        };
        let output = format_history(&view);
        assert!(output.contains("* [0] https://a.test"));
        assert!(output.contains("  [1] https://b.test"));
    }

    #[test]
    fn format_history_handles_empty() {
        let view = HistoryView {
            entries: Vec::new(),
            cursor: -1,
            current_url: "https://start.test".to_string(),
        };
        assert_eq!(format_history(&view), "No history yet (showing https://start.test)");
    }

    #[test]
    fn format_options_lists_toggles() {
        let output = format_options(&ExtractOptions::default());
        assert!(output.contains("text: on"));
        assert!(output.contains("images: off"));
        assert!(output.contains("selector: (none)"));
    }

    #[test]
    fn unchanged_prints_nothing_in_any_format() {
        for format in [OutputFormat::Human, OutputFormat::Json, OutputFormat::Quiet] {
            let formatter = OutputFormatter::new(format);
            assert_eq!(formatter.format_outcome(&Outcome::Unchanged).unwrap(), "");
        }
    }

    #[test]
    fn json_outcome_is_tagged() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        let output = formatter
            .format_outcome(&Outcome::Page(sample_report()))
            .unwrap();
        assert!(output.contains("\"kind\":\"page\""));
        assert!(output.contains("\"url\":\"https://a.test/\""));
    }

    #[test]
    fn quiet_outcome_is_empty() {
        let formatter = OutputFormatter::new(OutputFormat::Quiet);
        let output = formatter
            .format_outcome(&Outcome::Page(sample_report()))
            .unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn format_error_per_format() {
        let err = CliError::PageLoad("https://down.test: timeout".to_string());
        assert_eq!(
            OutputFormatter::new(OutputFormat::Human).format_error(&err),
            "Error: page load failed: https://down.test: timeout"
        );
        assert_eq!(
            OutputFormatter::new(OutputFormat::Quiet).format_error(&err),
            "page load failed: https://down.test: timeout"
        );
        let json = OutputFormatter::new(OutputFormat::Json).format_error(&err);
        assert!(json.contains("\"exit_code\":1"));
    }

    #[test]
    fn saved_outcome_lists_files() {
        let formatter = OutputFormatter::new(OutputFormat::Human);
        let output = formatter
            .format_outcome(&Outcome::Saved {
                files: vec![PathBuf::from("out/table_1.csv")],
            })
            .unwrap();
        assert_eq!(output, "Saved out/table_1.csv");
    }
}
