//! CSV downloads for extracted content
//!
//! Mirrors the download buttons of the dashboard: one file per table, one
//! for image URLs and one for custom selector matches.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{CliError, Result};
use crate::types::{PageReport, Table};

pub const IMAGES_HEADER: &str = "Image URLs";
pub const CUSTOM_HEADER: &str = "Custom Extract";

/// A CSV file offered for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Header row followed by the table rows
pub fn table_to_csv(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    finish(writer)
}

/// Single-column CSV with `header` on top
pub fn column_to_csv(header: &str, values: &[String]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([header])?;
    for value in values {
        writer.write_record([value])?;
    }
    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| CliError::IoError(e.into_error()))
}

/// Every download the report offers
pub fn downloads(report: &PageReport) -> Result<Vec<Download>> {
    let mut files = Vec::new();

    for (i, table) in report.tables.iter().flatten().enumerate() {
        files.push(Download {
            file_name: format!("table_{}.csv", i + 1),
            bytes: table_to_csv(table)?,
        });
    }

    if let Some(images) = report.images.as_ref().filter(|v| !v.is_empty()) {
        files.push(Download {
            file_name: "images.csv".to_string(),
            bytes: column_to_csv(IMAGES_HEADER, images)?,
        });
    }

    if let Some(custom) = report.custom.as_ref().filter(|c| !c.matches.is_empty()) {
        files.push(Download {
            file_name: "custom.csv".to_string(),
            bytes: column_to_csv(CUSTOM_HEADER, &custom.matches)?,
        });
    }

    Ok(files)
}

/// Write downloads into `dir`, creating it if needed
pub fn save_downloads(dir: &Path, files: &[Download]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.file_name);
        fs::write(&path, &file.bytes)?;
        info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SelectorResult;

    fn sample_table() -> Table {
        Table {
            headers: vec!["Company".to_string(), "Contact".to_string()],
            rows: vec![
                vec!["Alfreds".to_string(), "Maria, Anders".to_string()],
                vec!["Centro".to_string(), "Francisco".to_string()],
            ],
        }
    }

    #[test]
    fn table_to_csv_writes_header_and_quotes_commas() {
        let bytes = table_to_csv(&sample_table()).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Company,Contact\nAlfreds,\"Maria, Anders\"\nCentro,Francisco\n"
        );
    }

    #[test]
    fn column_to_csv_writes_single_column() {
        let bytes = column_to_csv(IMAGES_HEADER, &["/a.png".to_string()]).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "Image URLs\n/a.png\n");
    }

    #[test]
    fn downloads_names_files_like_the_dashboard() {
        let report = PageReport {
            tables: Some(vec![sample_table(), sample_table()]),
            images: Some(vec!["/a.png".to_string()]),
            custom: Some(SelectorResult {
                selector: "h1".to_string(),
                matches: vec!["Title".to_string()],
                error: None,
            }),
            ..Default::default()
        };

        let names: Vec<String> = downloads(&report)
            .unwrap()
            .into_iter()
            .map(|d| d.file_name)
            .collect();
        assert_eq!(
            names,
            vec!["table_1.csv", "table_2.csv", "images.csv", "custom.csv"]
        );
    }

    #[test]
    fn downloads_skip_empty_lists() {
        let report = PageReport {
            images: Some(Vec::new()),
            custom: Some(SelectorResult {
                selector: "h1".to_string(),
                matches: Vec::new(),
                error: Some("invalid selector".to_string()),
            }),
            ..Default::default()
        };
        assert!(downloads(&report).unwrap().is_empty());
    }

    #[test]
    fn save_downloads_writes_files() {
        let dir = std::env::temp_dir().join(format!("minibrowser-test-{}", uuid::Uuid::new_v4()));
        let files = vec![Download {
            file_name: "images.csv".to_string(),
            bytes: b"Image URLs\n/a.png\n".to_vec(),
        }];

        let written = save_downloads(&dir, &files).unwrap();
        assert_eq!(written, vec![dir.join("images.csv")]);
        assert_eq!(fs::read(&written[0]).unwrap(), b"Image URLs\n/a.png\n");

        fs::remove_dir_all(&dir).unwrap();
    }
}
