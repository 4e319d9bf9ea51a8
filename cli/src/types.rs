//! Type definitions shared by the extraction pipeline, commands and output
//!
//! Everything here serializes to JSON for `--output json`.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CliError;

// =============================================================================
// Extraction Options
// =============================================================================

/// Which content categories a page-load cycle extracts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    pub text: bool,
    pub tables: bool,
    pub links: bool,
    pub images: bool,
    pub screenshot: bool,
    /// CSS or XPath selector queried against the live page
    pub selector: Option<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            text: true,
            tables: true,
            links: true,
            images: false,
            screenshot: true,
            selector: None,
        }
    }
}

/// Toggleable extraction categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractCategory {
    Text,
    Tables,
    Links,
    Images,
    Screenshot,
}

impl FromStr for ExtractCategory {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "tables" | "table" => Ok(Self::Tables),
            "links" | "link" => Ok(Self::Links),
            "images" | "image" => Ok(Self::Images),
            "screenshot" => Ok(Self::Screenshot),
            other => Err(CliError::InvalidArguments(format!(
                "unknown category '{}'. Valid: text, tables, links, images, screenshot",
                other
            ))),
        }
    }
}

impl ExtractOptions {
    pub fn set(&mut self, category: ExtractCategory, enabled: bool) {
        match category {
            ExtractCategory::Text => self.text = enabled,
            ExtractCategory::Tables => self.tables = enabled,
            ExtractCategory::Links => self.links = enabled,
            ExtractCategory::Images => self.images = enabled,
            ExtractCategory::Screenshot => self.screenshot = enabled,
        }
    }
}

// =============================================================================
// Extracted Content
// =============================================================================

/// Anchor element with a non-empty href
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub text: String,
}

/// Rectangular table; every row has `headers.len()` cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Outcome of the custom selector query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorResult {
    pub selector: String,
    pub matches: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Everything one page-load cycle produced.
///
/// Categories that were switched off are `None`; an enabled category that
/// found nothing is an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageReport {
    pub url: String,
    pub fetched_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables: Option<Vec<Table>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<SelectorResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

// =============================================================================
// Command Outcomes
// =============================================================================

/// Snapshot of the session history for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryView {
    pub entries: Vec<String>,
    /// -1 before the first navigation
    pub cursor: isize,
    pub current_url: String,
}

/// Result of executing one command
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// A page was loaded and extracted
    Page(PageReport),
    History(HistoryView),
    Options(ExtractOptions),
    /// CSV downloads written to disk
    Saved { files: Vec<PathBuf> },
    /// Boundary back/forward; nothing to show
    Unchanged,
    Message { text: String },
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_dashboard_defaults() {
        let options = ExtractOptions::default();
        assert!(options.text && options.tables && options.links && options.screenshot);
        assert!(!options.images);
        assert!(options.selector.is_none());
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Tables".parse::<ExtractCategory>().unwrap(), ExtractCategory::Tables);
        assert_eq!(" image ".parse::<ExtractCategory>().unwrap(), ExtractCategory::Images);
        assert!(matches!(
            "cookies".parse::<ExtractCategory>(),
            Err(CliError::InvalidArguments(_))
        ));
    }

    #[test]
    fn set_toggles_only_named_category() {
        let mut options = ExtractOptions::default();
        options.set(ExtractCategory::Links, false);
        assert!(!options.links);
        assert!(options.text);
    }

    #[test]
    fn outcome_serializes_with_kind_tag() {
        let json = serde_json::to_value(Outcome::Unchanged).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "unchanged" }));

        let json = serde_json::to_value(Outcome::Message { text: "hi".to_string() }).unwrap();
        assert_eq!(json["kind"], "message");
        assert_eq!(json["text"], "hi");
    }

    #[test]
    fn page_report_omits_disabled_categories() {
        let report = PageReport {
            url: "https://a.test".to_string(),
            text: Some("t".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("tables").is_none());
        assert!(json.get("warnings").is_none());
        assert_eq!(json["text"], "t");
    }
}
