//! One page-load cycle: open, screenshot, read HTML, extract, tear down.
//!
//! Only failing to open the page or read its HTML aborts the cycle. Every
//! other failure stays local to its category and ends up as a warning or
//! an inline selector error in the report.

use std::path::PathBuf;

use log::{info, warn};
use scraper::Html;
use uuid::Uuid;

use crate::browser::{PageDriver, PageSession};
use crate::commands::utils::current_timestamp;
use crate::error::Result;
use crate::extract::{self, SelectorKind};
use crate::types::{ExtractOptions, PageReport, SelectorResult};

/// Load `url` through `driver` and extract what `options` asks for.
pub fn load_page(
    driver: &dyn PageDriver,
    url: &str,
    options: &ExtractOptions,
    text_preview_chars: usize,
) -> Result<PageReport> {
    let session = driver.open(url)?;
    let mut report = PageReport {
        url: url.to_string(),
        fetched_at: current_timestamp(),
        ..Default::default()
    };

    if options.screenshot {
        let path = screenshot_path();
        match session.capture_screenshot(&path) {
            Ok(()) => report.screenshot = Some(path),
            Err(e) => report.warnings.push(format!("Screenshot unavailable: {}", e)),
        }
    }

    let html = session.content()?;
    let document = Html::parse_document(&html);

    if options.text {
        let text = extract::extract_text(&document);
        report.text = Some(extract::truncate_preview(&text, text_preview_chars));
    }

    if options.tables {
        match extract::extract_tables(&document) {
            Ok(tables) => report.tables = Some(tables),
            Err(e) => {
                report.tables = Some(Vec::new());
                report.warnings.push(e.to_string());
            }
        }
    }

    if options.links {
        report.links = Some(extract::extract_links(&document));
    }

    if options.images {
        report.images = Some(extract::extract_images(&document));
    }

    if let Some(raw) = options.selector.as_deref()
        && let Some(kind) = SelectorKind::parse(raw)
    {
        report.custom = Some(run_selector(session.as_ref(), raw, &kind));
    }

    for warning in &report.warnings {
        warn!("{}: {}", url, warning);
    }
    info!("extraction complete for {url}");

    // `session` drops here, releasing the browser
    Ok(report)
}

fn run_selector(session: &dyn PageSession, raw: &str, kind: &SelectorKind) -> SelectorResult {
    match session.query_text(kind) {
        Ok(matches) => SelectorResult {
            selector: raw.to_string(),
            matches,
            error: None,
        },
        Err(e) => SelectorResult {
            selector: raw.to_string(),
            matches: Vec::new(),
            error: Some(e.to_string()),
        },
    }
}

fn screenshot_path() -> PathBuf {
    std::env::temp_dir().join(format!("minibrowser-{}.png", Uuid::new_v4()))
}
