//! Interactive browsing session state
//!
//! One [`Session`] per user session. It owns the navigation history, the
//! extraction toggles and the last page report; nothing outlives it.

use crate::config::Config;
use crate::history::NavigationHistory;
use crate::types::{ExtractOptions, HistoryView, Link, PageReport};

#[derive(Debug, Clone)]
pub struct Session {
    history: NavigationHistory,
    /// Shown while the history is still empty
    start_url: String,
    pub options: ExtractOptions,
    last_report: Option<PageReport>,
}

impl Session {
    pub fn new(start_url: impl Into<String>, options: ExtractOptions) -> Self {
        Self {
            history: NavigationHistory::new(),
            start_url: start_url.into(),
            options,
            last_report: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.start_url.clone(), ExtractOptions::default())
    }

    /// URL at the history cursor, or the start URL before any navigation
    pub fn current_url(&self) -> &str {
        self.history.current_or(&self.start_url)
    }

    pub fn navigate(&mut self, url: impl Into<String>) {
        self.history.navigate(url);
    }

    pub fn go_back(&mut self) -> Option<String> {
        self.history.go_back().map(str::to_string)
    }

    pub fn go_forward(&mut self) -> Option<String> {
        self.history.go_forward().map(str::to_string)
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn history_view(&self) -> HistoryView {
        HistoryView {
            entries: self.history.entries().to_vec(),
            cursor: self.history.position(),
            current_url: self.current_url().to_string(),
        }
    }

    pub fn last_report(&self) -> Option<&PageReport> {
        self.last_report.as_ref()
    }

    pub fn set_last_report(&mut self, report: PageReport) {
        self.last_report = Some(report);
    }

    /// Link `index` of the last loaded page
    pub fn link(&self, index: usize) -> Option<&Link> {
        self.last_report
            .as_ref()
            .and_then(|r| r.links.as_ref())
            .and_then(|links| links.get(index))
    }
}

// =============================================================================
// Tests
// =============================================================================
