//! Custom selector handling
//!
//! Selectors are CSS unless they look like XPath: an explicit `xpath=`
//! prefix, or a leading `//` or `..`. A `css=` prefix forces CSS.

use scraper::{Html, Selector};

use crate::error::ExtractError;
use crate::extract::html::collapse_whitespace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorKind {
    Css(String),
    XPath(String),
}

impl SelectorKind {
    /// Classify a user-supplied selector. Blank input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Some(rest) = trimmed.strip_prefix("xpath=") {
            return Some(Self::XPath(rest.trim().to_string()));
        }
        if let Some(rest) = trimmed.strip_prefix("css=") {
            return Some(Self::Css(rest.trim().to_string()));
        }
        if trimmed.starts_with("//") || trimmed.starts_with("..") {
            return Some(Self::XPath(trimmed.to_string()));
        }
        Some(Self::Css(trimmed.to_string()))
    }

    pub fn expression(&self) -> &str {
        match self {
            Self::Css(s) | Self::XPath(s) => s,
        }
    }
}

/// Run a CSS selector over already-fetched HTML.
///
/// Returns the trimmed text of each match, dropping empty ones. XPath is
/// rejected since there is no live DOM to evaluate it against.
pub fn query_static(document: &Html, selector: &SelectorKind) -> Result<Vec<String>, ExtractError> {
    let css = match selector {
        SelectorKind::Css(css) => css,
        SelectorKind::XPath(_) => return Err(ExtractError::UnsupportedSelector("XPath".to_string())),
    };

    let parsed = Selector::parse(css).map_err(|_| ExtractError::InvalidSelector(css.clone()))?;

    Ok(document
        .select(&parsed)
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect())
}
