//! In-memory driver for tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use scraper::Html;

use crate::browser::{PageDriver, PageSession};
use crate::error::{CliError, ExtractError, Result};
use crate::extract::{SelectorKind, query_static};

/// Serves canned HTML per URL and records every open/close.
///
/// A page registered with `None` opens fine but fails to hand over its HTML.
#[derive(Default, Clone)]
pub struct FakeDriver {
    pages: HashMap<String, Option<String>>,
    pub opened: Rc<RefCell<Vec<String>>>,
    pub closed: Rc<RefCell<usize>>,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), Some(html.to_string()));
        self
    }

    pub fn with_broken_page(mut self, url: &str) -> Self {
        self.pages.insert(url.to_string(), None);
        self
    }
}

impl PageDriver for FakeDriver {
    fn open(&self, url: &str) -> Result<Box<dyn PageSession>> {
        self.opened.borrow_mut().push(url.to_string());
        let html = self
            .pages
            .get(url)
            .cloned()
            .ok_or_else(|| CliError::PageLoad(format!("{url}: net::ERR_NAME_NOT_RESOLVED")))?;

        Ok(Box::new(FakePage {
            url: url.to_string(),
            html,
            closed: Rc::clone(&self.closed),
        }))
    }
}

struct FakePage {
    url: String,
    html: Option<String>,
    closed: Rc<RefCell<usize>>,
}

impl PageSession for FakePage {
    fn url(&self) -> &str {
        &self.url
    }

    fn capture_screenshot(&self, path: &Path) -> Result<()> {
        std::fs::write(path, b"\x89PNG fake")?;
        Ok(())
    }

    fn content(&self) -> Result<String> {
        self.html
            .clone()
            .ok_or_else(|| CliError::PageLoad(format!("{}: target closed", self.url)))
    }

    fn query_text(&self, selector: &SelectorKind) -> std::result::Result<Vec<String>, ExtractError> {
        let html = self.html.as_deref().unwrap_or_default();
        query_static(&Html::parse_document(html), selector)
    }
}

impl Drop for FakePage {
    fn drop(&mut self) {
        *self.closed.borrow_mut() += 1;
    }
}
