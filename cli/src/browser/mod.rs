//! Browser automation seam
//!
//! A [`PageDriver`] opens one [`PageSession`] per page-load cycle. The
//! session owns whatever browser resources it needs and releases them when
//! dropped, so teardown happens on every exit path of a cycle.

pub mod chrome;
pub mod fetch;

#[cfg(test)]
pub(crate) mod fake;

use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::config::Config;
use crate::error::{ExtractError, Result};
use crate::extract::SelectorKind;

pub use chrome::ChromeDriver;
pub use fetch::StaticDriver;

/// A loaded page, alive until dropped
pub trait PageSession {
    /// URL the session was opened with
    fn url(&self) -> &str;

    /// Write a full-page PNG screenshot to `path`
    fn capture_screenshot(&self, path: &Path) -> Result<()>;

    /// Rendered HTML of the page
    fn content(&self) -> Result<String>;

    /// Trimmed, non-empty text of every element matching `selector`
    fn query_text(&self, selector: &SelectorKind) -> std::result::Result<Vec<String>, ExtractError>;
}

/// Opens pages: navigate, then wait for the page to settle
pub trait PageDriver {
    fn open(&self, url: &str) -> Result<Box<dyn PageSession>>;
}

/// Available page loading engines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Engine {
    /// Headless Chrome/Chromium with JavaScript
    #[default]
    Chrome,
    /// Plain HTTP fetch, no JavaScript or screenshots
    Static,
}

/// Build the driver for `engine`
pub fn driver_for(engine: Engine, config: &Config) -> Result<Box<dyn PageDriver>> {
    Ok(match engine {
        Engine::Chrome => Box::new(ChromeDriver::new(config)),
        Engine::Static => Box::new(StaticDriver::new(config)?),
    })
}
