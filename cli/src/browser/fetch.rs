//! Static page driver
//!
//! Fetches pages with a plain HTTP GET. No JavaScript runs, so there is no
//! settle delay, and screenshots are unavailable.

use std::path::Path;
use std::time::Duration;

use log::info;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::redirect::Policy;
use scraper::Html;

use crate::browser::{PageDriver, PageSession};
use crate::config::Config;
use crate::error::{CliError, ExtractError, Result};
use crate::extract::{SelectorKind, query_static};

const DEFAULT_USER_AGENT: &str = concat!("minibrowser/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// HTTP Client
// =============================================================================

pub struct HttpClientConfig {
    pub headers: HeaderMap,
    pub timeout: Duration,
    pub redirect_policy: Policy,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        Self {
            headers,
            timeout: Duration::from_secs(30),
            redirect_policy: Policy::limited(10),
        }
    }
}

impl HttpClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub fn create_http_client(config: HttpClientConfig) -> Result<Client> {
    Client::builder()
        .default_headers(config.headers)
        .timeout(config.timeout)
        .redirect(config.redirect_policy)
        .build()
        .map_err(|e| CliError::BrowserLaunch(format!("failed to create HTTP client: {}", e)))
}

// =============================================================================
// Driver
// =============================================================================

pub struct StaticDriver {
    client: Client,
}

impl StaticDriver {
    pub fn new(config: &Config) -> Result<Self> {
        let client =
            create_http_client(HttpClientConfig::default().with_timeout(config.load_timeout()))?;
        Ok(Self { client })
    }
}

impl PageDriver for StaticDriver {
    fn open(&self, url: &str) -> Result<Box<dyn PageSession>> {
        info!("fetching {url}");
        let html = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| CliError::PageLoad(format!("{}: {}", url, e)))?;

        Ok(Box::new(StaticPage::new(url, html)))
    }
}

// =============================================================================
// Page Session
// =============================================================================

pub struct StaticPage {
    url: String,
    html: String,
}

impl StaticPage {
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
        }
    }
}

impl PageSession for StaticPage {
    fn url(&self) -> &str {
        &self.url
    }

    fn capture_screenshot(&self, _path: &Path) -> Result<()> {
        Err(CliError::Unsupported(
            "screenshots require the chrome engine".to_string(),
        ))
    }

    fn content(&self) -> Result<String> {
        Ok(self.html.clone())
    }

    fn query_text(&self, selector: &SelectorKind) -> std::result::Result<Vec<String>, ExtractError> {
        query_static(&Html::parse_document(&self.html), selector)
    }
}

// =============================================================================
// Tests
// =============================================================================
