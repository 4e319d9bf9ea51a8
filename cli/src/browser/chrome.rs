//! Headless Chrome driver
//!
//! Launches a fresh browser process for every page load. Dropping the
//! returned [`ChromePage`] closes the tab and kills the process.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use headless_chrome::browser::tab::NoElementFound;
use headless_chrome::protocol::cdp::Page::{
    CaptureScreenshot, CaptureScreenshotFormatOption, Viewport,
};
use headless_chrome::{Browser, LaunchOptions, Tab};
use log::{debug, info, warn};

use crate::browser::{PageDriver, PageSession};
use crate::config::Config;
use crate::error::{CliError, ExtractError, Result};
use crate::extract::SelectorKind;

const PAGE_SIZE_SCRIPT: &str = "JSON.stringify([\
    Math.max(document.documentElement.scrollWidth, document.body ? document.body.scrollWidth : 0),\
    Math.max(document.documentElement.scrollHeight, document.body ? document.body.scrollHeight : 0)\
])";

// =============================================================================
// Driver
// =============================================================================

pub struct ChromeDriver {
    chrome_path: Option<PathBuf>,
    headless: bool,
    window_size: (u32, u32),
    settle: Duration,
    load_timeout: Duration,
}

impl ChromeDriver {
    pub fn new(config: &Config) -> Self {
        Self {
            chrome_path: config.chrome_path.clone(),
            headless: config.headless,
            window_size: config.window_size,
            settle: config.settle_delay(),
            load_timeout: config.load_timeout(),
        }
    }

    fn launch(&self) -> Result<Browser> {
        let options = LaunchOptions::default_builder()
            .headless(self.headless)
            .path(self.chrome_path.clone())
            .window_size(Some(self.window_size))
            .args(vec![OsStr::new("--disable-dev-shm-usage")])
            .build()
            .map_err(|e| CliError::BrowserLaunch(format!("invalid launch options: {}", e)))?;

        Browser::new(options).map_err(launch_error("failed to start chrome"))
    }
}

impl PageDriver for ChromeDriver {
    fn open(&self, url: &str) -> Result<Box<dyn PageSession>> {
        info!("loading {url} in chrome");
        let browser = self.launch()?;

        let tab = browser
            .new_tab()
            .map_err(launch_error("failed to open tab"))?;
        tab.set_default_timeout(self.load_timeout);

        // any early return from here on drops `page`, tearing the browser down
        let page = ChromePage {
            url: url.to_string(),
            tab,
            _browser: browser,
        };

        page.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(load_error(url))?;

        debug!("settling for {:?}", self.settle);
        thread::sleep(self.settle);

        Ok(Box::new(page))
    }
}

// =============================================================================
// Page Session
// =============================================================================

pub struct ChromePage {
    url: String,
    tab: Arc<Tab>,
    _browser: Browser,
}

impl ChromePage {
    /// Full document size, or `None` if the page would not tell us
    fn document_size(&self) -> Option<(f64, f64)> {
        let result = self.tab.evaluate(PAGE_SIZE_SCRIPT, false).ok()?;
        let raw = result.value?;
        let [width, height]: [f64; 2] = serde_json::from_str(raw.as_str()?).ok()?;
        (width > 0.0 && height > 0.0).then_some((width, height))
    }
}

impl PageSession for ChromePage {
    fn url(&self) -> &str {
        &self.url
    }

    fn capture_screenshot(&self, path: &Path) -> Result<()> {
        let clip = self.document_size().map(|(width, height)| Viewport {
            x: 0.0,
            y: 0.0,
            width,
            height,
            scale: 1.0,
        });
        if clip.is_none() {
            warn!("could not measure {}, capturing the viewport only", self.url);
        }

        let data = self
            .tab
            .call_method(screenshot_request(clip))
            .map_err(load_error("screenshot failed"))?
            .data;
        let png = STANDARD
            .decode(data)
            .map_err(|e| CliError::PageLoad(format!("screenshot failed: {}", e)))?;

        std::fs::write(path, png)?;
        Ok(())
    }

    fn content(&self) -> Result<String> {
        self.tab
            .get_content()
            .map_err(load_error("failed to read page content"))
    }

    fn query_text(&self, selector: &SelectorKind) -> std::result::Result<Vec<String>, ExtractError> {
        debug!("querying {:?} on {}", selector.expression(), self.url);
        let elements = match selector {
            SelectorKind::Css(css) => self.tab.find_elements(css),
            SelectorKind::XPath(xpath) => self.tab.find_elements_by_xpath(xpath),
        };

        let elements = match elements {
            Ok(elements) => elements,
            Err(e) if is_no_match(&e) => return Ok(Vec::new()),
            Err(e) => return Err(ExtractError::Query(e.to_string())),
        };

        let mut texts = Vec::with_capacity(elements.len());
        for element in elements {
            let text = element
                .get_inner_text()
                .map_err(|e| ExtractError::Query(e.to_string()))?;
            let text = text.trim();
            if !text.is_empty() {
                texts.push(text.to_string());
            }
        }
        Ok(texts)
    }
}

impl Drop for ChromePage {
    fn drop(&mut self) {
        debug!("closing browser session for {}", self.url);
        if let Err(e) = self.tab.close(false) {
            debug!("tab close failed (browser is shut down anyway): {}", e);
        }
    }
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Full-page PNG capture.
///
/// Tab::capture_screenshot leaves capture_beyond_viewport unset, which blanks
/// everything below the window when clipping to the document.
fn screenshot_request(clip: Option<Viewport>) -> CaptureScreenshot {
    CaptureScreenshot {
        format: Some(CaptureScreenshotFormatOption::Png),
        quality: None,
        clip,
        from_surface: Some(true),
        capture_beyond_viewport: Some(true),
        optimize_for_speed: None,
    }
}

/// headless_chrome reports an empty match set as [`NoElementFound`]
fn is_no_match(error: &anyhow::Error) -> bool {
    error.is::<NoElementFound>()
}

fn launch_error(context: &str) -> impl FnOnce(anyhow::Error) -> CliError + '_ {
    move |e| CliError::BrowserLaunch(format!("{context}: {e:#}"))
}

fn load_error(context: &str) -> impl FnOnce(anyhow::Error) -> CliError + '_ {
    move |e| CliError::PageLoad(format!("{context}: {e:#}"))
}

// =============================================================================
// Tests
// =============================================================================
