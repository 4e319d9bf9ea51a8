//! Configuration for the minibrowser CLI
//!
//! Handles configuration loading from environment variables and defaults.

use std::path::PathBuf;
use std::time::Duration;

use log::warn;

// =============================================================================
// Constants
// =============================================================================

/// Page shown when a session has not navigated anywhere yet
pub const DEFAULT_START_URL: &str = "https://www.w3schools.com/html/html_tables.asp";

/// Wait after navigation so client-side scripts can run
pub const DEFAULT_SETTLE_MS: u64 = 2000;

/// Navigation timeout handed to the browser
pub const DEFAULT_LOAD_TIMEOUT_MS: u64 = 30000;

/// Number of characters of page text shown in a report
pub const DEFAULT_TEXT_PREVIEW_CHARS: usize = 5000;

/// Browser window size used for rendering and screenshots
pub const DEFAULT_WINDOW_SIZE: (u32, u32) = (1280, 800);

/// Environment variable for the start URL
pub const ENV_START_URL: &str = "MINIBROWSER_START_URL";

/// Environment variable for the settle delay in milliseconds
pub const ENV_SETTLE_MS: &str = "MINIBROWSER_SETTLE_MS";

/// Environment variable for the navigation timeout in milliseconds
pub const ENV_LOAD_TIMEOUT_MS: &str = "MINIBROWSER_TIMEOUT_MS";

/// Environment variable pointing at a Chrome/Chromium executable
pub const ENV_CHROME_PATH: &str = "MINIBROWSER_CHROME";

/// Environment variable toggling headless mode
pub const ENV_HEADLESS: &str = "MINIBROWSER_HEADLESS";

/// Environment variable for the CSV download directory
pub const ENV_DOWNLOAD_DIR: &str = "MINIBROWSER_DOWNLOAD_DIR";

/// Environment variable for the text preview length
pub const ENV_TEXT_PREVIEW: &str = "MINIBROWSER_TEXT_PREVIEW";

// =============================================================================
// Config Struct
// =============================================================================

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL shown before anything has been navigated to
    pub start_url: String,

    /// Post-load settle delay in milliseconds
    pub settle_ms: u64,

    /// Navigation timeout in milliseconds
    pub load_timeout_ms: u64,

    /// Explicit browser executable; auto-detected when unset
    pub chrome_path: Option<PathBuf>,

    /// Run the browser without a window
    pub headless: bool,

    /// Where `save` writes CSV downloads by default
    pub download_dir: PathBuf,

    pub text_preview_chars: usize,

    pub window_size: (u32, u32),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_url: DEFAULT_START_URL.to_string(),
            settle_ms: DEFAULT_SETTLE_MS,
            load_timeout_ms: DEFAULT_LOAD_TIMEOUT_MS,
            chrome_path: None,
            headless: true,
            download_dir: PathBuf::from("."),
            text_preview_chars: DEFAULT_TEXT_PREVIEW_CHARS,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_START_URL).filter(|v| !v.trim().is_empty()) {
            config.start_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_SETTLE_MS) {
            config.settle_ms = parse_or(ENV_SETTLE_MS, &raw, config.settle_ms);
        }

        if let Some(raw) = lookup(ENV_LOAD_TIMEOUT_MS) {
            config.load_timeout_ms = parse_or(ENV_LOAD_TIMEOUT_MS, &raw, config.load_timeout_ms);
        }

        if let Some(raw) = lookup(ENV_TEXT_PREVIEW) {
            config.text_preview_chars =
                parse_or(ENV_TEXT_PREVIEW, &raw, config.text_preview_chars);
        }

        if let Some(path) = lookup(ENV_CHROME_PATH).filter(|v| !v.is_empty()) {
            config.chrome_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup(ENV_HEADLESS) {
            config.headless = parse_flag(&raw);
        }

        if let Some(dir) = lookup(ENV_DOWNLOAD_DIR).filter(|v| !v.is_empty()) {
            config.download_dir = PathBuf::from(dir);
        }

        config
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.load_timeout_ms)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Load the global CLI configuration
pub fn load_config() -> Config {
    Config::from_env()
}

fn parse_or<T>(key: &str, raw: &str, fallback: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!("ignoring {key}={raw:?}: not a number, using {fallback}");
            fallback
        }
    }
}

/// Anything but an explicit "off" value enables the flag
fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

// =============================================================================
// Tests
// =============================================================================
