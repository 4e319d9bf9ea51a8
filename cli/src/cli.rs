//! CLI argument parsing using clap
//!
//! Defines all commands and their arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::browser::Engine;
use crate::output::OutputFormat;
use crate::types::ExtractOptions;

/// Mini Browser - headless page loading and content extraction
#[derive(Debug, Parser)]
#[command(name = "minibrowser")]
#[command(
    author,
    version,
    about = "Mini Browser - headless page loading and content extraction",
    long_about = None,
    help_template = "{about}\n\nUsage: {usage}\n\nOptions:\n{options}\n\n{after-help}",
    after_help = "COMMANDS:\n  extract <URL>             Load one page and print what was extracted\n  shell [URL]               Interactive session with history (go/back/forward/follow)\n  version                   Show version information\n\nQUICK START:\n  minibrowser extract example.com\n  minibrowser extract --images --selector \"//td\" example.com\n  minibrowser extract --save out/ https://www.w3schools.com/html/html_tables.asp\n  minibrowser shell\n\nOUTPUT FORMATS:\n  - human (default)  Plain text output for humans\n  - json             JSON output for scripting\n  - quiet            No output except for errors\n\nENGINES:\n  - chrome (default) Headless Chrome/Chromium, JavaScript and screenshots\n  - static           Plain HTTP fetch, no JavaScript, no screenshots\n\nENVIRONMENT VARIABLES:\n  MINIBROWSER_START_URL     Page loaded by the shell before any navigation\n  MINIBROWSER_SETTLE_MS     Wait after navigation before reading the page\n  MINIBROWSER_TIMEOUT_MS    Navigation timeout\n  MINIBROWSER_CHROME        Chrome/Chromium executable\n  MINIBROWSER_HEADLESS      Set to false to show the browser window\n  MINIBROWSER_DOWNLOAD_DIR  Default directory for CSV downloads\n  MINIBROWSER_TEXT_PREVIEW  Characters of page text to show\n  RUST_LOG                  Log filter (default: warn)\n\nHELP:\n  minibrowser --help\n  minibrowser extract --help\n  minibrowser shell --help"
)]
pub struct Cli {
    /// Output format: human (plain text), json, quiet (errors only)
    #[arg(short, long, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Page loading engine: chrome (headless browser) or static (HTTP only)
    #[arg(short, long, global = true, default_value = "chrome")]
    pub engine: Engine,

    /// Milliseconds to wait after navigation (overrides MINIBROWSER_SETTLE_MS)
    #[arg(long, global = true)]
    pub settle_ms: Option<u64>,

    /// Start page for the shell (overrides MINIBROWSER_START_URL)
    #[arg(long, global = true)]
    pub start_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load one page and print the extracted content
    #[command(
        about = "Load one page and print the extracted content",
        long_about = "Load one page, take a screenshot and extract text, tables, links and optionally images and custom selector matches.\n\nUSAGE:\n  minibrowser extract [OPTIONS] <URL>\n\nARGUMENTS:\n  <URL>  URL to load; https:// is added when no scheme is given\n\nEXAMPLES:\n  minibrowser extract example.com\n  minibrowser extract --no-text --no-links example.com\n  minibrowser extract --selector \"h2.title\" example.com\n  minibrowser extract --save out/ -o json example.com"
    )]
    Extract(ExtractArgs),

    /// Interactive session with history
    #[command(
        about = "Start an interactive session",
        long_about = "Start an interactive session. Reads one command per line; history and settings persist until you quit.\n\nUSAGE:\n  minibrowser shell [OPTIONS] [URL]\n\nARGUMENTS:\n  [URL]  First page to open; defaults to the start page\n\nSHELL COMMANDS:\n  go <URL>, back, forward, reload, follow <N>, history,\n  set <CATEGORY> on|off, selector [SELECTOR], options, save [DIR], help, quit\n\nEXAMPLES:\n  minibrowser shell\n  minibrowser shell example.com\n  minibrowser shell --engine static --images"
    )]
    Shell(ShellArgs),

    /// Show version information
    #[command(
        about = "Show version information",
        long_about = "Show version information.\n\nUSAGE:\n  minibrowser version"
    )]
    Version,
}

/// Initial extraction toggles, shared by extract and shell
#[derive(Debug, Clone, Default, Args)]
pub struct ExtractToggles {
    /// Skip page text
    #[arg(long)]
    pub no_text: bool,

    /// Skip tables
    #[arg(long)]
    pub no_tables: bool,

    /// Skip links
    #[arg(long)]
    pub no_links: bool,

    /// Extract image sources
    #[arg(long)]
    pub images: bool,

    /// Skip the screenshot
    #[arg(long)]
    pub no_screenshot: bool,

    /// CSS or XPath selector to query (XPath starts with // or ..)
    #[arg(short, long)]
    pub selector: Option<String>,
}

impl ExtractToggles {
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions {
            text: !self.no_text,
            tables: !self.no_tables,
            links: !self.no_links,
            images: self.images,
            screenshot: !self.no_screenshot,
            selector: self
                .selector
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// URL to load
    pub url: String,

    #[command(flatten)]
    pub toggles: ExtractToggles,

    /// Write CSV downloads into this directory
    #[arg(long)]
    pub save: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ShellArgs {
    /// First page to open (optional)
    pub url: Option<String>,

    #[command(flatten)]
    pub toggles: ExtractToggles,
}

// =============================================================================
// Parse Function
// =============================================================================

/// Parse command line arguments
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parse command line arguments from iterator (for testing)
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

// =============================================================================
// Tests
// =============================================================================
