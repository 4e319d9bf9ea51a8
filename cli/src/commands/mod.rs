//! Command implementations for the minibrowser CLI
//!
//! Each command:
//! - Validates its arguments
//! - Updates the session (history, options)
//! - Runs a page-load cycle when the current URL changed

pub mod follow;
pub mod history;
pub mod navigate;
pub mod reload;
pub mod save;
pub mod settings;
pub mod utils;

pub use follow::FollowCommand;
pub use history::back::BackCommand;
pub use history::forward::ForwardCommand;
pub use history::list::HistoryListCommand;
pub use navigate::NavigateCommand;
pub use reload::ReloadCommand;
pub use save::SaveCommand;
pub use settings::{SelectorCommand, SetOptionCommand};

use crate::browser::PageDriver;
use crate::config::Config;
use crate::error::Result;
use crate::pipeline;
use crate::session::Session;
use crate::types::Outcome;

pub trait Execute {
    fn execute(&self, ctx: &mut CommandContext) -> Result<Outcome>;
}

pub struct CommandContext {
    pub driver: Box<dyn PageDriver>,
    pub config: Config,
    pub session: Session,
}

impl CommandContext {
    pub fn new(driver: Box<dyn PageDriver>, config: Config, session: Session) -> Self {
        Self {
            driver,
            config,
            session,
        }
    }

    /// Run a page-load cycle for the session's current URL.
    ///
    /// The report is kept on the session so later commands (follow, save)
    /// can refer to it.
    pub fn load_current(&mut self) -> Result<Outcome> {
        let url = self.session.current_url().to_string();
        let report = pipeline::load_page(
            self.driver.as_ref(),
            &url,
            &self.session.options,
            self.config.text_preview_chars,
        )?;

        self.session.set_last_report(report.clone());
        Ok(Outcome::Page(report))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::browser::fake::FakeDriver;
    use crate::types::ExtractOptions;

    pub const START: &str = "https://start.test/";

    pub const START_PAGE: &str = r#"<html><body>
        <a href="/docs/intro.html">Intro</a>
        <a href="https://other.test/">Elsewhere</a>
        <table><tr><th>k</th><th>v</th></tr><tr><td>a</td><td>1</td></tr></table>
        <img src="/logo.png">
    </body></html>"#;

    pub fn fake_driver() -> FakeDriver {
        FakeDriver::new()
            .with_page(START, START_PAGE)
            .with_page("https://start.test/docs/intro.html", "<h1>Intro</h1>")
            .with_page("https://other.test/", "<h1>Other</h1>")
            .with_page("https://a.test", "<h1>A</h1>")
            .with_page("https://b.test", "<h1>B</h1>")
            .with_page("https://c.test", "<h1>C</h1>")
    }

    pub fn context_with(driver: FakeDriver) -> CommandContext {
        let options = ExtractOptions {
            screenshot: false,
            ..Default::default()
        };
        CommandContext::new(
            Box::new(driver),
            Config::default(),
            Session::new(START, options),
        )
    }

    pub fn context() -> CommandContext {
        context_with(fake_driver())
    }
}
