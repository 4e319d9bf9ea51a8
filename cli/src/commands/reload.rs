use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::types::Outcome;

/// Re-run the page-load cycle for the current URL, leaving history alone.
///
/// Also used after toggling options so the new settings take effect.
#[derive(Default)]
pub struct ReloadCommand {}

impl Execute for ReloadCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<Outcome> {
        ctx.load_current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::*;
    use crate::commands::NavigateCommand;

    #[test]
    fn reload_reopens_current_url_without_new_entry() {
        let driver = fake_driver();
        let opened = driver.opened.clone();
        let mut ctx = context_with(driver);
        NavigateCommand::new("https://a.test".to_string()).execute(&mut ctx).unwrap();

        ReloadCommand::default().execute(&mut ctx).unwrap();
        assert_eq!(*opened.borrow(), vec!["https://a.test", "https://a.test"]);
        assert_eq!(ctx.session.history().len(), 1);
    }

    #[test]
    fn reload_applies_current_options() {
        let mut ctx = context();
        ctx.session.options.links = false;

        let Outcome::Page(report) = ReloadCommand::default().execute(&mut ctx).unwrap() else {
            panic!("expected page outcome");
        };
        assert!(report.links.is_none());
        assert!(report.tables.is_some());
    }
}
