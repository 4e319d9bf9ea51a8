use crate::commands::utils::{normalize_url, validate_url};
use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::types::Outcome;

pub struct NavigateCommand {
    pub url: String,
}

impl NavigateCommand {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

impl Execute for NavigateCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<Outcome> {
        validate_url(&self.url)?;
        let normalized_url = normalize_url(&self.url);

        ctx.session.navigate(normalized_url);
        ctx.load_current()
    }
}
