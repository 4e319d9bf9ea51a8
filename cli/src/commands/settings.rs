//! Extraction settings commands
//!
//! Toggle content categories and set the custom selector. Changes apply to
//! the next page load; nothing is reloaded here.

use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::types::{ExtractCategory, Outcome};

pub struct SetOptionCommand {
    pub category: ExtractCategory,
    pub enabled: bool,
}

impl SetOptionCommand {
    pub fn new(category: ExtractCategory, enabled: bool) -> Self {
        Self { category, enabled }
    }
}

impl Execute for SetOptionCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<Outcome> {
        ctx.session.options.set(self.category, self.enabled);
        Ok(Outcome::Options(ctx.session.options.clone()))
    }
}

/// Set or clear the custom selector; blank input clears it
pub struct SelectorCommand {
    pub selector: Option<String>,
}

impl SelectorCommand {
    pub fn new(selector: Option<String>) -> Self {
        Self { selector }
    }
}

impl Execute for SelectorCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<Outcome> {
        ctx.session.options.selector = self
            .selector
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Ok(Outcome::Options(ctx.session.options.clone()))
    }
}
