//! Follow command implementation
//!
//! Follows a link of the last loaded page by its index in the links
//! section. The href is resolved against the URL of that page before
//! navigating.

use crate::commands::utils::resolve_link;
use crate::commands::{CommandContext, Execute};
use crate::error::{CliError, Result};
use crate::types::Outcome;

pub struct FollowCommand {
    pub index: usize,
}

impl FollowCommand {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl Execute for FollowCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<Outcome> {
        // resolve against the page the link came from; after a failed load
        // the history cursor already points somewhere else
        let target = match (ctx.session.last_report(), ctx.session.link(self.index)) {
            (Some(report), Some(link)) => resolve_link(&report.url, &link.href),
            _ => {
                return Err(CliError::InvalidArguments(format!(
                    "no link [{}] on the current page",
                    self.index
                )));
            }
        };

        ctx.session.navigate(target);
        ctx.load_current()
    }
}

// =============================================================================
// Tests
// =============================================================================
