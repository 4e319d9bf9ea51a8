use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::types::Outcome;

#[derive(Default)]
pub struct HistoryListCommand {}

impl Execute for HistoryListCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<Outcome> {
        Ok(Outcome::History(ctx.session.history_view()))
    }
}
