use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::types::Outcome;

#[derive(Default)]
pub struct BackCommand {}

impl Execute for BackCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<Outcome> {
        match ctx.session.go_back() {
            Some(_) => ctx.load_current(),
            None => Ok(Outcome::Unchanged),
        }
    }
}
