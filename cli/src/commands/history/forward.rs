use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::types::Outcome;

#[derive(Default)]
pub struct ForwardCommand {}

impl Execute for ForwardCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<Outcome> {
        match ctx.session.go_forward() {
            Some(_) => ctx.load_current(),
            None => Ok(Outcome::Unchanged),
        }
    }
}
