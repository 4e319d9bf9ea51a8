//! Line-based interactive shell
//!
//! Reads one command per line and runs it against a single session, so
//! history and extraction toggles persist between commands. Errors are
//! printed and the loop carries on; only `quit`, `exit` or end of input
//! stop it.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use log::debug;

use crate::commands::{
    BackCommand, CommandContext, Execute, FollowCommand, ForwardCommand, HistoryListCommand,
    NavigateCommand, ReloadCommand, SaveCommand, SelectorCommand, SetOptionCommand,
};
use crate::error::{CliError, Result};
use crate::output::{OutputFormat, OutputFormatter};
use crate::types::{ExtractCategory, Outcome};

pub const HELP: &str = "\
Commands:
  go <URL>              Navigate to a URL (alias: open)
  back                  Go back in history
  forward               Go forward in history
  reload                Load the current URL again
  follow <N>            Follow link [N] of the current page
  history               Show history, current entry marked with *
  set <CATEGORY> on|off Toggle text, tables, links, images or screenshot
  selector [SELECTOR]   Set the custom CSS/XPath selector, empty clears it
  options               Show extraction settings
  save [DIR]            Write CSV downloads of the current page
  help                  Show this help
  quit                  Leave the shell (alias: exit)";

// =============================================================================
// Command Parsing
// =============================================================================

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Go(String),
    Back,
    Forward,
    Reload,
    Follow(usize),
    History,
    Set(ExtractCategory, bool),
    Selector(Option<String>),
    Options,
    Save(Option<PathBuf>),
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = CliError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_lowercase().as_str() {
            "go" | "open" => {
                if rest.is_empty() {
                    return Err(usage("go <URL>"));
                }
                Self::Go(rest.to_string())
            }
            "back" => Self::Back,
            "forward" => Self::Forward,
            "reload" => Self::Reload,
            "follow" => {
                let index = rest.parse().map_err(|_| usage("follow <N>"))?;
                Self::Follow(index)
            }
            "history" => Self::History,
            "set" => {
                let mut parts = rest.split_whitespace();
                let (Some(category), Some(state), None) =
                    (parts.next(), parts.next(), parts.next())
                else {
                    return Err(usage("set <CATEGORY> on|off"));
                };
                Self::Set(category.parse()?, parse_switch(state)?)
            }
            "selector" => Self::Selector((!rest.is_empty()).then(|| rest.to_string())),
            "options" => Self::Options,
            "save" => Self::Save((!rest.is_empty()).then(|| PathBuf::from(rest))),
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => {
                return Err(CliError::InvalidArguments(format!(
                    "unknown command '{}'. Type 'help' for a list of commands",
                    other
                )));
            }
        };
        Ok(command)
    }
}

fn parse_switch(state: &str) -> Result<bool> {
    match state.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(usage("set <CATEGORY> on|off")),
    }
}

fn usage(form: &str) -> CliError {
    CliError::InvalidArguments(format!("usage: {}", form))
}

// =============================================================================
// Shell
// =============================================================================

/// What the loop should do after a line
pub enum Step {
    Continue(Result<Outcome>),
    Quit,
}

pub struct Shell {
    ctx: CommandContext,
    formatter: OutputFormatter,
    prompt: bool,
}

impl Shell {
    pub fn new(ctx: CommandContext, format: OutputFormat) -> Self {
        Self {
            ctx,
            formatter: OutputFormatter::new(format),
            prompt: format == OutputFormat::Human,
        }
    }

    /// Load `url`, or the start URL without recording it, before the first prompt
    pub fn initial_load(&mut self, url: Option<String>) -> Result<Outcome> {
        match url {
            Some(url) => NavigateCommand::new(url).execute(&mut self.ctx),
            None => ReloadCommand::default().execute(&mut self.ctx),
        }
    }

    pub fn handle_line(&mut self, line: &str) -> Step {
        if line.trim().is_empty() {
            return Step::Continue(Ok(Outcome::Unchanged));
        }

        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(e) => return Step::Continue(Err(e)),
        };
        debug!("shell command: {:?}", command);

        let result = match command {
            ShellCommand::Go(url) => NavigateCommand::new(url).execute(&mut self.ctx),
            ShellCommand::Back => BackCommand::default().execute(&mut self.ctx),
            ShellCommand::Forward => ForwardCommand::default().execute(&mut self.ctx),
            ShellCommand::Reload => ReloadCommand::default().execute(&mut self.ctx),
            ShellCommand::Follow(index) => FollowCommand::new(index).execute(&mut self.ctx),
            ShellCommand::History => HistoryListCommand::default().execute(&mut self.ctx),
            ShellCommand::Set(category, enabled) => {
                SetOptionCommand::new(category, enabled).execute(&mut self.ctx)
            }
            ShellCommand::Selector(selector) => {
                SelectorCommand::new(selector).execute(&mut self.ctx)
            }
            ShellCommand::Options => Ok(Outcome::Options(self.ctx.session.options.clone())),
            ShellCommand::Save(dir) => SaveCommand::new(dir).execute(&mut self.ctx),
            ShellCommand::Help => Ok(Outcome::Message {
                text: HELP.to_string(),
            }),
            ShellCommand::Quit => return Step::Quit,
        };
        Step::Continue(result)
    }

    /// Run until quit or end of input
    pub fn run<R: BufRead>(&mut self, initial_url: Option<String>, input: R) -> Result<()> {
        let first = self.initial_load(initial_url);
        self.report(first)?;

        let mut lines = input.lines();
        loop {
            if self.prompt {
                print!("> ");
                std::io::stdout().flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            match self.handle_line(&line?) {
                Step::Continue(result) => self.report(result)?,
                Step::Quit => break,
            }
        }
        Ok(())
    }

    fn report(&self, result: Result<Outcome>) -> Result<()> {
        match result {
            Ok(outcome) => self.formatter.print_outcome(&outcome),
            Err(e) => {
                self.formatter.print_failure(&e);
                Ok(())
            }
        }
    }

    pub fn context(&self) -> &CommandContext {
        &self.ctx
    }
}

// =============================================================================
// Tests
// =============================================================================
