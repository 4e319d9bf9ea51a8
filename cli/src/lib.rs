//! Mini Browser Library
//!
//! Loads web pages through a headless browser (or plain HTTP), extracts
//! text, tables, links, images and custom selector matches, and keeps a
//! per-session navigation history. Exposed as a library for programmatic
//! use and testing.

pub mod browser;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod history;
pub mod output;
pub mod pipeline;
pub mod session;
pub mod shell;
pub mod types;

// Re-exports for convenience
pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::{OutputFormat, OutputFormatter};

use commands::{CommandContext, Execute, NavigateCommand, SaveCommand};
use log::debug;
use session::Session;
use shell::Shell;
use types::Outcome;

// =============================================================================
// Main Entry Point
// =============================================================================

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let formatter = OutputFormatter::new(cli.output);

    // 1. Load configuration, flags win over the environment
    let mut config = config::load_config();
    if let Some(settle_ms) = cli.settle_ms {
        config.settle_ms = settle_ms;
    }
    if let Some(start_url) = cli.start_url {
        config.start_url = start_url;
    }
    debug!("engine {:?}, config {:?}", cli.engine, config);

    match cli.command {
        Commands::Version => formatter.print_outcome(&Outcome::Message {
            text: format!("minibrowser {}", env!("CARGO_PKG_VERSION")),
        }),
        Commands::Extract(args) => {
            // 2. One session, one page-load cycle
            let driver = browser::driver_for(cli.engine, &config)?;
            let mut session = Session::from_config(&config);
            session.options = args.toggles.options();
            let mut ctx = CommandContext::new(driver, config, session);

            let outcome = NavigateCommand::new(args.url).execute(&mut ctx)?;
            formatter.print_outcome(&outcome)?;

            // 3. Optional CSV downloads
            if let Some(dir) = args.save {
                let saved = SaveCommand::new(Some(dir)).execute(&mut ctx)?;
                formatter.print_outcome(&saved)?;
            }
            Ok(())
        }
        Commands::Shell(args) => {
            let driver = browser::driver_for(cli.engine, &config)?;
            let mut session = Session::from_config(&config);
            session.options = args.toggles.options();
            let ctx = CommandContext::new(driver, config, session);

            let stdin = std::io::stdin();
            Shell::new(ctx, cli.output).run(args.url, stdin.lock())
        }
    }
}
