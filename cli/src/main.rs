use std::process::ExitCode;

use minibrowser::{OutputFormatter, cli, run};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::parse();
    let formatter = OutputFormatter::new(cli.output);

    match run(cli) {
        Ok(()) => ExitCode::from(0_u8),
        Err(e) => {
            formatter.print_failure(&e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
