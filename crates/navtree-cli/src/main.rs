//! # navtree CLI entry point

use std::process::ExitCode;

use clap::Parser;

use navtree_cli::logging::init_logging;
use navtree_cli::{run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    tracing::debug!("navtree CLI v{} starting", navtree::VERSION);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run(&cli, &mut out) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
