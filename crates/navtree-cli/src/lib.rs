//! # navtree CLI
//!
//! Command-line front end for the `navtree` library: validates sidebar
//! configuration files, renders them as outlines, and converts between JSON
//! and YAML. Diagnostics go to stdout; logs go to stderr.

pub mod cli;
pub mod convert;
pub mod input;
pub mod logging;
pub mod show;
pub mod validate;

pub use cli::{Cli, Commands};

use std::io::Write;

/// Run a parsed command line, writing results to `out`.
///
/// Returns the process exit code.
pub fn run(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<u8> {
    match &cli.command {
        Commands::Validate(args) => validate::run_validate(args, out),
        Commands::Show(args) => show::run_show(args, out),
        Commands::Convert(args) => convert::run_convert(args, out),
    }
}
