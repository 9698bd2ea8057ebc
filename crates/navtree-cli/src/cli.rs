//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use navtree::{ConfigFormat, JSON, YAML};

/// Validate and inspect documentation sidebar navigation trees.
#[derive(Parser, Debug)]
#[command(name = "navtree", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a sidebar file and report errors and warnings.
    Validate(ValidateArgs),

    /// Print a sidebar file as an indented outline.
    Show(ShowArgs),

    /// Re-encode a validated sidebar file in another format.
    Convert(ConvertArgs),
}

/// Text format named on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// JSON
    Json,
    /// YAML
    Yaml,
}

impl FormatArg {
    /// The library format this argument names.
    pub fn format(self) -> &'static dyn ConfigFormat {
        match self {
            FormatArg::Json => &JSON,
            FormatArg::Yaml => &YAML,
        }
    }
}

/// Where to read navigation config from.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Sidebar configuration file (.json, .yaml or .yml).
    pub file: PathBuf,

    /// Input format; detected from the file extension when omitted.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Only process the sidebar with this name.
    #[arg(long)]
    pub sidebar: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Warn about nodes nested deeper than this many levels.
    #[arg(long, env = "NAVTREE_MAX_DEPTH")]
    pub max_depth: Option<usize>,

    /// Exit with an error if any warnings are reported.
    #[arg(long)]
    pub fail_on_warnings: bool,

    /// Report diagnostics as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format.
    #[arg(long, value_enum)]
    pub to: FormatArg,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
