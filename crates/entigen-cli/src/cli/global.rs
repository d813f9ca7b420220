//! Flags shared by every entigen subcommand.
//!
//! Flattened into [`super::Cli`], so `entigen -v entity Foo` and
//! `entigen entity Foo -v` both work.

use clap::Args;
use std::path::PathBuf;

/// Flags accepted on any invocation.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Raise the log level; stacks up to `-vvv` (trace). Without it only
    /// warnings and errors are logged.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More log output (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal. Artifact listings, hints, and success
    /// lines are all suppressed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// Strip ANSI colour from all output. Setting the `NO_COLOR` environment
    /// variable has the same effect (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Read configuration from this file instead of the default location.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Use an alternate configuration file"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How to render output"
    )]
    pub output_format: OutputFormat,
}

/// Rendering mode for command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pick `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Colours and unicode indicators.
    Human,
    /// Unstyled text.
    Plain,
    /// Machine-readable JSON.
    Json,
}
