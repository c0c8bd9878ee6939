//! CLI command definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::theme::Theme;

/// keycalc: keyboard-driven calculator with chaining, memory and themes
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// YAML configuration file for the interactive shell
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Color theme of the interactive shell, overriding the configuration file
    #[arg(long, global = true, value_enum)]
    pub theme: Option<Theme>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Feed tokens to a fresh calculator and print the display
    ///
    /// Tokens are keypad labels or aliases: digits, `.`, `+ - * /`, `mod`,
    /// `^`, `=`, `C`, `bs`, `%`, `sqrt`, `M+`, `M-`, `MR`, `MC`.
    /// Multi-digit numbers such as `12.5` are split into digits.
    Run(RunArgs),

    /// Start the interactive terminal calculator
    Interactive(InteractiveArgs),

    /// Print the keypad layout
    Keypad,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Tokens to apply, in order
    #[arg(required = true, num_args = 1..)]
    pub tokens: Vec<String>,

    /// Print the display after every token
    #[arg(long)]
    pub steps: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the interactive command
#[derive(Parser, Debug)]
pub struct InteractiveArgs {
    /// Disable the bubble animation
    #[arg(long)]
    pub no_animation: bool,

    /// Animation tick interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub tick_ms: Option<u64>,
}
