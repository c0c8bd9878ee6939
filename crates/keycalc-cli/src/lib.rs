//! keycalc CLI library
//!
//! Terminal front ends for the `keycalc` engine: a scripted `run` mode,
//! an interactive themed keypad and a layout printer.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]

pub mod bubbles;
mod commands;
mod config;
mod error;
pub mod input;
pub mod interactive;
pub mod logging;
pub mod render;
pub mod script;
pub mod theme;

pub use commands::{Cli, Commands, InteractiveArgs, RunArgs};
pub use config::{ShellConfig, Verbosity};
pub use error::{CliError, CliResult};
pub use input::{InputHandler, ShellCommand};
pub use interactive::Shell;
pub use script::{run_tokens, Step, Transcript};
pub use theme::{Palette, Theme};
