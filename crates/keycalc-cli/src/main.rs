//! keycalc: keyboard-driven calculator
//!
//! ## Usage
//!
//! ```bash
//! keycalc run 2 + 3 '*' 4 =        # prints 5 * 4 = / 20
//! keycalc run 12 / 0 = --json      # final display as JSON
//! keycalc --theme purple interactive
//! keycalc keypad                   # print the layout
//! ```

use clap::Parser;
use keycalc::Keypad;
use keycalc_cli::{
    interactive, logging, render, run_tokens, Cli, CliResult, Commands, InteractiveArgs, RunArgs,
    ShellConfig, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    logging::init(Verbosity::from_flags(cli.quiet, cli.verbose));

    match &cli.command {
        Commands::Run(args) => run_script(args),
        Commands::Interactive(args) => run_interactive(build_config(&cli)?, args),
        Commands::Keypad => {
            print_keypad();
            Ok(())
        }
    }
}

/// Shell configuration: file first, then command-line overrides
fn build_config(cli: &Cli) -> CliResult<ShellConfig> {
    let mut config = match &cli.config {
        Some(path) => ShellConfig::load(path)?,
        None => ShellConfig::new(),
    };
    if let Some(theme) = cli.theme {
        config = config.with_theme(theme);
    }
    Ok(config)
}

fn run_script(args: &RunArgs) -> CliResult<()> {
    let transcript = run_tokens(&args.tokens, args.steps)?;
    if args.json {
        println!("{}", transcript.to_json()?);
    } else {
        print!("{}", transcript.to_text());
    }
    Ok(())
}

fn run_interactive(mut config: ShellConfig, args: &InteractiveArgs) -> CliResult<()> {
    if args.no_animation {
        config = config.with_animate(false);
    }
    if let Some(tick_ms) = args.tick_ms {
        config = config.with_tick_ms(tick_ms);
    }
    interactive::run(&config.validate()?)
}

fn print_keypad() {
    for line in render::keypad_lines(&Keypad::standard()) {
        println!("{line}");
    }
}
