//! # Blackjack CLI Library
//!
//! Console front end for the `blackjack-engine` rules core. The engine owns
//! the rules; this crate owns prompts, rendering, configuration and files.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the subcommand,
//! reading answers from the process stdin. [`run_with_input`] takes any
//! buffered reader instead, which is how the tests drive `play`.
//!
//! ## Example Usage
//!
//! ```
//! use std::io::{self, Cursor};
//! let args = vec!["blackjack", "play", "--seed", "42", "--rounds", "1"];
//! let mut input = Cursor::new(b"s\n".to_vec());
//! let code = blackjack_cli::run_with_input(args, &mut io::sink(), &mut io::sink(), &mut input);
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds interactively against the dealer
//! - `sim`: Let an automated policy play a batch of rounds
//! - `stats`: Aggregate outcomes from a JSONL round log
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
#[macro_use]
mod macros;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{BlackjackCli, Commands};
use commands::{
    PlayOptions, SimOptions, handle_cfg_command, handle_play_command, handle_sim_command,
    handle_stats_command,
};
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    // Use stdin for real input (supports both TTY and piped stdin)
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// Same as [`run`], with player answers read from `input`.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "stats", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BlackjackCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Blackjack CLI");
            write_or_exit!(err, "Usage: blackjack <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: blackjack --help");
            return exit_code::ERROR;
        }
    };

    tracing::debug!(command = cli.cmd.name(), "dispatching");
    let result = match cli.cmd {
        Commands::Play {
            name,
            decks,
            seed,
            rounds,
            log,
        } => handle_play_command(
            PlayOptions {
                name,
                decks,
                seed,
                rounds,
                log,
            },
            out,
            err,
            input,
        ),
        Commands::Sim {
            rounds,
            policy,
            decks,
            seed,
            output,
        } => handle_sim_command(
            SimOptions {
                rounds,
                policy,
                decks,
                seed,
                output,
            },
            out,
            err,
        ),
        Commands::Stats { input } => handle_stats_command(input, out, err),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
