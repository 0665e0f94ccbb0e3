//! # greenfelt CLI
//!
//! Terminal front-end for the greenfelt hold'em engine. The main entry point
//! is [`run`], which parses arguments and dispatches to a subcommand.
//!
//! ## Available Subcommands
//!
//! - `play`: sit at a four-player table against three bots
//! - `deal`: deal one sample hand for inspection
//! - `eval`: rank a holding and estimate its win odds
//! - `sim`: run bot-vs-bot hands and summarize the results

use std::io::Write;
use std::path::Path;

use clap::Parser;

use greenfelt_ai::Difficulty;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, GreenfeltCli};
use commands::{
    handle_deal_command, handle_eval_command, handle_play_command, handle_sim_command,
};
use config::resolve_config;
pub use error::CliError;

/// Parse command-line arguments and execute the chosen subcommand.
///
/// Exit code `0` for success, `2` for errors; help and version print to
/// stdout and exit `0`.
///
/// ```
/// use std::io;
/// let args = vec!["greenfelt", "deal", "--seed", "42"];
/// let code = greenfelt_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "deal", "eval", "sim"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = GreenfeltCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    0
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Usage: greenfelt <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return 2;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return 2;
                        }
                    }
                    2
                }
            }
        }
        Ok(parsed) => {
            let result = match parsed.cmd {
                Commands::Play {
                    name,
                    stack,
                    small_blind,
                    difficulty,
                    seed,
                    hands,
                    config,
                } => resolve_config(
                    config.as_deref().map(Path::new),
                    name,
                    stack,
                    small_blind,
                    difficulty.map(|d| d.to_difficulty()),
                )
                .and_then(|cfg| {
                    // Real stdin; tests drive the handler with a Cursor.
                    let stdin = std::io::stdin();
                    let mut lock = stdin.lock();
                    handle_play_command(cfg, seed, hands, out, err, &mut lock)
                }),
                Commands::Deal { seed } => handle_deal_command(seed, out),
                Commands::Eval {
                    hole,
                    board,
                    trials,
                    seed,
                } => handle_eval_command(&hole, &board, trials, seed, out),
                Commands::Sim {
                    hands,
                    seed,
                    difficulty,
                    log,
                } => handle_sim_command(
                    hands,
                    seed,
                    difficulty
                        .map(|d| d.to_difficulty())
                        .unwrap_or(Difficulty::Medium),
                    log.as_deref(),
                    out,
                ),
            };
            match result {
                Ok(()) => 0,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return 2;
                    }
                    2
                }
            }
        }
    }
}
