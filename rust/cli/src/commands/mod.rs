//! Command handler modules for the blackjack CLI.
//!
//! Each subcommand lives in its own file and exposes
//! `handle_COMMAND_command(...) -> Result<(), CliError>`, taking its output
//! streams (and stdin, for `play`) as `&mut dyn Write` / `&mut dyn BufRead`.
//! Helpers shared by `play` and `sim` sit here.

mod cfg;
mod play;
mod sim;
mod stats;

pub use cfg::handle_cfg_command;
pub use play::{PlayOptions, handle_play_command};
pub use sim::{SimOptions, handle_sim_command};
pub use stats::handle_stats_command;

use crate::config::{self, Config};
use crate::error::CliError;
use crate::ui;
use blackjack_engine::engine::{Session, SessionConfig};
use blackjack_engine::errors::GameError;
use std::io::Write;
use tracing::warn;

/// Load the layered configuration, reporting failures as `CliError::Config`.
pub(crate) fn load_config() -> Result<Config, CliError> {
    config::load_with_sources()
        .map(|resolved| resolved.config)
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build a session from the configuration with command-line overrides.
/// The seed is always fixed here so it can be printed and logged.
pub(crate) fn open_session(
    cfg: &Config,
    name: Option<String>,
    decks: Option<u16>,
    seed: Option<u64>,
) -> Result<Session, CliError> {
    let player_name = name.unwrap_or_else(|| cfg.player_name.clone());
    if player_name.trim().is_empty() {
        return Err(CliError::InvalidInput("name must not be empty".into()));
    }
    let session = Session::with_config(SessionConfig {
        player_name,
        num_decks: decks.unwrap_or(cfg.decks),
        seed: Some(seed.or(cfg.seed).unwrap_or_else(rand::random)),
        name_limit: cfg.name_limit,
    })?;
    Ok(session)
}

/// Refill the shoe before a deal when it has dropped under `threshold`.
pub(crate) fn reshuffle_if_low(
    session: &mut Session,
    threshold: Option<usize>,
) -> bool {
    match threshold {
        Some(below) if session.shoe_remaining() < below => {
            session.reset_shoe();
            true
        }
        _ => false,
    }
}

/// Turn an empty-shoe failure into `Ok(None)` after refilling the shoe.
/// The engine has already voided the round at that point.
pub(crate) fn refill_on_empty<T>(
    session: &mut Session,
    result: Result<T, GameError>,
    err: &mut dyn Write,
) -> Result<Option<T>, CliError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(GameError::EmptyShoe) => {
            warn!(capacity = session.shoe_capacity(), "shoe exhausted");
            ui::display_warning(err, "The shoe ran out of cards; the round is void. Reshuffling.")?;
            session.reset_shoe();
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
