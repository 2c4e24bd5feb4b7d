//! Batch simulation: an automated policy plays rounds with no prompts.

use crate::commands::{load_config, open_session, refill_on_empty, reshuffle_if_low};
use crate::error::CliError;
use crate::formatters::format_tallies;
use crate::ui;
use blackjack_ai::create_ai;
use blackjack_engine::engine::RoundPhase;
use blackjack_engine::logger::{RoundLogger, RoundRecord};
use blackjack_engine::rules::Decision;
use std::io::Write;
use tracing::info;

#[derive(Debug, Clone)]
pub struct SimOptions {
    pub rounds: u32,
    /// Policy name understood by `blackjack_ai::create_ai`
    pub policy: String,
    pub decks: Option<u16>,
    pub seed: Option<u64>,
    /// JSONL file each settled round is appended to
    pub output: Option<String>,
}

/// Runs `rounds` settled rounds with the chosen policy making every
/// hit-or-stand decision. Rounds voided by an empty shoe do not count.
pub fn handle_sim_command(
    opts: SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let ai = create_ai(&opts.policy).map_err(CliError::InvalidInput)?;
    let cfg = load_config()?;
    let mut session = open_session(&cfg, None, opts.decks, opts.seed)?;
    let mut logger = match &opts.output {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    writeln!(
        out,
        "sim: rounds={} policy={} decks={} seed={}",
        opts.rounds,
        ai.name(),
        session.num_decks(),
        session.seed()
    )?;

    let mut reshuffles = 0u32;
    'rounds: while session.tallies().played() < opts.rounds {
        if reshuffle_if_low(&mut session, cfg.reshuffle_below) {
            reshuffles += 1;
        }
        let dealt = session.deal_round();
        if refill_on_empty(&mut session, dealt, err)?.is_none() {
            reshuffles += 1;
            continue;
        }

        while session.phase() == RoundPhase::PlayerTurn {
            match ai.decide(&session.player_view(), session.dealer_up_card()) {
                Decision::Hit => {
                    let hit = session.player_hit();
                    if refill_on_empty(&mut session, hit, err)?.is_none() {
                        reshuffles += 1;
                        continue 'rounds;
                    }
                }
                Decision::Stand => session.player_stand()?,
            }
        }

        let settled = session.settle();
        let Some(settlement) = refill_on_empty(&mut session, settled, err)? else {
            reshuffles += 1;
            continue;
        };
        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            logger.write(&RoundRecord::from_settlement(
                id,
                Some(session.seed()),
                &settlement,
            ))?;
        }
    }

    let tallies = session.tallies();
    info!(played = tallies.played(), reshuffles, policy = ai.name(), "simulation finished");
    writeln!(out, "Rounds played: {}", tallies.played())?;
    writeln!(out, "{}", format_tallies(&tallies))?;
    writeln!(out, "Reshuffles: {}", reshuffles)?;
    if let Some(path) = &opts.output {
        writeln!(out, "Log: {}", path)?;
    }
    if reshuffles > 0 && cfg.reshuffle_below.is_none() {
        ui::display_warning(
            err,
            "Set BLACKJACK_RESHUFFLE_BELOW to refill the shoe before it runs dry",
        )?;
    }
    Ok(())
}
