//! # Play Command
//!
//! Interactive blackjack against the dealer. Each round is dealt from a
//! shoe that persists for the whole session; the player answers the
//! hit-or-stand prompt until the hand stands, busts or reaches 21, then the
//! dealer plays out and the round is settled.
//!
//! ## Input
//!
//! - `h...` hits, `s...` or an empty line stands
//! - `q` / `quit` finishes the current round and ends the session
//! - end of input stands and ends the session
//! - unrecognized answers are reported on the error stream and asked again

use crate::commands::{load_config, open_session, refill_on_empty, reshuffle_if_low};
use crate::error::CliError;
use crate::formatters::{banner, format_hand, format_outcome, format_tallies};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ContinueAnswer, ParseResult, parse_continue, parse_decision};
use blackjack_engine::engine::{RoundPhase, Session, Settlement};
use blackjack_engine::logger::{RoundLogger, RoundRecord};
use blackjack_engine::rules::Decision;
use std::io::{BufRead, Write};
use tracing::info;

/// Command-line overrides for a play session.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub name: Option<String>,
    pub decks: Option<u16>,
    pub seed: Option<u64>,
    /// Stop after this many settled rounds
    pub rounds: Option<u32>,
    /// JSONL file each settled round is appended to
    pub log: Option<String>,
}

/// Handle the play command: interactive rounds until the player stops.
///
/// # Returns
///
/// * `Ok(())` once the session ends normally
/// * `Err(CliError)` if `rounds` is 0, configuration or flags are invalid,
///   the log file cannot be created, or an I/O error occurs
///
/// # Examples
///
/// ```ignore
/// use blackjack_cli::commands::{handle_play_command, PlayOptions};
/// use std::io::{stdin, stdout, stderr};
///
/// let opts = PlayOptions { rounds: Some(1), ..PlayOptions::default() };
/// handle_play_command(opts, &mut stdout(), &mut stderr(), &mut stdin().lock()).unwrap();
/// ```
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if opts.rounds == Some(0) {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let cfg = load_config()?;
    let mut session = open_session(&cfg, opts.name, opts.decks, opts.seed)?;
    let mut logger = match &opts.log {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    writeln!(out, "{}", banner())?;
    writeln!(
        out,
        "play: decks={} seed={}",
        session.num_decks(),
        session.seed()
    )?;

    let mut round = 0u32;
    let mut quit = false;
    loop {
        if reshuffle_if_low(&mut session, cfg.reshuffle_below) {
            writeln!(out, "Shuffling a fresh shoe.")?;
        }
        let Some(settlement) = play_round(&mut session, round + 1, &mut quit, out, err, stdin)?
        else {
            // Void round: the shoe has been refilled, deal again.
            continue;
        };
        round += 1;

        writeln!(out)?;
        writeln!(out, "{}", format_hand(&settlement.dealer))?;
        writeln!(out, "{}", format_hand(&settlement.player))?;
        writeln!(out, "{}", format_outcome(settlement.outcome))?;

        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            logger.write(&RoundRecord::from_settlement(
                id,
                Some(session.seed()),
                &settlement,
            ))?;
        }

        if quit || opts.rounds.is_some_and(|limit| round >= limit) {
            break;
        }
        if !ask_continue(out, err, stdin)? {
            break;
        }
        ui::separator(out)?;
    }

    let tallies = session.tallies();
    info!(played = tallies.played(), "play session finished");
    writeln!(out)?;
    writeln!(out, "Rounds played: {}", tallies.played())?;
    writeln!(out, "{}", format_tallies(&tallies))?;
    Ok(())
}

/// Deal, run the player's turn from input, and settle. `Ok(None)` means the
/// shoe ran out mid-round and the round was voided.
fn play_round(
    session: &mut Session,
    number: u32,
    quit: &mut bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<Settlement>, CliError> {
    let dealt = session.deal_round();
    let Some((player, dealer)) = refill_on_empty(session, dealt, err)? else {
        return Ok(None);
    };
    writeln!(out, "Round {}", number)?;
    writeln!(out, "{}", format_hand(&dealer))?;
    writeln!(out, "{}", format_hand(&player))?;

    while session.phase() == RoundPhase::PlayerTurn {
        ui::prompt(out, "Hit or Stand? (h/s [s]) ")?;
        let decision = match read_stdin_line(stdin) {
            None => {
                writeln!(out)?;
                *quit = true;
                Decision::Stand
            }
            Some(line) => match parse_decision(&line) {
                ParseResult::Decision(d) => d,
                ParseResult::Quit => {
                    *quit = true;
                    Decision::Stand
                }
                ParseResult::Invalid(msg) => {
                    ui::write_error(err, &msg)?;
                    continue;
                }
            },
        };
        match decision {
            Decision::Hit => {
                let hit = session.player_hit();
                let Some(view) = refill_on_empty(session, hit, err)? else {
                    return Ok(None);
                };
                writeln!(out, "{}", format_hand(&view))?;
            }
            Decision::Stand => session.player_stand()?,
        }
    }

    let settled = session.settle();
    refill_on_empty(session, settled, err)
}

/// Ask whether to play another round. End of input counts as no.
fn ask_continue(
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<bool, CliError> {
    loop {
        ui::prompt(out, "Continue? (y/n [y]) ")?;
        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            return Ok(false);
        };
        match parse_continue(&line) {
            ContinueAnswer::Continue => return Ok(true),
            ContinueAnswer::Stop => return Ok(false),
            ContinueAnswer::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Cursor;

    fn run(opts: PlayOptions, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let res = handle_play_command(opts, &mut out, &mut err, &mut stdin);
        (
            res,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn seeded(seed: u64) -> PlayOptions {
        PlayOptions {
            seed: Some(seed),
            ..PlayOptions::default()
        }
    }

    #[test]
    #[serial]
    fn zero_rounds_rejected() {
        let opts = PlayOptions {
            rounds: Some(0),
            ..seeded(1)
        };
        let (res, _, _) = run(opts, "");
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
    }

    #[test]
    #[serial]
    fn end_of_input_plays_one_round() {
        let (res, out, _) = run(seeded(42), "");
        assert!(res.is_ok());
        assert!(out.contains("Round 1"), "{out}");
        assert!(out.contains("Rounds played: 1"), "{out}");
    }

    #[test]
    #[serial]
    fn round_limit_stops_without_asking() {
        let opts = PlayOptions {
            rounds: Some(2),
            ..seeded(7)
        };
        let (res, out, _) = run(opts, "\n\n\n\n\n\n");
        assert!(res.is_ok());
        assert!(out.contains("Round 2"), "{out}");
        assert!(!out.contains("Round 3"), "{out}");
        assert!(out.contains("Rounds played: 2"), "{out}");
    }

    #[test]
    #[serial]
    fn invalid_answer_is_reported_and_asked_again() {
        let (res, _, err) = run(seeded(42), "zzz\n");
        assert!(res.is_ok());
        assert!(err.contains("Error:"), "{err}");
    }
}
