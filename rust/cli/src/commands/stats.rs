//! Statistics over a JSONL round log written by `play --log` or
//! `sim --output`.

use crate::error::CliError;
use crate::formatters::format_tallies;
use crate::io_utils::read_text;
use crate::ui;
use blackjack_engine::engine::Tallies;
use blackjack_engine::logger::RoundRecord;
use blackjack_engine::rules::HandStatus;
use std::io::Write;

/// Aggregates outcomes from a round log.
///
/// Blank lines are ignored. Lines that are not valid round records are
/// counted and skipped with a warning; a final line without a trailing
/// newline is treated as an interrupted write rather than corruption.
///
/// # Returns
///
/// `Err` when the file cannot be read or holds no valid record.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text(&input)
        .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", input, e)))?;
    let summary = summarize(&content);

    if summary.corrupted > 0 {
        ui::display_warning(
            err,
            &format!("Skipped {} corrupted record(s)", summary.corrupted),
        )?;
    }
    if summary.incomplete > 0 {
        ui::display_warning(err, "Ignored incomplete final line")?;
    }
    if summary.tallies.played() == 0 {
        return Err(CliError::InvalidInput(format!(
            "No valid round records in {}",
            input
        )));
    }

    writeln!(out, "Rounds: {}", summary.tallies.played())?;
    writeln!(out, "{}", format_tallies(&summary.tallies))?;
    writeln!(out, "Player blackjacks: {}", summary.player_blackjacks)?;
    writeln!(out, "Player busts: {}", summary.player_busts)?;
    writeln!(out, "Dealer busts: {}", summary.dealer_busts)?;
    Ok(())
}

#[derive(Debug, Default, PartialEq)]
struct Summary {
    tallies: Tallies,
    player_blackjacks: u32,
    player_busts: u32,
    dealer_busts: u32,
    corrupted: u32,
    incomplete: u32,
}

fn summarize(content: &str) -> Summary {
    let mut summary = Summary::default();
    let has_trailing_nl = content.ends_with('\n');
    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();

    for (i, line) in lines.iter().enumerate() {
        let rec: RoundRecord = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(_) => {
                if i == lines.len() - 1 && !has_trailing_nl {
                    summary.incomplete += 1;
                } else {
                    summary.corrupted += 1;
                }
                continue;
            }
        };
        summary.tallies.record(rec.outcome);
        match rec.player.status {
            Some(HandStatus::Blackjack) => summary.player_blackjacks += 1,
            Some(HandStatus::Bust) => summary.player_busts += 1,
            _ => {}
        }
        if rec.dealer.status == Some(HandStatus::Bust) {
            summary.dealer_busts += 1;
        }
    }
    summary
}
