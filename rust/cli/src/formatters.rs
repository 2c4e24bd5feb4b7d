//! Text rendering of hands, outcomes and tallies for the terminal.
//!
//! Pure functions over engine views; handlers decide where the text goes.
//!
//! ## Example
//!
//! ```rust
//! use blackjack_engine::hand::Hand;
//! use blackjack_cli::formatters::format_hand;
//!
//! let mut hand = Hand::new("You");
//! hand.draw(0);
//! hand.draw(12);
//! let text = format_hand(&hand.view());
//! assert!(text.contains("Spade A"));
//! assert!(text.contains("<11 or 21 points>"));
//! ```

use blackjack_engine::engine::Tallies;
use blackjack_engine::hand::HandView;
use blackjack_engine::rules::{HandStatus, Outcome};

/// Cards shown per row before wrapping.
const CARDS_PER_ROW: usize = 4;

/// Minimum width the participant name is right-aligned to.
const NAME_WIDTH: usize = 7;

pub fn banner() -> String {
    let rule = "=".repeat(61);
    format!("{rule}\n{:^61}\n{rule}", "B L A C K J A C K")
}

/// One card in a fixed-width box; `None` renders a face-down card.
pub fn format_card_box(name: Option<&str>) -> String {
    format!("[{:^10}]", name.unwrap_or(""))
}

/// Multi-line hand rendering: name and cards, then the possible totals and
/// the status when they are known.
pub fn format_hand(view: &HandView) -> String {
    let boxes: Vec<String> = view
        .cards
        .iter()
        .map(|c| format_card_box(Some(c)))
        .chain((0..view.hidden_cards).map(|_| format_card_box(None)))
        .collect();

    let width = NAME_WIDTH.max(view.name.chars().count());
    let indent = " ".repeat(width + 2);
    let mut lines = Vec::new();
    for (i, row) in boxes.chunks(CARDS_PER_ROW).enumerate() {
        let lead = if i == 0 {
            format!("{:>width$}: ", view.name)
        } else {
            indent.clone()
        };
        lines.push(format!("{}{}", lead, row.join(" ")));
    }
    if lines.is_empty() {
        lines.push(format!("{:>width$}:", view.name));
    }

    if let Some(totals) = &view.totals {
        lines.push(format!("{}<{}>", indent, format_totals(totals)));
    }
    match view.status {
        Some(HandStatus::Blackjack) => lines.push(format!("{}--> Blackjack!", indent)),
        Some(HandStatus::Bust) => lines.push(format!("{}--> Bust!", indent)),
        _ => {}
    }
    lines.join("\n")
}

/// `"17 points"`, `"7 or 17 points"`, `"3 or 13 or 23 points"`.
pub fn format_totals(totals: &[u32]) -> String {
    let joined: Vec<String> = totals.iter().map(u32::to_string).collect();
    format!("{} points", joined.join(" or "))
}

pub fn format_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "You win!",
        Outcome::Loss => "You lose.",
        Outcome::Draw => "Draw",
    }
}

/// Three-line summary with counts and percentages of rounds played.
pub fn format_tallies(t: &Tallies) -> String {
    [
        ("win", t.wins, t.win_pct()),
        ("lose", t.losses, t.loss_pct()),
        ("draw", t.draws, t.draw_pct()),
    ]
    .iter()
    .map(|(label, n, pct)| format!("  {:<5} {:>4}  [{:>5.1} %]", label, n, pct))
    .collect::<Vec<_>>()
    .join("\n")
}
