//! Parsing of answers typed at the two decision points: hit or stand, and
//! whether to play another round.

use blackjack_engine::rules::Decision;

/// Outcome of parsing a hit-or-stand answer.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Decision(Decision),
    /// User entered q or quit
    Quit,
    /// Unrecognized answer with a message for the re-prompt
    Invalid(String),
}

/// Parse a hit-or-stand answer.
///
/// An empty answer stands. Otherwise any word starting with `h` hits and
/// any word starting with `s` stands; `q`/`quit` ends the session after the
/// current round.
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::{parse_decision, ParseResult};
/// use blackjack_engine::rules::Decision;
///
/// assert_eq!(parse_decision("h"), ParseResult::Decision(Decision::Hit));
/// assert_eq!(parse_decision(""), ParseResult::Decision(Decision::Stand));
/// assert_eq!(parse_decision("quit"), ParseResult::Quit);
/// assert!(matches!(parse_decision("double"), ParseResult::Invalid(_)));
/// ```
pub fn parse_decision(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => ParseResult::Decision(Decision::Stand),
        "q" | "quit" => ParseResult::Quit,
        other => match other.parse::<Decision>() {
            Ok(d) => ParseResult::Decision(d),
            Err(e) => ParseResult::Invalid(e.to_string()),
        },
    }
}

/// Outcome of parsing a play-again answer.
#[derive(Debug, PartialEq)]
pub enum ContinueAnswer {
    Continue,
    Stop,
    Invalid(String),
}

/// Parse a play-again answer. Empty means yes.
pub fn parse_continue(input: &str) -> ContinueAnswer {
    match input.trim().to_lowercase().as_str() {
        "" | "y" | "yes" => ContinueAnswer::Continue,
        "n" | "no" | "q" | "quit" => ContinueAnswer::Stop,
        other => ContinueAnswer::Invalid(format!(
            "Unrecognized answer '{}'. Answer y or n",
            other
        )),
    }
}
