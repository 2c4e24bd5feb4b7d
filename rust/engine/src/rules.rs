use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::hand::Hand;

/// The total every participant is aiming for.
pub const BLACKJACK: u32 = 21;

/// The dealer keeps drawing while its best total is below this.
pub const DEALER_STANDS_ON: u32 = 17;

/// Terminal state of a hand, derived from its possible totals.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandStatus {
    /// Neither blackjack nor bust
    Open,
    /// 21 is among the possible totals
    Blackjack,
    /// Even the smallest possible total is over 21
    Bust,
}

impl HandStatus {
    /// Classifies a set of possible totals. Bust is checked first, so a
    /// hand whose every total is over 21 is never reported as blackjack.
    pub fn evaluate(totals: &[u32]) -> HandStatus {
        match totals.iter().min() {
            Some(&min) if min > BLACKJACK => HandStatus::Bust,
            _ if totals.contains(&BLACKJACK) => HandStatus::Blackjack,
            _ => HandStatus::Open,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != HandStatus::Open
    }
}

/// Result of a round from the player's side.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

/// A player answer at the hit-or-stand decision point.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    Hit,
    Stand,
}

impl FromStr for Decision {
    type Err = GameError;

    /// Accepts any word starting with `h` or `s`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        if lowered.starts_with('h') {
            Ok(Decision::Hit)
        } else if lowered.starts_with('s') {
            Ok(Decision::Stand)
        } else {
            Err(GameError::InvalidDecision(s.trim().to_string()))
        }
    }
}

/// Whether a dealer holding `hand` must take another card.
pub fn dealer_must_draw(hand: &Hand) -> bool {
    hand.best_total() < DEALER_STANDS_ON
}

/// Compares two finished hands. The first matching rule wins:
///
/// 1. equal best totals draw, whatever the status flags say
/// 2. player blackjack against a dealer without one wins
/// 3. dealer blackjack against a player without one loses
/// 4. player bust against a live dealer loses
/// 5. dealer bust against a live player wins
/// 6. otherwise the higher best total wins
pub fn settle_outcome(player: &Hand, dealer: &Hand) -> Outcome {
    let (ptotal, dtotal) = (player.best_total(), dealer.best_total());
    let (pstat, dstat) = (player.status(), dealer.status());
    use HandStatus::{Blackjack, Bust};

    if ptotal == dtotal {
        Outcome::Draw
    } else if pstat == Blackjack && dstat != Blackjack {
        Outcome::Win
    } else if pstat != Blackjack && dstat == Blackjack {
        Outcome::Loss
    } else if pstat == Bust && dstat != Bust {
        Outcome::Loss
    } else if pstat != Bust && dstat == Bust {
        Outcome::Win
    } else if ptotal > dtotal {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_totals() {
        assert_eq!(HandStatus::evaluate(&[11, 21]), HandStatus::Blackjack);
        assert_eq!(HandStatus::evaluate(&[30]), HandStatus::Bust);
        assert_eq!(HandStatus::evaluate(&[12, 22, 32]), HandStatus::Open);
        assert_eq!(HandStatus::evaluate(&[0]), HandStatus::Open);
    }

    #[test]
    fn decision_parses_prefixes() {
        assert_eq!("h".parse::<Decision>(), Ok(Decision::Hit));
        assert_eq!("HIT".parse::<Decision>(), Ok(Decision::Hit));
        assert_eq!(" stand ".parse::<Decision>(), Ok(Decision::Stand));
        assert_eq!(
            "x".parse::<Decision>(),
            Err(GameError::InvalidDecision("x".to_string()))
        );
    }
}
