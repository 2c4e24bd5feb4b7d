//! Baseline policy: play the player's hand by the dealer's rule.

use crate::{AIPlayer, highest_live_total};
use blackjack_engine::cards::Card;
use blackjack_engine::hand::HandView;
use blackjack_engine::rules::{DEALER_STANDS_ON, Decision};

/// Hits while the highest live total is below the dealer's standing
/// threshold, ignoring the up card.
#[derive(Debug, Clone)]
pub struct BaselineAI {
    stand_on: u32,
}

impl BaselineAI {
    pub fn new() -> Self {
        Self {
            stand_on: DEALER_STANDS_ON,
        }
    }

    pub fn with_threshold(stand_on: u32) -> Self {
        Self { stand_on }
    }
}

impl Default for BaselineAI {
    fn default() -> Self {
        Self::new()
    }
}

impl AIPlayer for BaselineAI {
    fn decide(&self, player: &HandView, _dealer_up: Option<&Card>) -> Decision {
        match highest_live_total(player) {
            Some(total) if total < self.stand_on => Decision::Hit,
            _ => Decision::Stand,
        }
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
