//! Cautious policy: avoid busting when the dealer shows a weak card.

use crate::baseline::BaselineAI;
use crate::{AIPlayer, highest_live_total};
use blackjack_engine::cards::{Card, Rank};
use blackjack_engine::hand::HandView;
use blackjack_engine::rules::Decision;

const STAND_VS_WEAK_UP: u32 = 12;

#[derive(Debug, Clone, Default)]
pub struct CautiousAI {
    fallback: BaselineAI,
}

impl CautiousAI {
    pub fn new() -> Self {
        Self::default()
    }
}

fn is_weak_up_card(card: &Card) -> bool {
    matches!(
        card.rank,
        Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six
    )
}

impl AIPlayer for CautiousAI {
    fn decide(&self, player: &HandView, dealer_up: Option<&Card>) -> Decision {
        if let (Some(up), Some(total)) = (dealer_up, highest_live_total(player))
            && is_weak_up_card(up)
            && total >= STAND_VS_WEAK_UP
        {
            return Decision::Stand;
        }
        self.fallback.decide(player, dealer_up)
    }

    fn name(&self) -> &str {
        "CautiousAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_engine::hand::Hand;

    fn view_of(ids: &[u32]) -> HandView {
        let mut h = Hand::new("You");
        for &id in ids {
            h.draw(id);
        }
        h.view()
    }

    #[test]
    fn stands_on_twelve_against_six() {
        let ai = CautiousAI::new();
        let six = Card::new(5);
        assert_eq!(ai.decide(&view_of(&[9, 1]), Some(&six)), Decision::Stand);
    }

    #[test]
    fn plays_baseline_against_strong_card() {
        let ai = CautiousAI::new();
        let ten = Card::new(9);
        assert_eq!(ai.decide(&view_of(&[9, 1]), Some(&ten)), Decision::Hit);
        assert_eq!(ai.decide(&view_of(&[9, 1]), None), Decision::Hit);
    }
}
