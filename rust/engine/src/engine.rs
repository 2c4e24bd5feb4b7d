use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::{Hand, HandView, NAME_DISPLAY_LIMIT};
use crate::rules::{dealer_must_draw, settle_outcome, HandStatus, Outcome};
use crate::shoe::Shoe;

/// Name shown for the dealer's hand.
pub const DEALER_NAME: &str = "Dealer";

/// Where the current round stands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round dealt yet, or the last deal failed
    Waiting,
    /// Player may hit or stand
    PlayerTurn,
    /// Player is done; dealer draws (if needed) and the round awaits settlement
    DealerTurn,
    /// Outcome recorded; the next deal starts a new round
    Settled,
}

/// Parameters of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub player_name: String,
    pub num_decks: u16,
    /// RNG seed for the shoe; `None` draws one at random
    pub seed: Option<u64>,
    pub name_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_name: "You".into(),
            num_decks: 1,
            seed: None,
            name_limit: NAME_DISPLAY_LIMIT,
        }
    }
}

/// Win/loss/draw counters. They only grow during a session.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tallies {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Tallies {
    pub fn played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    fn percent(&self, n: u32) -> f64 {
        match self.played() {
            0 => 0.0,
            total => 100.0 * f64::from(n) / f64::from(total),
        }
    }

    pub fn win_pct(&self) -> f64 {
        self.percent(self.wins)
    }

    pub fn loss_pct(&self) -> f64 {
        self.percent(self.losses)
    }

    pub fn draw_pct(&self) -> f64 {
        self.percent(self.draws)
    }
}

/// Everything the caller needs to show once a round is decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub outcome: Outcome,
    pub tallies: Tallies,
    pub player: HandView,
    pub dealer: HandView,
}

/// A single-player blackjack session against the dealer.
///
/// Owns one shoe that persists across rounds, both hands, and the running
/// tallies. Decision points (hit or stand, play again) belong to the caller;
/// every method returns as soon as the requested step is done.
///
/// # Examples
///
/// ```
/// use blackjack_engine::engine::{RoundPhase, Session, SessionConfig};
///
/// let mut session = Session::with_config(SessionConfig {
///     seed: Some(7),
///     ..SessionConfig::default()
/// })
/// .unwrap();
///
/// let (player, dealer) = session.deal_round().unwrap();
/// assert_eq!(player.cards.len(), 2);
/// assert_eq!(dealer.hidden_cards, 1);
///
/// if session.phase() == RoundPhase::PlayerTurn {
///     session.player_stand().unwrap();
/// }
/// let settlement = session.settle().unwrap();
/// assert_eq!(settlement.tallies.played(), 1);
/// ```
#[derive(Debug)]
pub struct Session {
    shoe: Shoe,
    seed: u64,
    player: Hand,
    dealer: Hand,
    tallies: Tallies,
    phase: RoundPhase,
    /// Dealer skips drawing this round (player bust or a natural after the deal)
    dealer_skips: bool,
}

impl Session {
    pub fn new(player_name: &str) -> Result<Self, GameError> {
        Self::with_config(SessionConfig {
            player_name: player_name.to_string(),
            ..SessionConfig::default()
        })
    }

    pub fn with_config(config: SessionConfig) -> Result<Self, GameError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let shoe = Shoe::new_with_seed(config.num_decks, seed)?;
        Ok(Self {
            shoe,
            seed,
            player: Hand::with_name_limit(&config.player_name, config.name_limit),
            dealer: Hand::with_name_limit(DEALER_NAME, config.name_limit),
            tallies: Tallies::default(),
            phase: RoundPhase::Waiting,
            dealer_skips: false,
        })
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tallies(&self) -> Tallies {
        self.tallies
    }

    pub fn shoe_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    pub fn shoe_capacity(&self) -> usize {
        self.shoe.capacity()
    }

    pub fn num_decks(&self) -> u16 {
        self.shoe.num_decks()
    }

    /// Refills the shoe. Tallies and the current hands are untouched.
    pub fn reset_shoe(&mut self) {
        self.shoe.reset();
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn player_view(&self) -> HandView {
        self.player.view()
    }

    /// Dealer hand as the player may see it: the hole card stays hidden
    /// until the player's turn is over.
    pub fn dealer_view(&self) -> HandView {
        match self.phase {
            RoundPhase::PlayerTurn => self.dealer.view_hiding_hole(),
            _ => self.dealer.view(),
        }
    }

    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer.cards().first()
    }

    /// Starts a new round: clears both hands and deals two cards each from
    /// the persistent shoe, dealer first.
    ///
    /// A natural on either side ends the player's turn right away and the
    /// dealer takes no further cards.
    pub fn deal_round(&mut self) -> Result<(HandView, HandView), GameError> {
        if matches!(self.phase, RoundPhase::PlayerTurn | RoundPhase::DealerTurn) {
            return Err(GameError::RoundInProgress(self.phase));
        }
        self.player.reset();
        self.dealer.reset();
        self.dealer_skips = false;

        if let Err(e) = self.deal_initial() {
            self.player.reset();
            self.dealer.reset();
            self.phase = RoundPhase::Waiting;
            return Err(e);
        }

        let naturals = self.player.status() == HandStatus::Blackjack
            || self.dealer.status() == HandStatus::Blackjack;
        if naturals {
            self.dealer_skips = true;
            self.phase = RoundPhase::DealerTurn;
        } else {
            self.phase = RoundPhase::PlayerTurn;
        }
        debug!(
            player = ?self.player.card_names(),
            dealer_up = ?self.dealer_up_card().map(Card::name),
            phase = ?self.phase,
            "round dealt"
        );

        Ok((self.player.view(), self.dealer.view_hiding_hole()))
    }

    fn deal_initial(&mut self) -> Result<(), GameError> {
        for _ in 0..2 {
            let id = self.shoe.draw_one()?;
            self.dealer.draw(id);
        }
        for _ in 0..2 {
            let id = self.shoe.draw_one()?;
            self.player.draw(id);
        }
        Ok(())
    }

    /// Draws one card for the player. A blackjack or bust ends the turn.
    pub fn player_hit(&mut self) -> Result<HandView, GameError> {
        if self.phase == RoundPhase::DealerTurn && self.player.status().is_terminal() {
            return Err(GameError::HandFinished);
        }
        self.expect_phase(RoundPhase::PlayerTurn)?;
        let id = match self.shoe.draw_one() {
            Ok(id) => id,
            Err(e) => {
                self.abandon_round();
                return Err(e);
            }
        };
        self.player.draw(id);

        match self.player.status() {
            HandStatus::Open => {}
            HandStatus::Blackjack => self.phase = RoundPhase::DealerTurn,
            HandStatus::Bust => {
                self.dealer_skips = true;
                self.phase = RoundPhase::DealerTurn;
            }
        }
        debug!(totals = ?self.player.total_values(), status = ?self.player.status(), "player hit");
        Ok(self.player.view())
    }

    pub fn player_stand(&mut self) -> Result<(), GameError> {
        self.expect_phase(RoundPhase::PlayerTurn)?;
        self.phase = RoundPhase::DealerTurn;
        debug!(totals = ?self.player.total_values(), "player stands");
        Ok(())
    }

    /// Plays the dealer's turn: draw until the best total reaches 17.
    /// Calling it again in the same round does nothing.
    pub fn play_dealer(&mut self) -> Result<HandView, GameError> {
        self.expect_phase(RoundPhase::DealerTurn)?;
        if !self.dealer_skips {
            while dealer_must_draw(&self.dealer) {
                let id = match self.shoe.draw_one() {
                    Ok(id) => id,
                    Err(e) => {
                        self.abandon_round();
                        return Err(e);
                    }
                };
                self.dealer.draw(id);
            }
            self.dealer_skips = true;
            debug!(totals = ?self.dealer.total_values(), status = ?self.dealer.status(), "dealer done");
        }
        Ok(self.dealer.view())
    }

    /// Decides the round and bumps exactly one tally.
    pub fn settle(&mut self) -> Result<Settlement, GameError> {
        self.play_dealer()?;

        let outcome = settle_outcome(&self.player, &self.dealer);
        self.tallies.record(outcome);
        self.phase = RoundPhase::Settled;
        info!(
            ?outcome,
            player = self.player.best_total(),
            dealer = self.dealer.best_total(),
            wins = self.tallies.wins,
            losses = self.tallies.losses,
            draws = self.tallies.draws,
            "round settled"
        );

        Ok(Settlement {
            outcome,
            tallies: self.tallies,
            player: self.player.view(),
            dealer: self.dealer.view(),
        })
    }

    fn expect_phase(&self, expected: RoundPhase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn abandon_round(&mut self) {
        self.player.reset();
        self.dealer.reset();
        self.dealer_skips = false;
        self.phase = RoundPhase::Waiting;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> Session {
        Session::with_config(SessionConfig {
            seed: Some(seed),
            ..SessionConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn tallies_percentages() {
        let t = Tallies {
            wins: 1,
            losses: 2,
            draws: 1,
        };
        assert_eq!(t.played(), 4);
        assert_eq!(t.win_pct(), 25.0);
        assert_eq!(t.loss_pct(), 50.0);
        assert_eq!(Tallies::default().draw_pct(), 0.0);
    }

    #[test]
    fn stand_before_deal_is_wrong_phase() {
        let mut s = seeded(1);
        assert_eq!(
            s.player_stand(),
            Err(GameError::WrongPhase {
                expected: RoundPhase::PlayerTurn,
                actual: RoundPhase::Waiting,
            })
        );
    }

    #[test]
    fn dealer_view_hides_hole_only_during_player_turn() {
        let mut s = seeded(3);
        s.deal_round().unwrap();
        if s.phase() == RoundPhase::PlayerTurn {
            assert_eq!(s.dealer_view().hidden_cards, 1);
            s.player_stand().unwrap();
        }
        assert_eq!(s.dealer_view().hidden_cards, 0);
    }

    #[test]
    fn hit_on_empty_shoe_voids_the_round() {
        let mut s = (0..)
            .map(seeded)
            .find_map(|mut s| {
                s.deal_round().unwrap();
                (s.phase() == RoundPhase::PlayerTurn).then_some(s)
            })
            .unwrap();
        while s.shoe.remaining() > 0 {
            s.shoe.draw_one().unwrap();
        }

        assert_eq!(s.player_hit(), Err(GameError::EmptyShoe));
        assert_eq!(s.phase(), RoundPhase::Waiting);
        assert!(s.player().cards().is_empty());
        assert!(s.dealer().cards().is_empty());
        assert_eq!(s.tallies().played(), 0);

        s.reset_shoe();
        s.deal_round().unwrap();
        assert_eq!(s.player().cards().len(), 2);
    }
}
