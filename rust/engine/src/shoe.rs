use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::cards::{CardId, CARDS_PER_DECK};
use crate::errors::GameError;

/// The pool of undealt card ids for `num_decks` standard decks.
///
/// Cards are drawn uniformly at random without replacement. The shoe
/// persists across rounds and only refills on an explicit [`Shoe::reset`].
#[derive(Debug)]
pub struct Shoe {
    num_decks: u16,
    remaining: Vec<CardId>,
    rng: ChaCha20Rng,
}

impl Shoe {
    pub fn new(num_decks: u16) -> Result<Self, GameError> {
        Self::new_with_seed(num_decks, rand::random())
    }

    /// Same seed and deck count produce the same draw sequence.
    pub fn new_with_seed(num_decks: u16, seed: u64) -> Result<Self, GameError> {
        if num_decks == 0 {
            return Err(GameError::InvalidDeckCount(num_decks));
        }
        Ok(Self {
            num_decks,
            remaining: fresh_ids(num_decks),
            rng: ChaCha20Rng::seed_from_u64(seed),
        })
    }

    pub fn draw_one(&mut self) -> Result<CardId, GameError> {
        if self.remaining.is_empty() {
            return Err(GameError::EmptyShoe);
        }
        let idx = self.rng.random_range(0..self.remaining.len());
        let id = self.remaining.swap_remove(idx);
        debug!(card = id, remaining = self.remaining.len(), "drew card");
        Ok(id)
    }

    pub fn reset(&mut self) {
        self.remaining = fresh_ids(self.num_decks);
        debug!(num_decks = self.num_decks, "shoe reset");
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Card count of a full shoe.
    pub fn capacity(&self) -> usize {
        self.num_decks as usize * CARDS_PER_DECK as usize
    }

    pub fn num_decks(&self) -> u16 {
        self.num_decks
    }
}

fn fresh_ids(num_decks: u16) -> Vec<CardId> {
    (0..u32::from(num_decks) * CARDS_PER_DECK).collect()
}
