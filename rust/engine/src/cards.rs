use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Identifier of a physical card in the shoe. Ids run from `0` to
/// `52 * num_decks - 1`; every block of 52 ids is one standard deck.
pub type CardId = u32;

/// Number of cards in one standard deck.
pub const CARDS_PER_DECK: u32 = 52;

const RANKS_PER_SUIT: u32 = 13;

/// One of the four suits. Suits cycle every 13 ids in the order
/// Spade, Club, Heart, Diamond.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades (ids 0..13 of each deck)
    Spade,
    /// Clubs (ids 13..26)
    Club,
    /// Hearts (ids 26..39)
    Heart,
    /// Diamonds (ids 39..52)
    Diamond,
}

impl Suit {
    fn from_index(i: u32) -> Suit {
        match i % 4 {
            0 => Suit::Spade,
            1 => Suit::Club,
            2 => Suit::Heart,
            _ => Suit::Diamond,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Suit::Spade => "Spade",
            Suit::Club => "Club",
            Suit::Heart => "Heart",
            Suit::Diamond => "Diamond",
        };
        f.write_str(s)
    }
}

/// Card rank, Ace through King. The discriminant is the rank's position
/// inside a suit block (`id % 13`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    fn from_index(i: u32) -> Rank {
        match i % RANKS_PER_SUIT {
            0 => Rank::Ace,
            1 => Rank::Two,
            2 => Rank::Three,
            3 => Rank::Four,
            4 => Rank::Five,
            5 => Rank::Six,
            6 => Rank::Seven,
            7 => Rank::Eight,
            8 => Rank::Nine,
            9 => Rank::Ten,
            10 => Rank::Jack,
            11 => Rank::Queen,
            _ => Rank::King,
        }
    }

    /// Alternative point values of this rank. An Ace counts as 1 or 11,
    /// face cards as 10, everything else at face value.
    pub fn points(self) -> &'static [u32] {
        match self {
            Rank::Ace => &[1, 11],
            Rank::Two => &[2],
            Rank::Three => &[3],
            Rank::Four => &[4],
            Rank::Five => &[5],
            Rank::Six => &[6],
            Rank::Seven => &[7],
            Rank::Eight => &[8],
            Rank::Nine => &[9],
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => &[10],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card identified by its shoe id. Suit and rank are derived
/// from the id, so the same id always describes the same card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(id: CardId) -> Card {
        Card {
            id,
            suit: Suit::from_index(id / RANKS_PER_SUIT),
            rank: Rank::from_index(id),
        }
    }

    /// Display name, e.g. `"Spade A"` or `"Diamond 10"`.
    pub fn name(&self) -> String {
        format!("{} {}", self.suit, self.rank)
    }

    pub fn points(&self) -> &'static [u32] {
        self.rank.points()
    }
}

impl TryFrom<i64> for Card {
    type Error = GameError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        let id = CardId::try_from(id).map_err(|_| GameError::InvalidCardId(id))?;
        Ok(Card::new(id))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_suit_then_rank() {
        assert_eq!(Card::new(0).name(), "Spade A");
        assert_eq!(Card::new(9).name(), "Spade 10");
        assert_eq!(Card::new(12).name(), "Spade K");
        assert_eq!(Card::new(39).name(), "Diamond A");
    }

    #[test]
    fn second_deck_wraps_to_spades() {
        assert_eq!(Card::new(52).name(), "Spade A");
        assert_eq!(Card::new(65).suit, Suit::Club);
    }

    #[test]
    fn negative_id_is_rejected() {
        assert_eq!(Card::try_from(-1), Err(GameError::InvalidCardId(-1)));
        assert_eq!(Card::try_from(4).map(|c| c.rank), Ok(Rank::Five));
    }
}
