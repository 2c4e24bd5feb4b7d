use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::rules::{HandStatus, BLACKJACK};

/// Default number of characters of a participant name kept for display.
pub const NAME_DISPLAY_LIMIT: usize = 7;

/// The set of totals a hand can be counted as.
///
/// Every Ace offers two values, so each draw combines the current totals
/// with the card's point values by pairwise addition. Values are kept sorted
/// and deduplicated, which bounds growth to one extra total per Ace.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Totals(Vec<u32>);

impl Default for Totals {
    fn default() -> Self {
        Totals(vec![0])
    }
}

impl Totals {
    pub fn combine(&self, points: &[u32]) -> Totals {
        let mut sums: Vec<u32> = self
            .0
            .iter()
            .flat_map(|t| points.iter().map(move |p| t + p))
            .collect();
        sums.sort_unstable();
        sums.dedup();
        Totals(sums)
    }

    /// All distinct totals in ascending order. When every total is over 21
    /// only the smallest is reported.
    pub fn values(&self) -> Vec<u32> {
        match self.0.first() {
            Some(&min) if min > BLACKJACK => vec![min],
            _ => self.0.clone(),
        }
    }
}

/// Cards held by one participant plus the scoring state derived from them.
#[derive(Debug, Clone)]
pub struct Hand {
    name: String,
    cards: Vec<Card>,
    totals: Totals,
}

impl Hand {
    pub fn new(name: &str) -> Self {
        Self::with_name_limit(name, NAME_DISPLAY_LIMIT)
    }

    pub fn with_name_limit(name: &str, limit: usize) -> Self {
        Self {
            name: name.chars().take(limit).collect(),
            cards: Vec::new(),
            totals: Totals::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn draw(&mut self, id: CardId) {
        let card = Card::new(id);
        self.totals = self.totals.combine(card.points());
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_names(&self) -> Vec<String> {
        self.cards.iter().map(Card::name).collect()
    }

    pub fn total_values(&self) -> Vec<u32> {
        self.totals.values()
    }

    /// Largest reported total; this is what settlement compares.
    pub fn best_total(&self) -> u32 {
        self.totals.values().last().copied().unwrap_or(0)
    }

    /// Recomputed from the totals on every call.
    pub fn status(&self) -> HandStatus {
        HandStatus::evaluate(&self.total_values())
    }

    pub fn reset(&mut self) {
        self.cards.clear();
        self.totals = Totals::default();
    }

    pub fn view(&self) -> HandView {
        HandView {
            name: self.name.clone(),
            cards: self.card_names(),
            hidden_cards: 0,
            totals: Some(self.total_values()),
            status: Some(self.status()),
        }
    }

    /// Dealer view during play: only the first card is face up.
    pub fn view_hiding_hole(&self) -> HandView {
        let shown: Vec<String> = self.cards.iter().take(1).map(Card::name).collect();
        HandView {
            name: self.name.clone(),
            hidden_cards: self.cards.len() - shown.len(),
            cards: shown,
            totals: None,
            status: None,
        }
    }
}

/// Snapshot of a hand handed to callers. Totals and status are withheld
/// while cards are face down.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandView {
    pub name: String,
    pub cards: Vec<String>,
    #[serde(default)]
    pub hidden_cards: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totals: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<HandStatus>,
}

impl HandView {
    pub fn best_total(&self) -> Option<u32> {
        self.totals.as_ref().and_then(|t| t.last().copied())
    }
}
