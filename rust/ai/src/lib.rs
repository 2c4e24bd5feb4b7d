//! # blackjack-ai: Automated Players
//!
//! Hit-or-stand policies that take the human's place at the decision point,
//! used by the `sim` command and for scripted play.
//!
//! ## Core Components
//!
//! - [`AIPlayer`] - Trait defining the interface for automated decisions
//! - [`baseline`] - Plays by the dealer's own rule
//! - [`cautious`] - Stands early against a weak dealer up card
//! - [`create_ai`] - Factory function for creating policies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_ai::{create_ai, AIPlayer};
//! use blackjack_engine::engine::{RoundPhase, Session, SessionConfig};
//!
//! let ai = create_ai("baseline").unwrap();
//! let mut session = Session::with_config(SessionConfig {
//!     seed: Some(42),
//!     ..SessionConfig::default()
//! })
//! .unwrap();
//! session.deal_round().unwrap();
//!
//! if session.phase() == RoundPhase::PlayerTurn {
//!     let decision = ai.decide(&session.player_view(), session.dealer_up_card());
//!     println!("{} chose {:?}", ai.name(), decision);
//! }
//! ```

use blackjack_engine::cards::Card;
use blackjack_engine::hand::HandView;
use blackjack_engine::rules::{Decision, BLACKJACK};

pub mod baseline;
pub mod cautious;

/// Names accepted by [`create_ai`].
pub const AI_NAMES: &[&str] = &["baseline", "cautious"];

/// Interface for automated players.
///
/// # Example Implementation
///
/// ```rust
/// use blackjack_ai::AIPlayer;
/// use blackjack_engine::cards::Card;
/// use blackjack_engine::hand::HandView;
/// use blackjack_engine::rules::Decision;
///
/// struct AlwaysStand;
///
/// impl AIPlayer for AlwaysStand {
///     fn decide(&self, _player: &HandView, _dealer_up: Option<&Card>) -> Decision {
///         Decision::Stand
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysStand"
///     }
/// }
/// ```
pub trait AIPlayer: Send + Sync {
    /// Choose hit or stand for `player` given the dealer's face-up card.
    fn decide(&self, player: &HandView, dealer_up: Option<&Card>) -> Decision;

    fn name(&self) -> &str;
}

/// Factory function to create a policy by name.
///
/// # Errors
///
/// Returns a message listing the known names if `ai_type` is unknown.
///
/// # Example
///
/// ```rust
/// use blackjack_ai::create_ai;
///
/// assert_eq!(create_ai("baseline").unwrap().name(), "BaselineAI");
/// assert!(create_ai("oracle").is_err());
/// ```
pub fn create_ai(ai_type: &str) -> Result<Box<dyn AIPlayer>, String> {
    match ai_type {
        "baseline" => Ok(Box::new(baseline::BaselineAI::new())),
        "cautious" => Ok(Box::new(cautious::CautiousAI::new())),
        _ => Err(format!(
            "Unknown AI type '{}'. Available: {}",
            ai_type,
            AI_NAMES.join(", ")
        )),
    }
}

/// Highest total that does not exceed 21, if any.
pub fn highest_live_total(view: &HandView) -> Option<u32> {
    view.totals
        .as_ref()?
        .iter()
        .copied()
        .filter(|&t| t <= BLACKJACK)
        .max()
}
