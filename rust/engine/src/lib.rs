//! # blackjack-engine: Blackjack Rules Core
//!
//! A single-player blackjack engine against a scripted dealer. Covers card
//! derivation from shoe ids, the multi-deck shoe, hand scoring with soft
//! Ace totals, and the round state machine with session tallies.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card ids and their derived suit, rank and point values
//! - [`shoe`] - Multi-deck shoe with seeded draw-without-replacement
//! - [`hand`] - Hand totals (one alternative per Ace) and hand views
//! - [`rules`] - Hand status, dealer rule, outcome precedence, decisions
//! - [`engine`] - The session: deal, player turn, dealer turn, settlement
//! - [`logger`] - JSONL round records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::hand::Hand;
//! use blackjack_engine::rules::HandStatus;
//!
//! let mut hand = Hand::new("You");
//! hand.draw(0); // Spade A
//! hand.draw(10); // Spade J
//! assert_eq!(hand.total_values(), vec![11, 21]);
//! assert_eq!(hand.status(), HandStatus::Blackjack);
//! ```
//!
//! ## Deterministic Play
//!
//! ```rust
//! use blackjack_engine::shoe::Shoe;
//!
//! let mut a = Shoe::new_with_seed(2, 42).unwrap();
//! let mut b = Shoe::new_with_seed(2, 42).unwrap();
//! assert_eq!(a.draw_one(), b.draw_one());
//! ```

pub mod cards;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod rules;
pub mod shoe;
