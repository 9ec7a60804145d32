//! # indian-poker-engine: Indian Poker Game Engine Core
//!
//! A deterministic engine for two-player Indian Poker: each player sees the
//! opponent's private card and two community cards, but never its own card.
//! Provides hand scoring, the betting-round state machine, chip accounting
//! for single games and seeded multi-game tournaments between two agents.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card ranks (1-10) and the 40-card deck
//! - [`deck`] - Seeded dealer drawing four cards per round with ChaCha20 RNG
//! - [`hand`] - Hand scoring and scoring bands
//! - [`agent`] - The [`agent::Agent`] capability and the [`agent::VisibleState`] snapshot
//! - [`round`] - Betting protocol for a single round
//! - [`game`] - A game of rounds with stack and turn-order bookkeeping
//! - [`tournament`] - Seeded series of games with point accumulation
//! - [`config`] - Game and tournament parameters with validation
//! - [`logger`] - Round records and JSONL output
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use indian_poker_engine::cards::Card;
//! use indian_poker_engine::hand::score;
//!
//! let c = |r| Card::new(r).unwrap();
//! // {1, 2, 10} is the best wrap-around straight
//! assert_eq!(score(c(2), c(1), c(10)), 22);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All game outcomes are reproducible: each game owns a generator seeded from
//! the game seed.
//!
//! ```rust
//! use indian_poker_engine::deck::Deck;
//!
//! let mut d1 = Deck::new_with_seed(42);
//! let mut d2 = Deck::new_with_seed(42);
//! assert_eq!(d1.deal(), d2.deal());
//! ```

pub mod agent;
pub mod cards;
pub mod config;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod round;
pub mod tournament;
