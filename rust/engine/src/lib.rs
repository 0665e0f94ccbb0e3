//! # greenfelt-engine: Four-Player Hold'em Game Core
//!
//! The game-logic kernel of a four-player Texas Hold'em table: card and deck
//! model, 7-card hand evaluation, Monte Carlo equity estimation, and the
//! betting-round state machine that sequences blinds, action turns, streets
//! and settlement. Rendering and input live outside this crate; they consume
//! the table's event stream and feed actions back in.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - Poker hand evaluation and strength comparison
//! - [`equity`] - Monte Carlo win-probability estimation
//! - [`player`] - Player state, actions, and stack management
//! - [`rules`] - Betting action legality
//! - [`table`] - The betting round state machine and its event stream
//! - [`logger`] - Hand history records and JSONL serialization
//! - [`stats`] - Per-session statistics for the tracked seat
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use greenfelt_engine::cards::{Card, Rank, Suit};
//! use greenfelt_engine::hand::hand_rank;
//!
//! // Evaluate a 7-card poker hand
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Diamonds, rank: Rank::Three },
//! ];
//!
//! let rank = hand_rank(&cards).unwrap();
//! println!("Best hand: {}", rank.category.label());
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Every source of chance is seeded. The same seed reproduces the same
//! session: deck shuffles, dealer draw, and (when the caller seeds its own
//! RNG) equity trials and bot decisions.
//!
//! ```rust
//! use greenfelt_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! // deck1 and deck2 will deal identical card sequences
//! ```

pub mod cards;
pub mod deck;
pub mod equity;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
pub mod stats;
pub mod table;
