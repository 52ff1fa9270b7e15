//! # concentration-engine: Concentration Game Core
//!
//! The rules of Concentration (a.k.a. Memory) for one human against one
//! computer opponent: 52 cards face-down on a 4×13 board, two flips per turn,
//! matching ranks are claimed and the same player goes again.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card identifiers and their rank/suit names
//! - [`board`] - The shuffled 4×13 grid and claimed cells
//! - [`memory`] - The computer's record of seen, unmatched cards
//! - [`engine`] - Turn engine: picks, match resolution, scoring, game over
//! - [`game`] - Phases and turn outcomes produced by the engine
//! - [`player`] - Competitors, scores and winner determination
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use concentration_engine::cards::{display_name, Card, Rank};
//!
//! let card = Card::new(18).unwrap();
//! assert_eq!(card.rank(), Rank::Six);
//! assert_eq!(display_name(card), "6 of clubs");
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Board layout and the opening coin flip come from one seeded RNG:
//!
//! ```rust
//! use concentration_engine::engine::Engine;
//!
//! let a = Engine::new(Some(42));
//! let b = Engine::new(Some(42));
//! assert_eq!(a.board(), b.board());
//! ```

pub mod board;
pub mod cards;
pub mod engine;
pub mod errors;
pub mod game;
pub mod memory;
pub mod player;
