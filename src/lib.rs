//! yamb-rs: Yamb dice game engine
//!
//! Goals:
//! - Deterministic turn resolution with caller-provided randomness
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: simulate a two-player game
//! ```
//! use yamb_rs::actors::GreedyActor;
//! use yamb_rs::dice::seeded_rng;
//! use yamb_rs::game::Game;
//!
//! let mut game = Game::standard(&["ana", "ivo"]);
//! let mut actor = GreedyActor::new();
//! let mut rng = seeded_rng(42);
//!
//! while !game.is_over() {
//!     let outcome = game.advance(&mut actor, &mut rng).unwrap();
//!     assert!(outcome.rolls >= 1 && outcome.rolls <= 3);
//! }
//!
//! let winners = game.winners();
//! assert!(!winners.is_empty());
//! for seat in game.seats() {
//!     assert!(seat.board().grand_total().is_some());
//! }
//! ```

pub mod actors;
pub mod board;
pub mod column;
pub mod dice;
pub mod game;
pub mod scoring;
pub mod slots;
pub mod turn;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
