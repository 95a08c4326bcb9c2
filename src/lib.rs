//! # Victory Road - a small text adventure
//!
//! Walk a fixed maze of rooms, battle trainers with a three-type triangle,
//! answer trivia for extra lives, and defeat the Boss Trainer to escape. Lives
//! carry over between sessions through an embedded sled store.
//!
//! ## Features
//!
//! - **Type Triangle Battles**: Dark beats Psychic, Psychic beats Fighting, Fighting beats Dark.
//!   An advantaged pick wins 70% of the time, a mirror match 50%, a disadvantaged pick never.
//! - **Boss Encounter**: three wins before running out of lives, against a shuffled type cycle.
//! - **Trivia & Life Rooms**: each correct answer or LifePoint visit is +1 life.
//! - **Saved Lives**: per-traveler upsert into `<data_dir>/victory_road.db`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use victory_road::game::{GameSession, RngChance, StdConsole};
//! use victory_road::storage::TravelerStore;
//!
//! fn main() -> Result<(), victory_road::errors::GameError> {
//!     let store = TravelerStore::open("./data")?;
//!     let mut session = GameSession::new(
//!         "Traveler1",
//!         3,
//!         store,
//!         StdConsole::stdio(),
//!         RngChance::from_entropy(),
//!     );
//!     let summary = session.play()?;
//!     session.close()?;
//!     println!("victory: {}", summary.victory);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - battles, map, trivia, and the session loop
//! - [`storage`] - saved traveler state
//! - [`config`] - TOML configuration
//! - [`errors`] - storage and game error types

pub mod config;
pub mod errors;
pub mod game;
pub mod storage;
