//! Victory Road game logic.
//!
//! - [`types`] - the Dark/Psychic/Fighting type triangle
//! - [`chance`] - injected randomness for battles
//! - [`battle`] - single-exchange trainer battles
//! - [`boss`] - the best-of-three boss encounter
//! - [`world`] - the fixed room map
//! - [`trivia`] - trivia questions and answer checks
//! - [`console`] - prompt/print abstraction
//! - [`intro`] - intro narrative and narrator name lookup
//! - [`session`] - the navigation loop tying it all together

pub mod battle;
pub mod boss;
pub mod chance;
pub mod console;
pub mod intro;
pub mod session;
pub mod trivia;
pub mod types;
pub mod world;

pub use battle::{resolve, run_single_battle, BattleReport, Outcome};
pub use boss::{run_boss_battle, BossReport};
pub use chance::{Chance, FixedChance, RngChance};
pub use console::{Console, ScriptedConsole, StdConsole};
pub use session::{GameSession, SessionBuilder, SessionSummary};
pub use types::{type_advantage, Advantage, BattleType};
pub use world::{Direction, RoomId, RoomKind, WorldMap};
