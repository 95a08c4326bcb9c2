//! Single-exchange trainer battles.
//!
//! [`resolve`] decides one exchange from the type matchup and a weighted coin
//! flip. [`run_single_battle`] is the console loop used in ordinary trainer
//! rooms; the boss encounter in [`crate::game::boss`] reuses `resolve` with its
//! own best-of-three loop.

use log::debug;

use crate::errors::GameError;
use crate::game::chance::{random_type, Chance};
use crate::game::console::Console;
use crate::game::types::{type_advantage, Advantage, BattleType};

/// Win chance when the player's type beats the trainer's.
pub const ADVANTAGE_WIN_CHANCE: f64 = 0.7;
/// Win chance for a mirror matchup.
pub const NEUTRAL_WIN_CHANCE: f64 = 0.5;

pub const TYPE_PROMPT: &str = "Choose your type (Dark, Psychic, or Fighting): ";
pub const INVALID_TYPE: &str = "Invalid type! Please choose Dark, Psychic, or Fighting.";
pub const PLAYER_WINS_LINE: &str = "You win!";
pub const TRAINER_WINS_LINE: &str = "Victory Road Trainer wins!";
pub const GAME_OVER_LINE: &str = "Game over! You lost all your lives.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerWins,
    TrainerWins,
}

impl Outcome {
    pub fn line(self) -> &'static str {
        match self {
            Outcome::PlayerWins => PLAYER_WINS_LINE,
            Outcome::TrainerWins => TRAINER_WINS_LINE,
        }
    }
}

/// Decide one exchange. A type disadvantage loses outright without a draw.
pub fn resolve(player: BattleType, trainer: BattleType, chance: &mut dyn Chance) -> Outcome {
    let won = match type_advantage(player, trainer) {
        Advantage::Advantage => chance.draw(ADVANTAGE_WIN_CHANCE),
        Advantage::Neutral => chance.draw(NEUTRAL_WIN_CHANCE),
        Advantage::Disadvantage => false,
    };
    if won {
        Outcome::PlayerWins
    } else {
        Outcome::TrainerWins
    }
}

/// Prompt until the player names one of the three types exactly.
pub fn prompt_type(console: &mut dyn Console) -> Result<BattleType, GameError> {
    loop {
        let answer = console.ask(TYPE_PROMPT)?;
        match answer.parse::<BattleType>() {
            Ok(t) => return Ok(t),
            Err(e) => {
                debug!("rejected type input: {}", e);
                console.say(INVALID_TYPE)?;
            }
        }
    }
}

/// Result of one trainer room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleReport {
    pub trainer: BattleType,
    /// `None` when the traveler had no lives to fight with.
    pub outcome: Option<Outcome>,
    pub lives: u32,
}

/// Fight one randomly typed trainer for exactly one exchange.
pub fn run_single_battle(
    console: &mut dyn Console,
    chance: &mut dyn Chance,
    lives: u32,
) -> Result<BattleReport, GameError> {
    let mut lives = lives;
    let trainer = random_type(chance);
    console.say(&format!("Victory Road Trainer has a {} type!", trainer))?;
    console.say(&format!("Lives remaining: {}", lives))?;

    let mut outcome = None;
    if lives > 0 {
        let player = prompt_type(console)?;
        let result = resolve(player, trainer, chance);
        console.say(&format!("You chose type: {}", player))?;
        console.say(&format!("Victory Road Trainer chose: {}", trainer))?;
        console.say(result.line())?;
        if result == Outcome::TrainerWins {
            lives = lives.saturating_sub(1);
        }
        console.say(&format!("You have {} lives left.", lives))?;
        debug!(
            "trainer battle: player={} trainer={} outcome={:?} lives={}",
            player, trainer, result, lives
        );
        outcome = Some(result);
    }

    if lives == 0 {
        console.say(GAME_OVER_LINE)?;
    }

    Ok(BattleReport {
        trainer,
        outcome,
        lives,
    })
}
