//! Best-of-three boss encounter.
//!
//! The boss shuffles the three types once and cycles through them, showing
//! `order[wins % 3]`. The encounter ends at three wins or zero lives, so it
//! runs at most `3 + lives` exchanges.

use log::{debug, info};

use crate::errors::GameError;
use crate::game::battle::{prompt_type, resolve, Outcome};
use crate::game::chance::{shuffled_types, Chance};
use crate::game::console::Console;
use crate::game::types::BattleType;

pub const WINS_REQUIRED: u32 = 3;
pub const BOSS_VICTORY_LINE: &str = "Congratulations! You defeated the Boss Trainer!";
pub const BOSS_DEFEAT_LINE: &str = "Game over! You ran out of lives.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossReport {
    pub order: [BattleType; 3],
    pub wins: u32,
    pub lives: u32,
    pub exchanges: u32,
}

impl BossReport {
    pub fn defeated_boss(&self) -> bool {
        self.wins >= WINS_REQUIRED
    }
}

pub fn run_boss_battle(
    console: &mut dyn Console,
    chance: &mut dyn Chance,
    lives: u32,
) -> Result<BossReport, GameError> {
    let order = shuffled_types(chance);
    let mut lives = lives;
    let mut wins = 0u32;
    let mut exchanges = 0u32;
    debug!("boss order: {:?}", order);

    while wins < WINS_REQUIRED && lives > 0 {
        let boss = order[wins as usize % order.len()];
        console.say(&format!("Victory Road Boss Trainer has a {} type!", boss))?;
        console.say(&format!("Lives remaining: {}", lives))?;

        let player = prompt_type(console)?;
        let outcome = resolve(player, boss, chance);
        exchanges += 1;
        console.say(&format!("You chose type: {}", player))?;
        console.say(&format!("Victory Road Boss Trainer chose: {}", boss))?;
        console.say("")?;
        console.say(outcome.line())?;

        match outcome {
            Outcome::TrainerWins => {
                lives = lives.saturating_sub(1);
                console.say(&format!("Try Again! Lives remaining: {}", lives))?;
            }
            Outcome::PlayerWins => wins += 1,
        }
        console.say("")?;

        if wins == WINS_REQUIRED {
            console.say(BOSS_VICTORY_LINE)?;
        }
    }

    if lives == 0 {
        console.say(BOSS_DEFEAT_LINE)?;
    }

    info!(
        "boss encounter finished: wins={} lives={} exchanges={}",
        wins, lives, exchanges
    );
    Ok(BossReport {
        order,
        wins,
        lives,
        exchanges,
    })
}
