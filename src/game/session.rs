//! One playthrough of Victory Road.
//!
//! A [`GameSession`] restores the traveler's saved lives, walks the map on
//! console input, runs the encounter for each room entered, and saves lives
//! again when the walk ends by victory or by running out of lives. Errors
//! abort the walk without saving; the store is still released when the
//! session is dropped.

use log::{debug, info, warn};

use crate::errors::GameError;
use crate::game::battle::run_single_battle;
use crate::game::boss::run_boss_battle;
use crate::game::chance::Chance;
use crate::game::console::Console;
use crate::game::trivia::question_for;
use crate::game::world::{Direction, RoomId, RoomKind, WorldMap};
use crate::storage::TravelerStore;

pub const ENTER_LINE: &str = "You're now entering Victory Road. Good Luck!\n";
pub const DIRECTION_PROMPT: &str = "Where to, traveler? ";
pub const BLOCKED_LINE: &str = "You can't go that way!\n";
pub const HEALTH_LINE: &str = "+1 to your Health!";
pub const ANSWER_PROMPT: &str = "Your Answer is: ";
pub const VICTORY_LINE: &str =
    "Congrats! You have defeated the Boss. You have successfully completed Victory Road!";

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub room: RoomId,
    pub lives: u32,
    pub victory: bool,
    pub moves: u32,
}

/// Helper builder so tests can start a session anywhere on the map.
pub struct SessionBuilder {
    traveler: String,
    lives: u32,
    start: Option<RoomId>,
    world: WorldMap,
}

impl SessionBuilder {
    pub fn new(traveler: impl Into<String>, initial_lives: u32) -> Self {
        Self {
            traveler: traveler.into(),
            lives: initial_lives,
            start: None,
            world: WorldMap::canonical(),
        }
    }

    /// Begin in `room` instead of the map's entrance.
    pub fn starting_in(mut self, room: RoomId) -> Self {
        self.start = Some(room);
        self
    }

    pub fn build<C, R>(self, store: TravelerStore, console: C, chance: R) -> GameSession<C, R>
    where
        C: Console,
        R: Chance,
    {
        let room = self.start.unwrap_or_else(|| self.world.start());
        GameSession {
            world: self.world,
            store: Some(store),
            console,
            chance,
            traveler: self.traveler,
            room,
            lives: self.lives,
            moves: 0,
        }
    }
}

pub struct GameSession<C: Console, R: Chance> {
    world: WorldMap,
    store: Option<TravelerStore>,
    console: C,
    chance: R,
    traveler: String,
    room: RoomId,
    lives: u32,
    moves: u32,
}

impl<C: Console, R: Chance> GameSession<C, R> {
    pub fn new(
        traveler: &str,
        initial_lives: u32,
        store: TravelerStore,
        console: C,
        chance: R,
    ) -> Self {
        SessionBuilder::new(traveler, initial_lives).build(store, console, chance)
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn room(&self) -> RoomId {
        self.room
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    fn store(&self) -> Result<&TravelerStore, GameError> {
        self.store
            .as_ref()
            .ok_or_else(|| GameError::Internal("traveler store already closed".to_string()))
    }

    /// Overwrite in-memory lives with the saved value, if any.
    pub fn restore(&mut self) -> Result<(), GameError> {
        if let Some(saved) = self.store()?.load_lives(&self.traveler)? {
            self.lives = saved;
            self.console.say(&format!("Lives: {}", self.lives))?;
            info!("restored {} lives for {}", self.lives, self.traveler);
        } else {
            debug!("no save for {}; starting with {} lives", self.traveler, self.lives);
        }
        if self.lives == 0 {
            warn!(
                "{} has no lives left; clear the save with `victory-road reset` to play again",
                self.traveler
            );
        }
        Ok(())
    }

    pub fn persist(&self) -> Result<(), GameError> {
        self.store()?.save_lives(&self.traveler, self.lives)?;
        info!("saved {} lives for {}", self.lives, self.traveler);
        Ok(())
    }

    /// Restore, play until victory or defeat, then save.
    pub fn play(&mut self) -> Result<SessionSummary, GameError> {
        self.console.say(ENTER_LINE)?;
        self.restore()?;

        while self.room != self.world.exit() && self.lives > 0 {
            self.turn()?;
        }

        let victory = self.room == self.world.exit();
        if victory {
            self.console.say(VICTORY_LINE)?;
        }
        self.persist()?;

        info!(
            "session over: room={} lives={} victory={} moves={}",
            self.room, self.lives, victory, self.moves
        );
        Ok(SessionSummary {
            room: self.room,
            lives: self.lives,
            victory,
            moves: self.moves,
        })
    }

    /// Show the room, read one direction, and move if it is a valid exit.
    fn turn(&mut self) -> Result<(), GameError> {
        let exits: Vec<&str> = self
            .world
            .exits(self.room)
            .iter()
            .map(|(d, _)| d.as_str())
            .collect();
        self.console.say(&format!("You are in {}.", self.room))?;
        self.console.say(&format!("You can go: {}", exits.join(", ")))?;

        let answer = self.console.ask(DIRECTION_PROMPT)?;
        let destination =
            Direction::parse(&answer).and_then(|d| self.world.neighbor(self.room, d));
        match destination {
            Some(next) => {
                debug!("{} -> {}", self.room, next);
                self.room = next;
                self.moves += 1;
                self.enter_room()
            }
            None => {
                debug!("blocked move '{}' from {}", answer.trim(), self.room);
                self.console.say(BLOCKED_LINE)
            }
        }
    }

    fn enter_room(&mut self) -> Result<(), GameError> {
        match self.room.kind() {
            RoomKind::Trainer => {
                let report = run_single_battle(&mut self.console, &mut self.chance, self.lives)?;
                self.lives = report.lives;
            }
            RoomKind::Boss => {
                let report = run_boss_battle(&mut self.console, &mut self.chance, self.lives)?;
                self.lives = report.lives;
            }
            RoomKind::LifePoint => self.gain_life()?,
            RoomKind::Trivia => self.ask_trivia()?,
            RoomKind::Plain | RoomKind::Exit => {}
        }
        Ok(())
    }

    fn gain_life(&mut self) -> Result<(), GameError> {
        self.lives += 1;
        self.console.say(&format!("{} {}", HEALTH_LINE, self.lives))
    }

    fn ask_trivia(&mut self) -> Result<(), GameError> {
        let Some(question) = question_for(self.room) else {
            return Ok(());
        };
        self.console.say(question.prompt)?;
        let answer = self.console.ask(ANSWER_PROMPT)?;
        if question.is_correct(&answer) {
            debug!("trivia in {} answered correctly", self.room);
            self.gain_life()
        } else {
            self.console
                .say(&format!("Wrong! The correct answer is: {}", question.answer))
        }
    }

    /// Release the store, flushing it first.
    pub fn close(mut self) -> Result<C, GameError> {
        if let Some(store) = self.store.take() {
            store.close()?;
        }
        Ok(self.console)
    }
}
